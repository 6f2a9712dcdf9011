//! Request pipeline: idea → prompt → driver → resolution.
//!
//! One user action triggers exactly one outbound generation call and one
//! resolve step. All entities are request-scoped; nothing is retained
//! between requests, so concurrent calls need no synchronization.

use crate::{Screenplay, SYSTEM_INSTRUCTION, compose, resolve};
use fadein_core::{GenerateRequest, Message, Role};
use fadein_error::{FadeinResult, ScreenplayError, ScreenplayErrorKind};
use fadein_interface::FadeinDriver;

/// Sampling temperature for screenplay generation. High, to favor varied
/// emotional prose.
const TEMPERATURE: f32 = 0.9;

/// Output ceiling generous enough for a multi-page screenplay.
const MAX_OUTPUT_TOKENS: u32 = 8000;

/// Result of a full screenplay generation request.
///
/// # Examples
///
/// ```
/// use fadein_screenplay::{Screenplay, ScreenplayOutcome};
///
/// let outcome = ScreenplayOutcome::new(
///     Screenplay {
///         story_review: "A tale of loss.".to_string(),
///         script: "FADE IN:".to_string(),
///     },
///     false,
/// );
/// assert!(!outcome.recovered());
/// assert_eq!(outcome.screenplay().script, "FADE IN:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ScreenplayOutcome {
    /// The parsed screenplay.
    screenplay: Screenplay,
    /// True if the resolver needed the brace-boundary recovery path; the
    /// presentation layer should warn the user.
    #[getter(copy)]
    recovered: bool,
}

impl ScreenplayOutcome {
    /// Create a new outcome.
    pub fn new(screenplay: Screenplay, recovered: bool) -> Self {
        Self {
            screenplay,
            recovered,
        }
    }

    /// Consume the outcome, returning the screenplay.
    pub fn into_screenplay(self) -> Screenplay {
        self.screenplay
    }
}

/// Generate a screenplay from a one-line story idea.
///
/// Validates that the idea is non-empty after trimming, composes the master
/// prompt, sends it through the driver with the creative generation settings
/// (temperature 0.9, 8000-token ceiling), and resolves the raw reply.
///
/// # Errors
///
/// - [`ScreenplayErrorKind::EmptyIdea`] if the idea is blank.
/// - Any driver error (network, auth, quota, timeout), propagated as-is.
/// - [`ScreenplayErrorKind::Unresolvable`] if the reply cannot be parsed,
///   carrying the parser diagnostics and a bounded raw-text excerpt.
pub async fn generate_screenplay<D>(driver: &D, idea: &str) -> FadeinResult<ScreenplayOutcome>
where
    D: FadeinDriver + ?Sized,
{
    if idea.trim().is_empty() {
        return Err(ScreenplayError::new(ScreenplayErrorKind::EmptyIdea).into());
    }

    let prompt = compose(idea);

    tracing::info!(
        provider = driver.provider_name(),
        model = driver.model_name(),
        prompt_length = prompt.as_str().len(),
        "Generating screenplay"
    );

    let request = GenerateRequest {
        messages: vec![
            Message::text(Role::System, SYSTEM_INSTRUCTION),
            Message::text(Role::User, prompt.into_inner()),
        ],
        max_tokens: Some(MAX_OUTPUT_TOKENS),
        temperature: Some(TEMPERATURE),
        model: None,
    };

    let response = driver.generate(&request).await?;
    let raw = response.text();

    tracing::debug!(response_length = raw.len(), "Received model response");

    match resolve(&raw) {
        Ok(resolution) => {
            let recovered = resolution.recovered();
            if recovered {
                tracing::warn!("Had to manually extract JSON from model response");
            }
            let screenplay = resolution.into_screenplay();
            tracing::info!(
                review_length = screenplay.story_review.len(),
                script_length = screenplay.script.len(),
                recovered,
                "Screenplay generated"
            );
            Ok(ScreenplayOutcome::new(screenplay, recovered))
        }
        Err(failure) => Err(ScreenplayError::new(ScreenplayErrorKind::Unresolvable {
            message: failure.message,
            excerpt: failure.excerpt,
        })
        .into()),
    }
}
