//! Screenplay pipeline error types.

/// Specific error conditions for screenplay generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScreenplayErrorKind {
    /// Story idea is empty or contains only whitespace
    #[display("Story idea cannot be empty")]
    EmptyIdea,
    /// Model response could not be resolved into a screenplay
    #[display("Failed to resolve model response: {}", message)]
    Unresolvable {
        /// Description of the parse failure
        message: String,
        /// Bounded prefix of the raw response, for diagnostics
        excerpt: String,
    },
}

/// Error type for screenplay generation operations.
///
/// # Examples
///
/// ```
/// use fadein_error::{ScreenplayError, ScreenplayErrorKind};
///
/// let err = ScreenplayError::new(ScreenplayErrorKind::EmptyIdea);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Screenplay Error: {} at line {} in {}", kind, line, file)]
pub struct ScreenplayError {
    /// The specific error condition
    pub kind: ScreenplayErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScreenplayError {
    /// Create a new ScreenplayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScreenplayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
