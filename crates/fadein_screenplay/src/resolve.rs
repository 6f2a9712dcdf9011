//! Response resolution.
//!
//! The generation service is instructed to reply with a single JSON object,
//! but LLMs are not guaranteed to honor formatting instructions exactly: they
//! wrap output in markdown fences, prepend commentary, and emit raw newlines
//! inside string literals. This module resolves such semi-structured replies
//! into a typed [`Screenplay`] through three ordered attempts: fence
//! stripping, a permissive direct parse, and a brace-boundary recovery parse.

use serde::{Deserialize, Serialize};

/// Maximum number of bytes of raw text carried in a [`ResolutionFailure`].
const EXCERPT_LIMIT: usize = 2000;

/// A parsed screenplay result.
///
/// Both fields are lenient: a key missing from the model's JSON object
/// becomes an empty string rather than a failure, and extra keys are
/// ignored. The consuming layer decides how to react to an empty field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Screenplay {
    /// Narrative synopsis and structured creative review.
    #[serde(default)]
    pub story_review: String,
    /// The formatted screenplay text.
    #[serde(default)]
    pub script: String,
}

/// Successful resolution, discriminating how the parse succeeded.
///
/// `Recovered` signals that the strict path failed and the brace-boundary
/// fallback was needed, so the presentation layer can warn the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Direct parse of the (fence-stripped) response succeeded.
    Clean(Screenplay),
    /// Parse succeeded only after slicing between the outermost braces.
    Recovered(Screenplay),
}

impl Resolution {
    /// Borrow the parsed screenplay.
    pub fn screenplay(&self) -> &Screenplay {
        match self {
            Resolution::Clean(s) | Resolution::Recovered(s) => s,
        }
    }

    /// Consume the resolution, returning the screenplay.
    pub fn into_screenplay(self) -> Screenplay {
        match self {
            Resolution::Clean(s) | Resolution::Recovered(s) => s,
        }
    }

    /// True if the brace-boundary fallback was needed.
    pub fn recovered(&self) -> bool {
        matches!(self, Resolution::Recovered(_))
    }
}

/// Typed, non-fatal resolution failure.
///
/// Carries the parser's error description and a bounded prefix of the raw
/// response for diagnostic display. Never panics out of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Failed to parse model response as JSON: {}", message)]
pub struct ResolutionFailure {
    /// The parser's error description.
    pub message: String,
    /// Prefix of the raw response (at most 2000 bytes, on a char boundary).
    pub excerpt: String,
}

/// Resolve raw model output into a typed screenplay.
///
/// Ordered algorithm, each step attempted only if the prior did not succeed:
/// 1. Strip leading/trailing markdown fence markers (purely textual).
/// 2. Permissive direct parse of the stripped text.
/// 3. Recovery parse of the slice between the first `{` and the last `}`.
///
/// The tie-break in step 3 is deliberately naive: always the first `{` and
/// the last `}`, with no search for a best-matching pair. Responses with
/// stray braces in narrative text around the real object can therefore still
/// fail; that is an accepted limitation rather than behavior to mask.
///
/// # Errors
///
/// Returns a [`ResolutionFailure`] when both parse attempts fail. The raw
/// input is never mutated; all work happens on derived copies.
///
/// # Examples
///
/// ```
/// use fadein_screenplay::resolve;
///
/// let raw = "```json\n{\"story_review\": \"A tale.\", \"script\": \"FADE IN:\"}\n```";
/// let resolution = resolve(raw).unwrap();
/// assert_eq!(resolution.screenplay().script, "FADE IN:");
/// assert!(!resolution.recovered());
/// ```
pub fn resolve(raw: &str) -> Result<Resolution, ResolutionFailure> {
    let stripped = strip_fences(raw);

    let direct_err = match parse_permissive(stripped) {
        Ok(screenplay) => return Ok(Resolution::Clean(screenplay)),
        Err(e) => e,
    };

    tracing::debug!(
        error = %direct_err,
        response_length = raw.len(),
        "Direct parse failed, attempting brace-boundary recovery"
    );

    // The braces are ASCII, so byte positions from find/rfind are valid
    // slice boundaries.
    if let (Some(start), Some(end)) = (stripped.find('{'), stripped.rfind('}')) {
        if end > start {
            if let Ok(screenplay) = parse_permissive(&stripped[start..=end]) {
                tracing::warn!(
                    response_length = raw.len(),
                    "Resolved model response via brace-boundary recovery"
                );
                return Ok(Resolution::Recovered(screenplay));
            }
        }
    }

    tracing::error!(
        error = %direct_err,
        response_length = raw.len(),
        "Failed to resolve model response"
    );

    Err(ResolutionFailure {
        message: direct_err.to_string(),
        excerpt: bounded_prefix(raw, EXCERPT_LIMIT),
    })
}

/// Strip markdown fence markers from the edges of a response.
///
/// Removes a leading ```` ```json ```` marker (or, failing that, a generic
/// ```` ``` ```` marker) and a trailing ```` ``` ```` marker, re-trimming
/// whitespace after each removal. Purely textual; never inspects JSON
/// structure.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim();
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim();
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim();
    }

    text
}

/// Parse a candidate JSON object, tolerating raw control characters.
///
/// serde_json rejects unescaped control characters inside string literals,
/// which LLMs routinely emit despite instructions. Rather than a custom
/// parser, the candidate is pre-processed to escape bare control characters
/// that occur inside string literals, then handed to serde_json. This is a
/// deliberate deviation from strict JSON, matching the permissiveness the
/// rest of the pipeline assumes. Extra keys are ignored; missing keys
/// default to empty strings via `#[serde(default)]`.
fn parse_permissive(candidate: &str) -> Result<Screenplay, serde_json::Error> {
    serde_json::from_str(&escape_raw_controls(candidate))
}

/// Escape raw control characters occurring inside JSON string literals.
///
/// Walks the text tracking string and escape state, so control characters in
/// structural positions (ordinary whitespace between tokens) are left alone.
fn escape_raw_controls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escape_next = false;

    for ch in text.chars() {
        if escape_next {
            escape_next = false;
            out.push(ch);
            continue;
        }

        match ch {
            '\\' if in_string => {
                escape_next = true;
                out.push(ch);
            }
            '"' => {
                in_string = !in_string;
                out.push(ch);
            }
            c if in_string && c.is_control() => match c {
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                other => {
                    out.push_str(&format!("\\u{:04x}", other as u32));
                }
            },
            c => out.push(c),
        }
    }

    out
}

/// Take a prefix of at most `limit` bytes, backing off to a char boundary.
fn bounded_prefix(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
