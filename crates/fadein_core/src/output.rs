//! Output types from model responses.

use serde::{Deserialize, Serialize};

/// Supported outputs from the generation service.
///
/// # Examples
///
/// ```
/// use fadein_core::Output;
///
/// let out = Output::Text("FADE IN:".to_string());
/// assert_eq!(out.as_text(), Some("FADE IN:"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}

impl Output {
    /// Borrow the text content, if this output is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
        }
    }
}
