//! Input types for generation requests.

use serde::{Deserialize, Serialize};

/// Supported inputs to the generation service.
///
/// Fadein exchanges text only; the enum leaves room for richer modalities
/// without breaking the wire format.
///
/// # Examples
///
/// ```
/// use fadein_core::Input;
///
/// let text = Input::Text("A lighthouse keeper finds a message in a bottle.".to_string());
/// assert!(text.as_text().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
}

impl Input {
    /// Borrow the text content, if this input is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) => Some(text),
        }
    }
}
