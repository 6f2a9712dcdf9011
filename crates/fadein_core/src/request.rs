//! Request and response types for model generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Generation request sent to a provider driver.
///
/// # Examples
///
/// ```
/// use fadein_core::{GenerateRequest, Message, Role, Input};
///
/// let request = GenerateRequest {
///     messages: vec![Message {
///         role: Role::User,
///         content: vec![Input::Text("Hello!".to_string())],
///     }],
///     max_tokens: Some(100),
///     temperature: Some(0.7),
///     model: Some("gemini-2.0-flash".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Create a builder for this request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use fadein_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("FADE IN:".to_string())],
/// };
///
/// assert_eq!(response.text(), "FADE IN:");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Flatten all text outputs into a single string, newline-joined.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(Output::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Input, MessageBuilder, Role};

    #[test]
    fn request_builder_round_trip() {
        let message = MessageBuilder::default()
            .role(Role::User)
            .content(vec![Input::Text("Test".to_string())])
            .build()
            .unwrap();

        let request = GenerateRequest::builder()
            .messages(vec![message])
            .max_tokens(Some(10))
            .build()
            .unwrap();

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.max_tokens, Some(10));
        assert_eq!(request.temperature, None);
        assert_eq!(request.model, None);
    }

    #[test]
    fn response_text_joins_outputs() {
        let response = GenerateResponse {
            outputs: vec![
                Output::Text("first".to_string()),
                Output::Text("second".to_string()),
            ],
        };
        assert_eq!(response.text(), "first\nsecond");
    }
}
