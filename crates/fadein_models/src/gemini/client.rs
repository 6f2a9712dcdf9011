//! Google Gemini API implementation.
//!
//! This module provides a thin client for the Google Gemini API with:
//! - Per-request model selection (`GenerateRequest.model` overrides the default)
//! - An explicit per-request deadline enforced with `tokio::time::timeout`
//! - Structured error mapping, including HTTP status extraction from SDK
//!   error strings
//!
//! The client carries no hidden lifecycle state: construct it explicitly and
//! pass it to the request pipeline.
//!
//! # Example
//!
//! ```no_run
//! use fadein_models::GeminiClient;
//! use fadein_core::{GenerateRequest, Message, Role};
//! use fadein_interface::FadeinDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//!
//! let request = GenerateRequest {
//!     messages: vec![Message::text(Role::User, "Hello")],
//!     ..Default::default()
//! };
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use std::time::Duration;
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use fadein_core::{GenerateRequest, GenerateResponse, Input, Output, Role};
use fadein_error::{FadeinResult, GeminiError, GeminiErrorKind};
use fadein_interface::FadeinDriver;

use super::GeminiResult;

/// Default model for screenplay generation.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default request deadline in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for the Google Gemini API.
pub struct GeminiClient {
    /// API key for creating per-request SDK clients
    api_key: String,
    /// Default model name when `req.model` is None
    model_name: String,
    /// Request deadline
    timeout: Duration,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client from the environment.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    /// A missing key is a fatal configuration error: nothing downstream can
    /// run without it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fadein_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_from_env")]
    pub fn from_env() -> FadeinResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a new Gemini client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_name: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Override the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Maps common model name strings to their corresponding Model enum
    /// variants. Uses Model::Custom for unrecognized model names,
    /// automatically adding the "models/" prefix required by the Gemini API.
    ///
    /// # Examples
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    /// - "models/gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash") (preserved)
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Extract text content from an input.
    fn extract_text(input: &Input) -> Option<String> {
        input.as_text().map(str::to_string)
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model_name = req.model.as_deref().unwrap_or(&self.model_name);
        let model_enum = Self::model_name_to_enum(model_name);

        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        let mut builder = client.generate_content();

        // Gemini uses a separate system prompt; the last system message wins.
        let mut system_prompt = None;

        for msg in &req.messages {
            match msg.role {
                Role::System => {
                    if let Some(text) = msg.content.iter().find_map(Self::extract_text) {
                        system_prompt = Some(text);
                    }
                }
                Role::User => {
                    for input in &msg.content {
                        if let Some(text) = Self::extract_text(input) {
                            builder = builder.with_user_message(&text);
                        }
                    }
                }
                Role::Assistant => {
                    if let Some(text) = msg.content.iter().find_map(Self::extract_text) {
                        builder = builder.with_model_message(&text);
                    }
                }
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }

        if let Some(max_tok) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tok as i32);
        }

        tracing::debug!(
            model = model_name,
            timeout_secs = self.timeout.as_secs(),
            "Sending Gemini generation request"
        );

        let response = tokio::time::timeout(self.timeout, builder.execute())
            .await
            .map_err(|_| {
                GeminiError::new(GeminiErrorKind::Timeout(self.timeout.as_secs()))
            })?
            .map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError
    /// with HTTP status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        // Example: "bad response from server; code 503; description: ..."
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl FadeinDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> FadeinResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_names_map_to_enum_variants() {
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-flash"),
            Model::Gemini25Flash
        ));
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-pro"),
            Model::Gemini25Pro
        ));
    }

    #[test]
    fn unknown_model_names_get_models_prefix() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected Custom variant"),
        }
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected Custom variant"),
        }
    }

    #[test]
    fn status_code_extraction() {
        assert_eq!(
            GeminiClient::extract_status_code(
                "bad response from server; code 503; description: overloaded"
            ),
            Some(503)
        );
        assert_eq!(
            GeminiClient::extract_status_code("connection reset by peer"),
            None
        );
    }

    #[test]
    fn explicit_construction_overrides() {
        let client = GeminiClient::with_api_key("test-key").with_model("gemini-2.5-flash");
        assert_eq!(client.model_name(), "gemini-2.5-flash");
        assert_eq!(client.provider_name(), "gemini");
    }
}
