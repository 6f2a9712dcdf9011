//! Google Gemini API client implementation.
//!
//! The client is an explicitly constructed object: callers build it once
//! (from the environment or an explicit key) and pass it into the request
//! pipeline. There is no process-wide cached instance.

mod client;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub(crate) type GeminiResult<T> = std::result::Result<T, fadein_error::GeminiError>;
