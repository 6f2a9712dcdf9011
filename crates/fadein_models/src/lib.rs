//! LLM provider integrations for the Fadein screenplay generator.
//!
//! Currently a single provider is supported: Google Gemini, via the
//! `gemini-rust` SDK.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
