//! Fadein: one-line story idea to five-minute screenplay.
//!
//! This facade crate re-exports the public surface of the Fadein workspace:
//! core request types, the driver trait, the Gemini client, and the
//! screenplay pipeline.
//!
//! # Example
//!
//! ```no_run
//! use fadein::{GeminiClient, generate_screenplay};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//! let outcome = generate_screenplay(
//!     &client,
//!     "Two strangers stuck in an elevator realize they were lovers in a past life.",
//! )
//! .await?;
//! println!("{}", outcome.screenplay().script);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use fadein_core::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, Input, Message, MessageBuilder,
    Output, Role,
};
pub use fadein_error::{
    ConfigError, FadeinError, FadeinErrorKind, FadeinResult, GeminiError, GeminiErrorKind,
    IoError, ScreenplayError, ScreenplayErrorKind,
};
pub use fadein_interface::FadeinDriver;
pub use fadein_models::GeminiClient;
pub use fadein_screenplay::{
    PromptText, Resolution, ResolutionFailure, SYSTEM_INSTRUCTION, Screenplay, ScreenplayOutcome,
    compose, generate_screenplay, resolve,
};
