//! Prompt composition and response resolution for the Fadein screenplay
//! generator.
//!
//! The crate exposes three layers, evaluated in strict sequence per request:
//!
//! 1. [`compose`] builds the outbound instruction prompt from a fixed
//!    template and the user's one-line story idea.
//! 2. A [`FadeinDriver`](fadein_interface::FadeinDriver) backend turns the
//!    prompt into raw model text (the only suspension point).
//! 3. [`resolve`] parses the raw text into a typed [`Screenplay`], tolerating
//!    the common ways LLMs violate formatting instructions (markdown fences,
//!    surrounding prose, unescaped control characters).
//!
//! [`generate_screenplay`] ties the three together for callers that want the
//! whole pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod pipeline;
mod resolve;

pub use compose::{PromptText, SYSTEM_INSTRUCTION, compose};
pub use pipeline::{ScreenplayOutcome, generate_screenplay};
pub use resolve::{Resolution, ResolutionFailure, Screenplay, resolve};
