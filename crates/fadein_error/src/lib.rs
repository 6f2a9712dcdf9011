//! Error types for the Fadein screenplay generator.
//!
//! This crate provides the foundation error types used throughout the Fadein
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fadein_error::{ConfigError, FadeinResult};
//!
//! fn load_key() -> FadeinResult<String> {
//!     Err(ConfigError::new("GEMINI_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got key of length {}", key.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod io;
mod screenplay;

pub use config::ConfigError;
pub use error::{FadeinError, FadeinErrorKind, FadeinResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use io::IoError;
pub use screenplay::{ScreenplayError, ScreenplayErrorKind};
