//! Trait definitions for the Fadein screenplay generator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::FadeinDriver;
