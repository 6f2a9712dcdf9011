//! Core data types for the Fadein screenplay generator.
//!
//! This crate provides the foundation data types shared by the provider
//! clients and the screenplay pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod message;
mod output;
mod request;
mod role;

pub use input::Input;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
