//! Test utilities for Fadein tests.
//!
//! Provides a mock driver and request helpers so pipeline behavior can be
//! validated without real API calls.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver};

use fadein_core::{Input, Message};

/// A well-formed screenplay reply, as the model is instructed to emit.
#[allow(dead_code)]
pub fn valid_reply() -> String {
    serde_json::json!({
        "story_review": "A story about letting go.",
        "script": "FADE IN:\n\nEXT. SCRAPYARD - DUSK",
    })
    .to_string()
}

/// A message in the exchange, by role, as plain text.
#[allow(dead_code)]
pub fn message_text(msg: &Message) -> String {
    msg.content
        .iter()
        .filter_map(Input::as_text)
        .collect::<Vec<_>>()
        .join("\n")
}
