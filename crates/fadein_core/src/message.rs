//! Message types for conversation content.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// A message in a generation exchange.
///
/// # Examples
///
/// ```
/// use fadein_core::{Message, Role, Input};
///
/// let message = Message {
///     role: Role::User,
///     content: vec![Input::Text("Hello!".to_string())],
/// };
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub content: Vec<Input>,
}

impl Message {
    /// Convenience constructor for a single-text message.
    ///
    /// # Examples
    ///
    /// ```
    /// use fadein_core::{Message, Role};
    ///
    /// let msg = Message::text(Role::System, "Output valid JSON only.");
    /// assert_eq!(msg.content.len(), 1);
    /// ```
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![Input::Text(content.into())],
        }
    }
}
