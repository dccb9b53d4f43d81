//! Per-request conversation state.
//!
//! One `ConversationState` is created per inbound request, owned
//! exclusively by one agent loop invocation, and discarded when the
//! response stream completes. Nothing here outlives a request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::action::WriteAction;
use crate::message::{Message, Role};

/// The mutable state driven by one agent loop invocation.
///
/// Invariants:
/// - `messages` is empty only before the first reasoning cycle; after
///   seeding it always begins with one system entry then one user entry.
/// - `iterations` never exceeds `max_iterations`.
/// - `action` and `subject_text` are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    /// Ordered transcript sent verbatim to the provider
    pub messages: Vec<Message>,

    /// The original prompt or content supplied by the caller
    pub subject_text: String,

    /// Optional request context (style, length, focus, aspect, ...)
    pub context: HashMap<String, String>,

    /// Which writing operation this request performs
    pub action: WriteAction,

    /// Reasoning cycles performed so far
    pub iterations: u32,

    /// Upper bound on reasoning cycles
    pub max_iterations: u32,
}

impl ConversationState {
    /// Create fresh state for one request.
    pub fn new(
        action: WriteAction,
        subject_text: impl Into<String>,
        context: HashMap<String, String>,
        max_iterations: u32,
    ) -> Self {
        Self {
            messages: Vec::new(),
            subject_text: subject_text.into(),
            context,
            action,
            iterations: 0,
            max_iterations,
        }
    }

    /// Append a message to the transcript.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Whether the initial system + user messages have been seeded.
    pub fn is_seeded(&self) -> bool {
        !self.messages.is_empty()
    }

    /// The most recent assistant message, if any.
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == Role::Assistant)
    }

    /// A context value by key, skipping empty strings.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}
