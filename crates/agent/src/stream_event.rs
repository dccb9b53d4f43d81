//! Stream lifecycle events.
//!
//! `StreamEvent` frames the fragment sequence for delivery to the
//! client: one `Start`, one `Chunk` per fragment, then exactly one
//! terminal event — `Complete` on normal exhaustion or `Error` on
//! failure, never both.

use serde::{Deserialize, Serialize};

use writeflow_core::action::WriteAction;

/// One wire-level event in a response stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StreamEvent {
    /// The stream has opened.
    Start { message: String },

    /// One text fragment, in order.
    Chunk { content: String },

    /// Terminal: the fragment sequence was exhausted normally.
    Complete { message: String },

    /// Terminal: producing the text failed. Nothing follows.
    Error { message: String },
}

impl StreamEvent {
    /// Standard start event for an action.
    pub fn start(action: WriteAction) -> Self {
        Self::Start {
            message: format!("Starting {}...", action.stream_label()),
        }
    }

    /// Standard completion event for an action.
    pub fn complete(action: WriteAction) -> Self {
        Self::Complete {
            message: format!("{} completed", action.title()),
        }
    }

    /// Whether this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Error { .. })
    }

    /// Serialize to the client protocol JSON.
    ///
    /// Event type names are prefixed with the action's stream label
    /// ("generation_start", "edit_chunk", ...); the error frame is
    /// always plain "error".
    pub fn wire_json(&self, action: WriteAction) -> String {
        let label = action.stream_label();
        let value = match self {
            Self::Start { message } => serde_json::json!({
                "type": format!("{label}_start"),
                "message": message,
            }),
            Self::Chunk { content } => serde_json::json!({
                "type": format!("{label}_chunk"),
                "content": content,
            }),
            Self::Complete { message } => serde_json::json!({
                "type": format!("{label}_complete"),
                "message": message,
            }),
            Self::Error { message } => serde_json::json!({
                "type": "error",
                "message": message,
            }),
        };
        value.to_string()
    }
}
