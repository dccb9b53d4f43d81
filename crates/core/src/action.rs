//! The writing actions the service supports.
//!
//! Every request is one of three actions. The action selects the
//! system prompt, the initial user-message template, and the SSE
//! event name prefix — it never changes for the lifetime of a
//! request.

use serde::{Deserialize, Serialize};

/// A closed set of writing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    /// Produce new text from a prompt.
    Generate,
    /// Rework existing text, explaining the changes.
    Edit,
    /// Return an improved version of existing text.
    Improve,
}

impl WriteAction {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Edit => "edit",
            Self::Improve => "improve",
        }
    }

    /// The prefix used in SSE event type names.
    ///
    /// Generate streams as "generation_*" — the event names are part
    /// of the client protocol and are not derived from `as_str`.
    pub fn stream_label(&self) -> &'static str {
        match self {
            Self::Generate => "generation",
            Self::Edit => "edit",
            Self::Improve => "improve",
        }
    }

    /// Capitalized label for human-readable start/complete messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Generate => "Generation",
            Self::Edit => "Edit",
            Self::Improve => "Improve",
        }
    }

    /// Parse an action name. Unknown names fall back to `Generate`,
    /// which also owns the fallback prompt template.
    pub fn parse(s: &str) -> Self {
        match s {
            "edit" => Self::Edit,
            "improve" => Self::Improve,
            _ => Self::Generate,
        }
    }
}

impl std::fmt::Display for WriteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_actions() {
        assert_eq!(WriteAction::parse("generate"), WriteAction::Generate);
        assert_eq!(WriteAction::parse("edit"), WriteAction::Edit);
        assert_eq!(WriteAction::parse("improve"), WriteAction::Improve);
    }

    #[test]
    fn parse_unknown_falls_back_to_generate() {
        assert_eq!(WriteAction::parse("summarize"), WriteAction::Generate);
        assert_eq!(WriteAction::parse(""), WriteAction::Generate);
    }

    #[test]
    fn generate_streams_as_generation() {
        assert_eq!(WriteAction::Generate.stream_label(), "generation");
        assert_eq!(WriteAction::Edit.stream_label(), "edit");
        assert_eq!(WriteAction::Improve.stream_label(), "improve");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&WriteAction::Improve).unwrap();
        assert_eq!(json, r#""improve""#);
        let back: WriteAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WriteAction::Improve);
    }
}
