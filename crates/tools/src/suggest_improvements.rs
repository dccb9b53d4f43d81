//! Improvement suggestion tool — a fixed ordered list of three
//! suggestions per focus area.

use async_trait::async_trait;

use writeflow_core::error::ToolError;
use writeflow_core::tool::{Tool, ToolResult};

pub struct SuggestImprovementsTool;

#[async_trait]
impl Tool for SuggestImprovementsTool {
    fn name(&self) -> &str {
        "suggest_improvements"
    }

    fn description(&self) -> &str {
        "Suggest specific improvements for the given text based on focus area."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The text to improve"
                },
                "focus": {
                    "type": "string",
                    "description": "Focus area: clarity, structure, engagement, or general",
                    "enum": ["clarity", "structure", "engagement", "general"]
                }
            },
            "required": ["text"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let focus = arguments["focus"].as_str().unwrap_or("general");

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output: suggest(focus),
        })
    }
}

/// Build the suggestion list for a focus area. Unrecognized focus
/// values fall back to "general".
pub fn suggest(focus: &str) -> String {
    let (label, suggestions): (&str, [&str; 3]) = match focus {
        "clarity" => (
            "clarity",
            [
                "Consider breaking long sentences into shorter ones",
                "Use active voice where possible",
                "Replace complex words with simpler alternatives",
            ],
        ),
        "structure" => (
            "structure",
            [
                "Add clear topic sentences to paragraphs",
                "Use transitional phrases between ideas",
                "Consider reorganizing for logical flow",
            ],
        ),
        "engagement" => (
            "engagement",
            [
                "Add compelling examples or anecdotes",
                "Use questions to engage readers",
                "Vary sentence length and structure",
            ],
        ),
        _ => (
            "general",
            [
                "Check for grammar and spelling errors",
                "Ensure consistent tone throughout",
                "Remove unnecessary words and phrases",
            ],
        ),
    };

    format!("Improvement suggestions for {label}: {}", suggestions.join("; "))
}
