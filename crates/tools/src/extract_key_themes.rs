//! Key theme extraction — frequency-ranked keywords with a fixed
//! stop-word set and deterministic tie-breaking.

use std::collections::HashMap;

use async_trait::async_trait;

use writeflow_core::error::ToolError;
use writeflow_core::tool::{Tool, ToolResult};

/// Tokens shorter than this are never themes.
const MIN_TOKEN_LEN: usize = 4;

/// How many themes to report.
const TOP_N: usize = 5;

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "this", "that", "these", "those",
];

pub struct ExtractKeyThemesTool;

#[async_trait]
impl Tool for ExtractKeyThemesTool {
    fn name(&self) -> &str {
        "extract_key_themes"
    }

    fn description(&self) -> &str {
        "Extract and identify key themes and topics from the text."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The text to extract themes from"
                }
            },
            "required": ["text"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let Some(text) = arguments["text"].as_str() else {
            return Ok(ToolResult {
                call_id: String::new(),
                success: false,
                output: "Missing 'text' argument for extract_key_themes".into(),
            });
        };

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output: extract(text),
        })
    }
}

/// Extract the top themes from a piece of text.
///
/// Ties are broken by first occurrence in the text, so the ranking is
/// deterministic even though the frequency count itself is unordered.
pub fn extract(text: &str) -> String {
    if text.trim().is_empty() {
        return "No themes found in empty text".into();
    }

    // token -> (frequency, first-occurrence index)
    let mut freq: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, raw) in text.to_lowercase().split_whitespace().enumerate() {
        let clean: String = raw.chars().filter(|c| c.is_alphanumeric()).collect();
        if clean.len() < MIN_TOKEN_LEN || STOP_WORDS.contains(&clean.as_str()) {
            continue;
        }
        let entry = freq.entry(clean).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
    ranked.truncate(TOP_N);

    let themes: Vec<String> = ranked.into_iter().map(|(token, _)| token).collect();

    format!("Key themes identified: {}", themes.join(", "))
}
