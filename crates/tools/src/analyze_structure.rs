//! Structure analysis tool — counts words, characters, lines, and
//! paragraphs, and classifies the overall shape of the text.

use async_trait::async_trait;

use writeflow_core::error::ToolError;
use writeflow_core::tool::{Tool, ToolResult};

pub struct AnalyzeStructureTool;

#[async_trait]
impl Tool for AnalyzeStructureTool {
    fn name(&self) -> &str {
        "analyze_text_structure"
    }

    fn description(&self) -> &str {
        "Analyze the structure and organization of text content."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The text to analyze"
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
                output: "Missing 'text' argument for analyze_text_structure".into(),
            });
        };

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output: analyze(text),
        })
    }
}

/// Produce the structure report for a piece of text.
pub fn analyze(text: &str) -> String {
    if text.trim().is_empty() {
        return "Empty text provided".into();
    }

    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    let lines = text.split('\n').count();
    let paragraphs = text.split("\n\n").filter(|p| !p.trim().is_empty()).count();

    let analysis = serde_json::json!({
        "word_count": words,
        "character_count": chars,
        "line_count": lines,
        "paragraph_count": paragraphs,
        "structure": if paragraphs > 1 { "multi-paragraph" } else { "single-block" },
    });

    format!(
        "Text Analysis: {}",
        serde_json::to_string_pretty(&analysis).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_returns_notice() {
        assert_eq!(analyze(""), "Empty text provided");
        assert_eq!(analyze("   \n\t  "), "Empty text provided");
    }

    #[test]
    fn two_paragraphs_are_multi_paragraph() {
        let report = analyze("a\n\nb");
        assert!(report.contains(r#""paragraph_count": 2"#));
        assert!(report.contains("multi-paragraph"));
    }

    #[test]
    fn single_block_classification() {
        let report = analyze("one two three");
        assert!(report.contains(r#""word_count": 3"#));
        assert!(report.contains("single-block"));
    }

    #[test]
    fn counts_lines_and_characters() {
        let report = analyze("ab\ncd");
        assert!(report.contains(r#""line_count": 2"#));
        assert!(report.contains(r#""character_count": 5"#));
    }

    #[tokio::test]
    async fn missing_text_degrades_without_error() {
        let result = AnalyzeStructureTool
            .execute(serde_json::json!({}))
            .await
            .unwrap();
        assert!(!result.success);
        assert!(result.output.contains("Missing 'text'"));
    }

    #[tokio::test]
    async fn execute_reports_via_tool_trait() {
        let result = AnalyzeStructureTool
            .execute(serde_json::json!({"text": "hello world"}))
            .await
            .unwrap();
        assert!(result.success);
        assert!(result.output.contains(r#""word_count": 2"#));
    }
}
