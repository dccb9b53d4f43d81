//! Built-in tool implementations for writeflow.
//!
//! Three pure, stateless text-analysis tools the model can request
//! mid-conversation: structure analysis, improvement suggestions,
//! and key-theme extraction. Every tool is total — malformed input
//! degrades to a descriptive message, never an error.

pub mod analyze_structure;
pub mod extract_key_themes;
pub mod suggest_improvements;

use writeflow_core::tool::ToolRegistry;

/// Create the default tool registry with all built-in tools.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(analyze_structure::AnalyzeStructureTool));
    registry.register(Box::new(suggest_improvements::SuggestImprovementsTool));
    registry.register(Box::new(extract_key_themes::ExtractKeyThemesTool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_all_three_tools() {
        let registry = default_registry();
        let mut names = registry.names();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "analyze_text_structure",
                "extract_key_themes",
                "suggest_improvements"
            ]
        );
    }
}
