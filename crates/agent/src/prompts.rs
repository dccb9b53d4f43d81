//! Prompt templates — one system prompt and one initial user-message
//! template per action.
//!
//! The lead phrases of the user messages are fixed: the offline
//! provider recognizes the action from them.

use writeflow_core::action::WriteAction;
use writeflow_core::conversation::ConversationState;

const GENERATE_SYSTEM: &str = "You are an expert writing assistant. When asked to generate text, provide ONLY the clean, well-written content that should be inserted directly into the document.\n\nDO NOT include:\n- Explanatory text like \"Here's a draft\" or \"Based on your prompt\"\n- Meta-commentary about the writing process\n- Markdown headers or formatting (the editor will handle formatting)\n- References to the prompt or instructions\n\nDO provide:\n- Clean, polished prose that directly fulfills the request\n- Natural paragraph breaks using double line breaks\n- Content that flows seamlessly as if written by the user\n\nAvailable tools:\n- analyze_text_structure: Analyze text structure and organization\n- suggest_improvements: Get specific improvement suggestions\n- extract_key_themes: Identify key themes and topics\n\nFocus on producing clean, insertable content only.";

const EDIT_SYSTEM: &str = "You are an expert editor. Help users improve and refine their existing text.\n\nAvailable tools:\n- analyze_text_structure: Analyze current text structure\n- suggest_improvements: Get targeted improvement suggestions\n- extract_key_themes: Understand content themes\n\nFocus on clarity, coherence, and effective communication. Format your responses using markdown for better readability.";

const IMPROVE_SYSTEM: &str = "You are an expert writing improvement specialist. When asked to improve text, provide ONLY the improved version of the content that should replace the original text in the document.\n\nDO NOT include:\n- Explanatory text about what you changed or why\n- Meta-commentary about the improvement process\n- Markdown headers or formatting (the editor will handle formatting)\n- Analysis or suggestions - just the improved content\n\nDO provide:\n- Clean, polished prose that improves upon the original\n- Natural paragraph breaks using double line breaks\n- Content that flows seamlessly as if written by the user\n- Enhanced clarity, engagement, and readability\n\nAvailable tools:\n- analyze_text_structure: Analyze text structure and organization\n- suggest_improvements: Get specific improvement suggestions\n- extract_key_themes: Identify key themes and topics\n\nFocus on producing clean, improved content only.";

/// The system prompt for an action. Total — every action maps to a
/// fixed template.
pub fn system_prompt(action: WriteAction) -> &'static str {
    match action {
        WriteAction::Generate => GENERATE_SYSTEM,
        WriteAction::Edit => EDIT_SYSTEM,
        WriteAction::Improve => IMPROVE_SYSTEM,
    }
}

/// Compose the initial user message from the subject text and the
/// context keys relevant to the action. Absent or empty keys are
/// simply omitted.
pub fn initial_user_message(state: &ConversationState) -> String {
    match state.action {
        WriteAction::Generate => {
            let mut msg = format!(
                "Please help me generate text based on this prompt: {}",
                state.subject_text
            );
            if let Some(style) = state.context_value("style") {
                msg.push_str(&format!("\n\n**Style:** {style}"));
            }
            if let Some(length) = state.context_value("length") {
                msg.push_str(&format!("\n**Length:** {length}"));
            }
            msg
        }
        WriteAction::Edit => {
            let mut msg = format!(
                "Please help me edit and improve this text:\n\n{}",
                state.subject_text
            );
            if let Some(focus) = state.context_value("focus") {
                msg.push_str(&format!("\n\n**Focus on:** {focus}"));
            }
            msg
        }
        WriteAction::Improve => {
            let mut msg = format!(
                "Please help me improve this text:\n\n{}",
                state.subject_text
            );
            if let Some(aspect) = state.context_value("aspect") {
                msg.push_str(&format!("\n\n**Specific aspect:** {aspect}"));
            }
            msg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn state(action: WriteAction, subject: &str, pairs: &[(&str, &str)]) -> ConversationState {
        let context = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        ConversationState::new(action, subject, context, 3)
    }

    #[test]
    fn each_action_has_distinct_system_prompt() {
        assert_ne!(
            system_prompt(WriteAction::Generate),
            system_prompt(WriteAction::Edit)
        );
        assert_ne!(
            system_prompt(WriteAction::Edit),
            system_prompt(WriteAction::Improve)
        );
    }

    #[test]
    fn generate_message_includes_style_and_length() {
        let s = state(
            WriteAction::Generate,
            "a product blurb",
            &[("style", "playful"), ("length", "short")],
        );
        let msg = initial_user_message(&s);
        assert!(msg.starts_with("Please help me generate text based on this prompt: a product blurb"));
        assert!(msg.contains("**Style:** playful"));
        assert!(msg.contains("**Length:** short"));
    }

    #[test]
    fn absent_context_keys_are_omitted() {
        let s = state(WriteAction::Generate, "a blurb", &[]);
        let msg = initial_user_message(&s);
        assert!(!msg.contains("**Style:**"));
        assert!(!msg.contains("**Length:**"));
    }

    #[test]
    fn edit_message_uses_focus() {
        let s = state(WriteAction::Edit, "draft body", &[("focus", "tone")]);
        let msg = initial_user_message(&s);
        assert!(msg.starts_with("Please help me edit and improve this text:\n\ndraft body"));
        assert!(msg.contains("**Focus on:** tone"));
    }

    #[test]
    fn improve_message_uses_aspect() {
        let s = state(WriteAction::Improve, "draft body", &[("aspect", "flow")]);
        let msg = initial_user_message(&s);
        assert!(msg.starts_with("Please help me improve this text:\n\ndraft body"));
        assert!(msg.contains("**Specific aspect:** flow"));
    }

    #[test]
    fn irrelevant_context_keys_are_ignored() {
        let s = state(WriteAction::Improve, "text", &[("style", "formal")]);
        let msg = initial_user_message(&s);
        assert!(!msg.contains("formal"));
    }
}
