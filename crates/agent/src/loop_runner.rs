//! The bounded agent loop implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use writeflow_core::conversation::ConversationState;
use writeflow_core::error::Error;
use writeflow_core::message::Message;
use writeflow_core::provider::{Provider, ProviderRequest};
use writeflow_core::tool::{ToolCall, ToolRegistry};

use crate::prompts;

/// The agent loop that orchestrates reasoning calls and tool dispatch
/// for one request at a time.
///
/// The loop itself is stateless and shared between requests; all
/// per-request state lives in the `ConversationState` passed to
/// `process`.
pub struct AgentLoop {
    /// The reasoning backend
    provider: Arc<dyn Provider>,

    /// The model to use
    model: String,

    /// Temperature setting
    temperature: f32,

    /// Default max tokens per response
    max_tokens: Option<u32>,

    /// Tool registry
    tools: Arc<ToolRegistry>,
}

impl AgentLoop {
    /// Create a new agent loop.
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        temperature: f32,
        tools: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            max_tokens: None,
            tools,
        }
    }

    /// Set the default max tokens per model response.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Whether the configured provider is reachable.
    pub async fn is_ready(&self) -> bool {
        self.provider.health_check().await.unwrap_or(false)
    }

    /// Run the state machine for one request and return the final
    /// assistant text.
    ///
    /// Provider failures are absorbed as error-carrying assistant
    /// entries and tool failures as descriptive tool-result strings;
    /// neither aborts the request. The only `Err` this returns is an
    /// internal one for a transcript that somehow ends without an
    /// assistant entry, which the streaming adapter reports as the
    /// stream's terminal error event.
    pub async fn process(&self, state: &mut ConversationState) -> Result<String, Error> {
        if !state.is_seeded() {
            state.push(Message::system(prompts::system_prompt(state.action)));
            state.push(Message::user(prompts::initial_user_message(state)));
        }

        info!(
            action = %state.action,
            max_iterations = state.max_iterations,
            "Processing request"
        );

        let tool_definitions = self.tools.definitions();

        loop {
            // Reasoning: exactly one increment per cycle, success or not.
            state.iterations += 1;

            debug!(iteration = state.iterations, "Agent loop iteration");

            let request = ProviderRequest {
                model: self.model.clone(),
                messages: state.messages.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                tools: tool_definitions.clone(),
            };

            match self.provider.complete(request).await {
                Ok(response) => {
                    state.push(response.message);
                }
                Err(e) => {
                    warn!(error = %e, "Provider call failed, substituting error message");
                    state.push(Message::assistant(format!("I encountered an error: {e}")));
                }
            }

            // The bound is checked before tool dispatch: a tool request
            // on the final permitted cycle gets no extra dispatch, since
            // its results could never be reasoned over.
            if state.iterations >= state.max_iterations {
                break;
            }

            let tool_calls = match state.last_assistant() {
                Some(msg) if !msg.tool_calls.is_empty() => msg.tool_calls.clone(),
                _ => break,
            };

            // Tooling: dispatch each call in request order.
            debug!(tool_count = tool_calls.len(), "Executing tool calls");

            for tc in &tool_calls {
                let call = ToolCall {
                    id: tc.id.clone(),
                    name: tc.name.clone(),
                    arguments: serde_json::from_str(&tc.arguments).unwrap_or_default(),
                };

                match self.tools.execute(&call).await {
                    Ok(result) => {
                        state.push(Message::tool_result(&tc.id, &result.output));
                    }
                    Err(e) => {
                        warn!(tool = %tc.name, error = %e, "Tool dispatch failed");
                        state.push(Message::tool_result(&tc.id, format!("Error: {e}")));
                    }
                }
            }
        }

        state
            .last_assistant()
            .map(|m| m.content.clone())
            .ok_or_else(|| Error::Internal("conversation ended without an assistant message".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use writeflow_core::action::WriteAction;
    use writeflow_core::error::ProviderError;
    use writeflow_core::message::{MessageToolCall, Role};
    use writeflow_core::provider::ProviderResponse;

    /// A mock provider that returns a fixed text response.
    struct TextProvider {
        response: String,
        calls: Mutex<u32>,
    }

    impl TextProvider {
        fn new(response: &str) -> Self {
            Self {
                response: response.into(),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl Provider for TextProvider {
        fn name(&self) -> &str {
            "mock-text"
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            *self.calls.lock().unwrap() += 1;
            Ok(ProviderResponse {
                message: Message::assistant(&self.response),
                usage: None,
                model: "mock".into(),
            })
        }
    }

    /// A mock provider that always requests one tool call.
    struct ToolHungryProvider {
        tool: String,
        calls: Mutex<u32>,
    }

    #[async_trait]
    impl Provider for ToolHungryProvider {
        fn name(&self) -> &str {
            "mock-tools"
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            let message = Message::assistant(format!("checking with tools (round {calls})"))
                .with_tool_calls(vec![MessageToolCall {
                    id: format!("call_{calls}"),
                    name: self.tool.clone(),
                    arguments: r#"{"text":"alpha alpha beta"}"#.into(),
                }]);
            Ok(ProviderResponse {
                message,
                usage: None,
                model: "mock".into(),
            })
        }
    }

    /// A mock provider that always fails.
    struct FailingProvider;

    #[async_trait]
    impl Provider for FailingProvider {
        fn name(&self) -> &str {
            "mock-failing"
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            Err(ProviderError::Network("connection refused".into()))
        }
    }

    fn fresh_state(max_iterations: u32) -> ConversationState {
        ConversationState::new(
            WriteAction::Generate,
            "a short note",
            HashMap::new(),
            max_iterations,
        )
    }

    fn agent(provider: Arc<dyn Provider>) -> AgentLoop {
        AgentLoop::new(
            provider,
            "mock",
            0.7,
            Arc::new(writeflow_tools::default_registry()),
        )
    }

    #[tokio::test]
    async fn text_response_ends_after_one_cycle() {
        let provider = Arc::new(TextProvider::new("Here is your note."));
        let loop_ = agent(provider.clone());

        let mut state = fresh_state(3);
        let response = loop_.process(&mut state).await.unwrap();

        assert_eq!(response, "Here is your note.");
        assert_eq!(state.iterations, 1);
        assert_eq!(*provider.calls.lock().unwrap(), 1);
        // system + user + assistant
        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.messages[0].role, Role::System);
        assert_eq!(state.messages[1].role, Role::User);
    }

    #[tokio::test]
    async fn tool_hungry_provider_is_bounded() {
        let provider = Arc::new(ToolHungryProvider {
            tool: "extract_key_themes".into(),
            calls: Mutex::new(0),
        });
        let loop_ = agent(provider.clone());

        let mut state = fresh_state(3);
        let response = loop_.process(&mut state).await.unwrap();

        // N reasoning cycles, N-1 tooling cycles
        assert_eq!(state.iterations, 3);
        assert_eq!(*provider.calls.lock().unwrap(), 3);
        let tool_results = state
            .messages
            .iter()
            .filter(|m| m.role == Role::Tool)
            .count();
        assert_eq!(tool_results, 2);
        assert_eq!(response, "checking with tools (round 3)");
    }

    #[tokio::test]
    async fn bound_of_one_means_single_reasoning_no_tools() {
        let provider = Arc::new(ToolHungryProvider {
            tool: "extract_key_themes".into(),
            calls: Mutex::new(0),
        });
        let loop_ = agent(provider);

        let mut state = fresh_state(1);
        loop_.process(&mut state).await.unwrap();

        assert_eq!(state.iterations, 1);
        assert!(state.messages.iter().all(|m| m.role != Role::Tool));
    }

    #[tokio::test]
    async fn provider_failure_becomes_assistant_entry() {
        let loop_ = agent(Arc::new(FailingProvider));

        let mut state = fresh_state(3);
        let response = loop_.process(&mut state).await.unwrap();

        assert!(response.contains("I encountered an error"));
        assert!(response.contains("connection refused"));
        // Failure still counts as one reasoning cycle, then ends
        assert_eq!(state.iterations, 1);
    }

    #[tokio::test]
    async fn unknown_tool_yields_error_result_and_continues() {
        let provider = Arc::new(ToolHungryProvider {
            tool: "word_cloud".into(),
            calls: Mutex::new(0),
        });
        let loop_ = agent(provider);

        let mut state = fresh_state(2);
        loop_.process(&mut state).await.unwrap();

        let tool_result = state
            .messages
            .iter()
            .find(|m| m.role == Role::Tool)
            .expect("tool result entry");
        assert!(tool_result.content.contains("Tool not found"));
        assert_eq!(state.iterations, 2);
    }

    #[tokio::test]
    async fn tool_results_preserve_request_order() {
        /// Requests two tools in a fixed order on the first cycle,
        /// then answers with text.
        struct TwoToolProvider {
            calls: Mutex<u32>,
        }

        #[async_trait]
        impl Provider for TwoToolProvider {
            fn name(&self) -> &str {
                "mock-two-tools"
            }

            async fn complete(
                &self,
                _request: ProviderRequest,
            ) -> Result<ProviderResponse, ProviderError> {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                let message = if *calls == 1 {
                    Message::assistant("").with_tool_calls(vec![
                        MessageToolCall {
                            id: "call_a".into(),
                            name: "analyze_text_structure".into(),
                            arguments: r#"{"text":"one two"}"#.into(),
                        },
                        MessageToolCall {
                            id: "call_b".into(),
                            name: "extract_key_themes".into(),
                            arguments: r#"{"text":"alpha alpha beta"}"#.into(),
                        },
                    ])
                } else {
                    Message::assistant("done")
                };
                Ok(ProviderResponse {
                    message,
                    usage: None,
                    model: "mock".into(),
                })
            }
        }

        let loop_ = agent(Arc::new(TwoToolProvider {
            calls: Mutex::new(0),
        }));

        let mut state = fresh_state(3);
        let response = loop_.process(&mut state).await.unwrap();
        assert_eq!(response, "done");

        let tool_ids: Vec<_> = state
            .messages
            .iter()
            .filter(|m| m.role == Role::Tool)
            .filter_map(|m| m.tool_call_id.as_deref())
            .collect();
        assert_eq!(tool_ids, vec!["call_a", "call_b"]);
    }

    #[tokio::test]
    async fn seeding_happens_once() {
        let provider = Arc::new(ToolHungryProvider {
            tool: "extract_key_themes".into(),
            calls: Mutex::new(0),
        });
        let loop_ = agent(provider);

        let mut state = fresh_state(3);
        loop_.process(&mut state).await.unwrap();

        let system_count = state
            .messages
            .iter()
            .filter(|m| m.role == Role::System)
            .count();
        assert_eq!(system_count, 1);
    }
}
