//! The bounded agent loop — the heart of writeflow.
//!
//! One request drives one loop instance over its own
//! `ConversationState`:
//!
//! 1. **Seed** the transcript with the action's system prompt and an
//!    initial user message composed from the subject and context
//! 2. **Reason**: send the transcript to the provider
//! 3. **If tool calls**: execute tools, append results, loop back to 2
//! 4. **If text only, or the iteration bound is hit**: stop
//!
//! Every reasoning step increments the iteration counter exactly
//! once, so the loop terminates within `max_iterations` provider
//! calls regardless of tool behavior, provider failures, or
//! malformed output. The streaming adapter then delivers the final
//! assistant message as a paced, framed event sequence.

pub mod loop_runner;
pub mod prompts;
pub mod stream_event;
pub mod streamer;

pub use loop_runner::AgentLoop;
pub use stream_event::StreamEvent;
pub use streamer::{fragments, stream_events};
