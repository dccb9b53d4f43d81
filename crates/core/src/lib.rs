//! # writeflow Core
//!
//! Domain types, traits, and error definitions for the writeflow
//! writing-assistant service. This crate has **zero framework
//! dependencies** — it defines the domain model that all other crates
//! implement against.
//!
//! ## Design Philosophy
//!
//! The two external seams (the reasoning backend and the analysis
//! tools) are defined as traits here. Implementations live in their
//! respective crates. This enables:
//! - Swapping the live backend for the deterministic offline one
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod action;
pub mod conversation;
pub mod error;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use action::WriteAction;
pub use conversation::ConversationState;
pub use error::{Error, ProviderError, Result, ToolError};
pub use message::{Message, MessageToolCall, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, ToolDefinition, Usage};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
