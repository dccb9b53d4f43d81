//! Reasoning backend implementations for writeflow.
//!
//! All providers implement the `writeflow_core::Provider` trait.
//! The router selects the live backend when an API key is configured
//! and the deterministic offline provider otherwise.

pub mod offline;
pub mod openai_compat;
pub mod router;

pub use offline::OfflineProvider;
pub use openai_compat::OpenAiCompatProvider;
pub use router::build_from_config;
