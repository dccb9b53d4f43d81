//! Provider selection — picks the reasoning backend from config.
//!
//! An absent API key is not an error: it selects the deterministic
//! offline provider, so the service always has a working backend.

use std::sync::Arc;

use tracing::{info, warn};

use writeflow_core::provider::Provider;

use crate::offline::OfflineProvider;
use crate::openai_compat::OpenAiCompatProvider;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Build the provider selected by the configuration.
pub fn build_from_config(config: &writeflow_config::AppConfig) -> Arc<dyn Provider> {
    match &config.api_key {
        Some(api_key) if !api_key.is_empty() => {
            let base_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            info!(base_url = %base_url, "Using live reasoning backend");
            Arc::new(OpenAiCompatProvider::new("openai", base_url, api_key))
        }
        _ => {
            warn!("No API key configured — using deterministic offline responses");
            Arc::new(OfflineProvider::new())
        }
    }
}
