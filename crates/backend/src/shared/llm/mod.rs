pub mod openai_provider;
pub mod types;

use crate::shared::config::LlmConfig;
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub use openai_provider::OpenAiProvider;
pub use types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};

static PROVIDER: OnceCell<Arc<dyn LlmProvider>> = OnceCell::new();

/// Register the process-wide provider. Returns false when no API key is configured.
pub fn init_provider(config: &LlmConfig) -> bool {
    match OpenAiProvider::from_config(config) {
        Some(provider) => {
            tracing::info!(
                "LLM provider initialized: {} ({})",
                provider.provider_name(),
                config.model
            );
            PROVIDER.set(Arc::new(provider)).is_ok()
        }
        None => {
            tracing::warn!("LLM api_key is not configured, name generation is disabled");
            false
        }
    }
}

pub fn provider() -> Option<Arc<dyn LlmProvider>> {
    PROVIDER.get().cloned()
}
