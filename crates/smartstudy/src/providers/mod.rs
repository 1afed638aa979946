//! Provider abstraction for the remote model
//!
//! Handlers only see `Arc<dyn LlmProvider>`; the backend is picked from
//! configuration at startup.

pub mod cohere;
pub mod llm;
pub mod ollama;

use std::sync::Arc;

use crate::config::{LlmBackend, LlmConfig};
use crate::error::Result;

pub use cohere::CohereClient;
pub use llm::LlmProvider;
pub use ollama::OllamaLlm;

/// Build the configured provider
pub fn from_config(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>> {
    let provider: Arc<dyn LlmProvider> = match config.backend {
        LlmBackend::Cohere => Arc::new(CohereClient::new(config)?),
        LlmBackend::Ollama => Arc::new(OllamaLlm::new(config)?),
    };
    tracing::info!(
        "LLM provider initialized ({}, model: {})",
        provider.name(),
        provider.model()
    );
    Ok(provider)
}
