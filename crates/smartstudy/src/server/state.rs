//! Application state for the SmartStudy server

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::ingestion::TextExtractor;
use crate::providers::{self, LlmProvider};

/// Shared application state.
///
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Model provider (Cohere or Ollama)
    llm_provider: Arc<dyn LlmProvider>,
    /// Upload text extractor
    extractor: TextExtractor,
}

impl AppState {
    /// Create new application state, building the provider from config
    pub fn new(config: AppConfig) -> Result<Self> {
        tracing::info!("Initializing SmartStudy state (backend: {:?})...", config.llm.backend);
        let llm_provider = providers::from_config(&config.llm)?;
        Ok(Self::with_provider(config, llm_provider))
    }

    /// Create application state around an existing provider
    pub fn with_provider(config: AppConfig, llm_provider: Arc<dyn LlmProvider>) -> Self {
        let extractor = TextExtractor::new(&config.extraction);
        tracing::info!(
            "Text extractor initialized (upload dir: {})",
            config.extraction.upload_dir.display()
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                llm_provider,
                extractor,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get LLM provider
    pub fn llm_provider(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm_provider
    }

    /// Get text extractor
    pub fn extractor(&self) -> &TextExtractor {
        &self.inner.extractor
    }
}
