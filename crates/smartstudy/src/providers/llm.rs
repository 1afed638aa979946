//! LLM provider trait for text generation

use async_trait::async_trait;
use crate::error::Result;

/// Trait for a text-in/text-out completion service
///
/// Implementations:
/// - `CohereClient`: Cohere chat API (command-r-plus, etc.)
/// - `OllamaLlm`: Local Ollama server
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt and return the raw model text
    async fn chat(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
