//! Cohere chat API client
//!
//! Every endpoint sends a single self-contained prompt as the chat `message`;
//! conversation history is rendered into the prompt rather than sent as
//! Cohere `chat_history`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::providers::llm::LlmProvider;

/// Cohere client
pub struct CohereClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    model: &'a str,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl CohereClient {
    /// Create a new Cohere client
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config("Cohere API key is missing".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.resolved_base_url(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// Get the API endpoint URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            message: prompt,
            model: &self.model,
            temperature: self.temperature,
        }
    }
}

/// Pull the human-readable message out of a Cohere error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl LlmProvider for CohereClient {
    async fn chat(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Calling Cohere chat with model {} ({} chars)", self.model, prompt.len());

        let response = self
            .client
            .post(self.endpoint("chat"))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| Error::llm(format!("Cohere request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Cohere chat failed: HTTP {} - {}",
                status,
                error_message(&body)
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse Cohere response: {}", e)))?;

        Ok(chat_response.text)
    }

    async fn health_check(&self) -> Result<bool> {
        match self
            .client
            .post(self.endpoint("check-api-key"))
            .bearer_auth(&self.api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "cohere"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LlmConfig {
        LlmConfig {
            api_key: Some("test-key".to_string()),
            base_url: Some("https://cohere.example/".to_string()),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_requires_api_key() {
        let mut cfg = config();
        cfg.api_key = Some("  ".to_string());
        assert!(matches!(CohereClient::new(&cfg), Err(Error::Config(_))));
    }

    #[test]
    fn test_endpoint_and_body() {
        let client = CohereClient::new(&config()).unwrap();
        assert_eq!(client.endpoint("chat"), "https://cohere.example/v1/chat");

        let body = serde_json::to_value(client.request_body("Summarize this")).unwrap();
        assert_eq!(body["message"], "Summarize this");
        assert_eq!(body["model"], "command-r-plus");
        assert_eq!(client.name(), "cohere");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"message":"invalid api token"}"#), "invalid api token");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
