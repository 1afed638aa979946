//! Configuration for the SmartStudy service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Model API configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Document extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Invalid config file '{}': {}", path.display(), e))
        })
    }

    /// Apply `SMARTSTUDY_*` and `COHERE_API_KEY` environment overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SMARTSTUDY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SMARTSTUDY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| Error::Config(format!("Invalid SMARTSTUDY_PORT '{}': {}", port, e)))?;
        }
        if let Some(backend) = lookup("SMARTSTUDY_LLM_BACKEND") {
            self.llm.backend = match backend.to_lowercase().as_str() {
                "cohere" => LlmBackend::Cohere,
                "ollama" => LlmBackend::Ollama,
                other => {
                    return Err(Error::Config(format!("Unknown LLM backend: {}", other)));
                }
            };
        }
        if let Some(base_url) = lookup("SMARTSTUDY_LLM_BASE_URL") {
            self.llm.base_url = Some(base_url);
        }
        if let Some(model) = lookup("SMARTSTUDY_LLM_MODEL") {
            self.llm.model = model;
        }
        if let Some(api_key) = lookup("COHERE_API_KEY") {
            self.llm.api_key = Some(api_key);
        }
        Ok(())
    }

    /// Check settings that cannot be caught by deserialization
    pub fn validate(&self) -> Result<()> {
        if self.llm.backend == LlmBackend::Cohere
            && self.llm.api_key.as_deref().map_or(true, |k| k.trim().is_empty())
        {
            return Err(Error::Config(
                "Cohere backend selected but no API key is configured (set COHERE_API_KEY)"
                    .to_string(),
            ));
        }
        if self.server.max_upload_size == 0 {
            return Err(Error::Config("max_upload_size must be greater than zero".to_string()));
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Allowed CORS origins; empty allows any origin
    pub allowed_origins: Vec<String>,
    /// Maximum upload size in bytes (default: 20MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origins: Vec::new(),
            max_upload_size: 20 * 1024 * 1024, // 20MB
        }
    }
}

/// Model backend selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LlmBackend {
    /// Cohere chat API
    #[default]
    Cohere,
    /// Local Ollama server
    Ollama,
}

/// Model API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Which backend to call
    pub backend: LlmBackend,
    /// Base URL override; each backend has its own default
    pub base_url: Option<String>,
    /// Model identifier sent with every request
    pub model: String,
    /// API key (Cohere only)
    pub api_key: Option<String>,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: LlmBackend::Cohere,
            base_url: None,
            model: "command-r-plus".to_string(),
            api_key: None,
            temperature: 0.3,
            timeout_secs: 120,
        }
    }
}

impl LlmConfig {
    /// Base URL with the backend default applied
    pub fn resolved_base_url(&self) -> String {
        let url = match (&self.base_url, self.backend) {
            (Some(url), _) => url.as_str(),
            (None, LlmBackend::Cohere) => "https://api.cohere.ai",
            (None, LlmBackend::Ollama) => "http://localhost:11434",
        };
        url.trim_end_matches('/').to_string()
    }
}

/// Document extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Directory for temporary upload files
    pub upload_dir: PathBuf,
    /// Timeout for the primary PDF extractor in seconds
    pub pdf_timeout_secs: u64,
    /// Concurrent pdf-extract worker threads, including timed-out ones still running
    pub max_pdf_workers: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            upload_dir: std::env::temp_dir(),
            pdf_timeout_secs: 60,
            max_pdf_workers: 4,
        }
    }
}
