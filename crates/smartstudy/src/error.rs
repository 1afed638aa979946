//! Error types for the SmartStudy service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for SmartStudy operations
pub type Result<T> = std::result::Result<T, Error>;

/// SmartStudy errors
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or empty required request field
    #[error("{0}")]
    InvalidInput(String),

    /// Request body over the configured upload limit
    #[error("Request body exceeds the upload limit")]
    PayloadTooLarge,

    /// Unsupported file type
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Text extraction failed inside a document library
    #[error("Failed to extract text from '{filename}': {message}")]
    Extraction { filename: String, message: String },

    /// Model API call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Model output did not contain usable structured data
    #[error("Structured output parse failed: {0}")]
    StructuredParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An internal failure carrying the message shown to the client
    #[error("{message}: {source}")]
    Failed {
        message: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an input validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an extraction error
    pub fn extraction(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create a structured parse error
    pub fn structured_parse(message: impl Into<String>) -> Self {
        Self::StructuredParse(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Attach the client-facing message for an endpoint failure.
    ///
    /// Validation errors already carry their own message and pass through.
    pub fn failed(self, message: &'static str) -> Self {
        match self {
            Self::InvalidInput(_)
            | Self::UnsupportedFileType(_)
            | Self::PayloadTooLarge
            | Self::Failed { .. } => self,
            other => Self::Failed {
                message,
                source: Box::new(other),
            },
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) | Error::UnsupportedFileType(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Failed { source, .. } => source.status_code(),
            Error::Extraction { .. }
            | Error::Llm(_)
            | Error::StructuredParse(_)
            | Error::Config(_)
            | Error::Io(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client
    pub fn public_message(&self) -> String {
        match self {
            Error::InvalidInput(msg) => msg.clone(),
            Error::UnsupportedFileType(_) => "Unsupported file type".to_string(),
            Error::PayloadTooLarge => "File too large".to_string(),
            Error::Failed { message, .. } => (*message).to_string(),
            Error::Extraction { .. } => "Failed to extract text from file".to_string(),
            Error::Llm(_) => "Failed to generate response".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}
