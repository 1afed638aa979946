//! Study endpoints

pub mod chat;
pub mod flashcards;
pub mod quiz;
pub mod summary;
pub mod tutor;
pub mod upload;

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, DefaultBodyLimit},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{ExtractedDocument, FileType};

/// Build all study routes
pub fn study_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // File uploads - with larger body limit
        .route(
            "/upload-file",
            post(upload::upload_file).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route(
            "/flashcards",
            post(flashcards::generate_flashcards).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Generation from JSON bodies
        .route("/generate-summary", post(summary::generate_summary))
        .route("/generate-quiz", post(quiz::generate_quiz))
        .route("/chat", post(chat::chat))
        .route("/generate-hint", post(tutor::generate_hint))
        .route("/explain-answer", post(tutor::explain_answer))
}

/// Unwrap a JSON body, answering malformed ones with the endpoint's
/// validation message.
pub(crate) fn json_body<T>(
    payload: std::result::Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected JSON body: {}", rejection.body_text());
            Err(Error::invalid_input(message))
        }
    }
}

/// Message for a multipart body that breaks off or is malformed mid-stream
const UNREADABLE_FORM: &str = "Failed to read form data";

/// Map a multipart read failure: 413 past the body limit, otherwise a fixed
/// validation message. The cause is only logged.
pub(crate) fn multipart_error(err: MultipartError) -> Error {
    tracing::debug!("Failed to read multipart body: {}", err);
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge
    } else {
        Error::invalid_input(UNREADABLE_FORM)
    }
}

/// Run extraction for one upload off the async runtime
pub(crate) async fn extract_upload(
    state: &AppState,
    filename: String,
    data: Bytes,
    accepted: &'static [FileType],
) -> Result<ExtractedDocument> {
    let state = state.clone();
    tokio::task::spawn_blocking(move || state.extractor().extract(&filename, &data, accepted))
        .await
        .map_err(|e| Error::internal(format!("Extraction task failed: {}", e)))?
}

/// Send one prompt to the configured model
pub(crate) async fn complete(state: &AppState, prompt: &str) -> Result<String> {
    let start = Instant::now();
    let provider = state.llm_provider();
    let output = provider.chat(prompt).await?;

    tracing::info!(
        "{} replied with {} chars in {}ms",
        provider.name(),
        output.len(),
        start.elapsed().as_millis()
    );
    tracing::debug!("Raw model output: {}", output);

    Ok(output)
}
