//! Summary endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{complete, json_body};
use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::server::state::AppState;
use crate::types::{request::SummaryRequest, response::SummaryResponse};

/// POST /generate-summary - Summarize text in the requested style
pub async fn generate_summary(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>> {
    let request = json_body(payload, "No text provided")?;
    if request.text.trim().is_empty() {
        return Err(Error::invalid_input("No text provided"));
    }

    tracing::info!(
        "Summary: {:?} style, {} chars",
        request.style,
        request.text.len()
    );

    let prompt = PromptBuilder::build_summary_prompt(&request.text, request.style);
    let output = complete(&state, &prompt)
        .await
        .map_err(|e| e.failed("Failed to generate summary"))?;

    Ok(Json(SummaryResponse {
        summary: output.trim().to_string(),
    }))
}
