//! Tutoring chat endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{complete, json_body};
use crate::error::{Error, Result};
use crate::generation::{split_followups, PromptBuilder};
use crate::server::state::AppState;
use crate::types::{request::ChatRequest, response::ChatResponse};

/// POST /chat - Answer a study question and suggest follow-ups
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let request = json_body(payload, "Empty message")?;
    let message = request.message.trim();
    if message.is_empty() {
        return Err(Error::invalid_input("Empty message"));
    }

    tracing::info!(
        "Chat: {} chars, {} history turns",
        message.len(),
        request.history.len()
    );

    let prompt = PromptBuilder::build_chat_prompt(message, &request.context, &request.history);
    let output = complete(&state, &prompt)
        .await
        .map_err(|e| e.failed("Failed to generate response"))?;

    let (reply, followups) = split_followups(&output);

    Ok(Json(ChatResponse { reply, followups }))
}
