//! Hint and answer-explanation endpoints for quiz practice

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{complete, json_body};
use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::server::state::AppState;
use crate::types::{
    request::{ExplainRequest, HintRequest},
    response::{ExplanationResponse, HintResponse},
};

/// POST /generate-hint - A nudge that does not reveal the answer
pub async fn generate_hint(
    State(state): State<AppState>,
    payload: std::result::Result<Json<HintRequest>, JsonRejection>,
) -> Result<Json<HintResponse>> {
    let request = json_body(payload, "Question text missing")?;
    if request.question.trim().is_empty() {
        return Err(Error::invalid_input("Question text missing"));
    }

    let prompt = PromptBuilder::build_hint_prompt(&request.question, &request.context);
    let output = complete(&state, &prompt)
        .await
        .map_err(|e| e.failed("Failed to generate hint"))?;

    Ok(Json(HintResponse {
        hint: output.trim().to_string(),
    }))
}

/// POST /explain-answer - Why the correct answer is correct
pub async fn explain_answer(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplanationResponse>> {
    let request = json_body(payload, "Missing required data")?;
    if request.question.trim().is_empty() || request.correct_answer.trim().is_empty() {
        return Err(Error::invalid_input("Missing required data"));
    }

    let prompt = PromptBuilder::build_explanation_prompt(
        &request.question,
        &request.correct_answer,
        &request.user_answer,
        &request.context,
    );
    let output = complete(&state, &prompt)
        .await
        .map_err(|e| e.failed("Failed to generate explanation"))?;

    Ok(Json(ExplanationResponse {
        explanation: output.trim().to_string(),
    }))
}
