//! Quiz endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{complete, json_body};
use crate::error::{Error, Result};
use crate::generation::{parse_records_or, PromptBuilder};
use crate::server::state::AppState;
use crate::types::{request::QuizRequest, response::QuizResponse, QuizQuestionRecord};

/// POST /generate-quiz - Multiple-choice questions from text
pub async fn generate_quiz(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>> {
    let request = json_body(payload, "No text provided")?;
    if request.text.trim().is_empty() {
        return Err(Error::invalid_input("No text provided"));
    }

    tracing::info!(
        "Quiz: {} questions, {} difficulty",
        request.count,
        request.difficulty
    );

    let prompt = PromptBuilder::build_quiz_prompt(&request.text, request.count, &request.difficulty);
    let output = complete(&state, &prompt)
        .await
        .map_err(|e| e.failed("Failed to generate quiz"))?;

    let quiz = parse_records_or(&output, || vec![QuizQuestionRecord::fallback()]);

    Ok(Json(QuizResponse { quiz }))
}
