//! JSON response bodies. Field names are what the web frontend reads.

use serde::{Deserialize, Serialize};

use super::study::{FlashcardRecord, QuizQuestionRecord};

/// POST /upload-file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub text: String,
}

/// POST /generate-summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /generate-quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizQuestionRecord>,
}

/// POST /flashcards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<FlashcardRecord>,
}

/// POST /chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub followups: Vec<String>,
}

/// POST /generate-hint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: String,
}

/// POST /explain-answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}
