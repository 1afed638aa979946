//! smartstudy: Study-aid backend for a web frontend
//!
//! Extracts clean text from uploaded PDF, DOCX and plain-text files and turns
//! study material into summaries, multiple-choice quizzes, flashcards, hints,
//! answer explanations and tutoring chat replies through a hosted language
//! model. Structured model output is recovered from free-form text and falls
//! back to well-formed defaults when the model misbehaves.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use providers::LlmProvider;
pub use server::{build_router, state::AppState, StudyServer};
pub use types::{
    document::{ExtractedDocument, FileType},
    study::{FlashcardRecord, QuizQuestionRecord},
};
