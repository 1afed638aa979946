//! Core types for the SmartStudy service

pub mod document;
pub mod request;
pub mod response;
pub mod study;

pub use document::{ExtractedDocument, FileType};
pub use study::{ChatTurn, FlashcardRecord, QuizQuestionRecord, Role, SummaryStyle};
