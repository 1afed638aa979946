//! Prompt construction and interpretation of model output

pub mod followups;
pub mod ollama;
pub mod prompt;
pub mod structured;

pub use followups::split_followups;
pub use ollama::OllamaClient;
pub use prompt::PromptBuilder;
pub use structured::{parse_records, parse_records_or, StructuredRecord};
