//! JSON request bodies
//!
//! Every field may be omitted or sent as `null`; both mean "use the default".

use serde::{Deserialize, Deserializer, Serialize};

use super::study::{ChatTurn, SummaryStyle};

/// POST /generate-summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Text to summarize
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Presentation style (default: concise)
    #[serde(default)]
    pub style: SummaryStyle,
}

/// POST /generate-quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Source text for the questions
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Number of questions (default: 5)
    #[serde(default = "default_quiz_count", deserialize_with = "deserialize_count")]
    pub count: u32,
    /// Difficulty level (default: medium)
    #[serde(default = "default_difficulty", deserialize_with = "deserialize_difficulty")]
    pub difficulty: String,
}

fn default_quiz_count() -> u32 {
    5
}

fn default_difficulty() -> String {
    "medium".to_string()
}

/// Default number of flashcards when the form omits `count`
pub const DEFAULT_FLASHCARD_COUNT: u32 = 10;

/// POST /chat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user message
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Study material the conversation is about
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,
    /// Previous turns, oldest first
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<ChatTurn>,
}

/// POST /generate-hint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HintRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,
}

/// POST /explain-answer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplainRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct_answer: String,
    /// What the student picked, if anything
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_difficulty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_difficulty))
}

/// Parse a count sent either as a JSON number or a numeric string
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(default_quiz_count()),
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::String(s)) => parse_count(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid count: {:?}", s))),
    }
}
