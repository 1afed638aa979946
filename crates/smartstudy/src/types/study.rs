//! Study aid records produced from model output

use serde::{Deserialize, Serialize};

/// A four-field study card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRecord {
    pub question: String,
    pub answer: String,
    pub hint: String,
    pub explanation: String,
}

impl FlashcardRecord {
    /// Card returned when the model produced nothing usable
    pub fn fallback() -> Self {
        Self {
            question: "Default question: Why is the sky blue?".to_string(),
            answer: "Because of Rayleigh scattering.".to_string(),
            hint: "Think about sunlight and atmosphere.".to_string(),
            explanation: "Short wavelengths scatter more in the atmosphere.".to_string(),
        }
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestionRecord {
    /// Number of options every question must carry
    pub const OPTION_COUNT: usize = 4;

    /// Question returned when the model produced nothing usable
    pub fn fallback() -> Self {
        Self {
            question: "Why does the sky appear blue?".to_string(),
            options: vec![
                "Rayleigh scattering of sunlight".to_string(),
                "Reflection of the oceans".to_string(),
                "Absorption of red light by clouds".to_string(),
                "Ozone emitting blue light".to_string(),
            ],
            correct_answer: "Rayleigh scattering of sunlight".to_string(),
        }
    }
}

/// Speaker of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Capitalized label used when rendering history into a prompt
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One message of caller-supplied conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Summary presentation style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    #[default]
    Concise,
    Detailed,
    Numbered,
    Simplified,
}

impl SummaryStyle {
    /// Parse a style name; unknown names fall back to `Concise`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "detailed" => Self::Detailed,
            "numbered" => Self::Numbered,
            "simplified" => Self::Simplified,
            _ => Self::Concise,
        }
    }

    /// Natural-language directive for the model
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Concise => {
                "Write a short and to-the-point paragraph summary of the following content."
            }
            Self::Detailed => {
                "Provide a detailed summary with key points, examples, and supporting information in a clear paragraph format."
            }
            Self::Numbered => "Summarize the following content in at least 5 to 10 numbered points.",
            Self::Simplified => {
                "Summarize in simplified, easy-to-understand English for a 10th-grade student."
            }
        }
    }
}

impl<'de> Deserialize<'de> for SummaryStyle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // null means "no preference"
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_name(name.as_deref().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_falls_back_to_concise() {
        assert_eq!(SummaryStyle::from_name("bullet"), SummaryStyle::Concise);
        assert_eq!(SummaryStyle::from_name(" Numbered "), SummaryStyle::Numbered);

        let style: SummaryStyle = serde_json::from_str("\"poetic\"").unwrap();
        assert_eq!(style, SummaryStyle::Concise);

        let style: SummaryStyle = serde_json::from_str("null").unwrap();
        assert_eq!(style, SummaryStyle::Concise);
    }

    #[test]
    fn test_chat_turn_roles() {
        let turn: ChatTurn = serde_json::from_str(r#"{"role":"assistant","content":"hello"}"#).unwrap();
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.role.label(), "Assistant");

        assert!(serde_json::from_str::<ChatTurn>(r#"{"role":"bot","content":"x"}"#).is_err());
    }

    #[test]
    fn test_fallback_quiz_answer_is_an_option() {
        let q = QuizQuestionRecord::fallback();
        assert_eq!(q.options.len(), QuizQuestionRecord::OPTION_COUNT);
        assert!(q.options.contains(&q.correct_answer));
    }
}
