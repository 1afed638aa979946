//! Prompt templates, one per endpoint

use crate::types::{ChatTurn, SummaryStyle};

use super::followups::FOLLOW_UP_MARKER;

/// Prompt builder for study-aid requests
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build a summarization prompt in the requested style
    pub fn build_summary_prompt(text: &str, style: SummaryStyle) -> String {
        format!("{}\n\nText:\n{}", style.instruction(), text)
    }

    /// Build a multiple-choice quiz prompt
    pub fn build_quiz_prompt(text: &str, count: u32, difficulty: &str) -> String {
        format!(
            r#"Generate {count} multiple-choice questions from the following text.
Make them {difficulty} difficulty level. Each question must include:
- question
- options (a list of 4 options)
- correct_answer

Return ONLY a JSON array of objects, no explanation or notes.

Text:
{text}"#,
            count = count,
            difficulty = difficulty,
            text = text
        )
    }

    /// Build a flashcard prompt
    pub fn build_flashcard_prompt(content: &str, count: u32) -> String {
        format!(
            r#"Generate {count} flashcards as a JSON array. Each object must have these fields (no empty values!): question, answer, hint, explanation. Fill ALL fields with meaningful content derived from the input. Respond ONLY with the JSON array, no other explanation or text. Example:
[{{"question": "What is X?", "answer": "X is ...", "hint": "Think about ...", "explanation": "Because ..."}}]
Content:
{content}"#,
            count = count,
            content = content
        )
    }

    /// Render chat history one turn per line, oldest first
    pub fn format_history(history: &[ChatTurn]) -> String {
        history
            .iter()
            .map(|turn| format!("{}: {}", turn.role.label(), turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build the tutoring chat prompt with follow-up suggestions
    pub fn build_chat_prompt(message: &str, context: &str, history: &[ChatTurn]) -> String {
        format!(
            r#"You are SmartStudy AI, a helpful academic assistant.

Here is the previous chat history:
{history}

Context: {context}

Now answer the new message below. Always include proper **citations**, references, or source links if available.
Then suggest 2-3 follow-up questions.

User: {message}

Format:
Answer: <your answer with citations or source links>

{marker}
1. <first question>
2. <second question>
3. <third question>"#,
            history = Self::format_history(history),
            context = context,
            message = message,
            marker = FOLLOW_UP_MARKER
        )
    }

    /// Build a hint prompt for a quiz question
    pub fn build_hint_prompt(question: &str, context: &str) -> String {
        format!(
            "Give a helpful hint for this MCQ using the context below.\n\nQuestion: {}\n\nContext:\n{}",
            question, context
        )
    }

    /// Build an answer explanation prompt
    pub fn build_explanation_prompt(
        question: &str,
        correct_answer: &str,
        user_answer: &str,
        context: &str,
    ) -> String {
        let user_part = if user_answer.trim().is_empty() {
            String::new()
        } else {
            format!(
                "\nAlso mention if the user's selected answer \"{}\" is incorrect, why it's wrong, based on the context.",
                user_answer
            )
        };

        format!(
            r#"You are an AI tutor. Explain why the answer "{correct_answer}" is correct for the question below.{user_part}

Question: {question}
Context: {context}"#,
            correct_answer = correct_answer,
            user_part = user_part,
            question = question,
            context = context
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_summary_prompt_uses_style_instruction() {
        let prompt = PromptBuilder::build_summary_prompt("Photosynthesis...", SummaryStyle::Numbered);
        assert!(prompt.starts_with("Summarize the following content in at least 5 to 10 numbered points."));
        assert!(prompt.ends_with("Text:\nPhotosynthesis..."));
    }

    #[test]
    fn test_quiz_prompt_mentions_count_and_difficulty() {
        let prompt = PromptBuilder::build_quiz_prompt("cells", 7, "hard");
        assert!(prompt.contains("Generate 7 multiple-choice questions"));
        assert!(prompt.contains("Make them hard difficulty level"));
        assert!(prompt.contains("Return ONLY a JSON array"));
    }

    #[test]
    fn test_flashcard_prompt_example_is_valid_json() {
        let prompt = PromptBuilder::build_flashcard_prompt("cells", 3);
        let example = prompt.lines().nth(1).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(example).unwrap();
        assert!(parsed.is_array());
        assert!(prompt.starts_with("Generate 3 flashcards"));
    }

    #[test]
    fn test_chat_prompt_renders_history_and_marker() {
        let history = vec![
            ChatTurn { role: Role::User, content: "hi".into() },
            ChatTurn { role: Role::Assistant, content: "Hello!".into() },
        ];
        let prompt = PromptBuilder::build_chat_prompt("What is DNA?", "biology notes", &history);
        assert!(prompt.contains("User: hi\nAssistant: Hello!"));
        assert!(prompt.contains("Context: biology notes"));
        assert!(prompt.contains("User: What is DNA?"));
        assert!(prompt.contains(FOLLOW_UP_MARKER));
    }

    #[test]
    fn test_explanation_prompt_without_user_answer() {
        let prompt = PromptBuilder::build_explanation_prompt("2+2?", "4", "", "");
        assert!(prompt.contains("Explain why the answer \"4\" is correct"));
        assert!(!prompt.contains("user's selected answer"));

        let prompt = PromptBuilder::build_explanation_prompt("2+2?", "4", "5", "");
        assert!(prompt.contains("user's selected answer \"5\""));
    }
}
