//! Structured records from free-form model output
//!
//! Models asked for "ONLY a JSON array" still wrap it in prose often enough
//! that the payload has to be dug out. Parsing is best effort: callers pick a
//! fallback through [`parse_records_or`] so the frontend always has something
//! to render.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{FlashcardRecord, QuizQuestionRecord};

/// Greedy: first `[` through last `]`, across newlines
static BRACKET_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// A record type that can be pulled out of model output
pub trait StructuredRecord: DeserializeOwned {
    /// Keys every JSON object must carry
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Whether the decoded record has usable (non-blank) content
    fn is_complete(&self) -> bool;
}

impl StructuredRecord for FlashcardRecord {
    const REQUIRED_FIELDS: &'static [&'static str] = &["question", "answer", "hint", "explanation"];

    fn is_complete(&self) -> bool {
        [&self.question, &self.answer, &self.hint, &self.explanation]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

impl StructuredRecord for QuizQuestionRecord {
    const REQUIRED_FIELDS: &'static [&'static str] = &["question", "options", "correct_answer"];

    fn is_complete(&self) -> bool {
        !self.question.trim().is_empty()
            && !self.correct_answer.trim().is_empty()
            && self.options.len() == Self::OPTION_COUNT
            && self.options.iter().all(|o| !o.trim().is_empty())
    }
}

/// Locate the bracketed JSON payload inside surrounding prose
pub fn extract_json_span(text: &str) -> Option<&str> {
    BRACKET_SPAN.find(text).map(|m| m.as_str())
}

/// Decode the JSON payload of a model response into a list of values.
///
/// Uses the bracket span when there is one, otherwise the whole text. A
/// lone object counts as a one-element list.
pub fn parse_json_payload(text: &str) -> Result<Vec<Value>> {
    let candidate = extract_json_span(text).unwrap_or_else(|| text.trim());

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(obj @ Value::Object(_)) => Ok(vec![obj]),
        Ok(other) => Err(Error::structured_parse(format!(
            "expected a JSON array or object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(Error::structured_parse(e.to_string())),
    }
}

/// Parse and validate records, dropping any element that fails validation.
///
/// Errors only when no JSON payload could be decoded at all; an empty list
/// means every element was rejected.
///
/// Each element is decoded into `T`, so keys outside `T`'s fields (a model's
/// extra `explanation` on a quiz question, say) are dropped and the result is
/// the embedded payload projected onto the record shape.
pub fn parse_records<T: StructuredRecord>(text: &str) -> Result<Vec<T>> {
    let items = parse_json_payload(text)?;
    let total = items.len();

    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match validate_item::<T>(item) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::debug!("Dropping record {}: {}", i, reason);
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::info!("Kept {}/{} records from model output", records.len(), total);
    }

    Ok(records)
}

/// [`parse_records`] with a caller-chosen fallback for both a decode failure
/// and an empty result
pub fn parse_records_or<T, F>(text: &str, fallback: F) -> Vec<T>
where
    T: StructuredRecord,
    F: FnOnce() -> Vec<T>,
{
    match parse_records::<T>(text) {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => {
            tracing::warn!("No valid records in model output, using fallback");
            fallback()
        }
        Err(e) => {
            tracing::warn!("{}, using fallback", e);
            fallback()
        }
    }
}

fn validate_item<T: StructuredRecord>(item: Value) -> std::result::Result<T, String> {
    let obj = item
        .as_object()
        .ok_or_else(|| format!("expected an object, got {}", json_kind(&item)))?;

    if let Some(missing) = T::REQUIRED_FIELDS.iter().find(|f| !obj.contains_key(**f)) {
        return Err(format!("missing field '{}'", missing));
    }

    let record: T = serde_json::from_value(item).map_err(|e| e.to_string())?;
    if !record.is_complete() {
        return Err("blank required field".to_string());
    }
    Ok(record)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(q: &str, a: &str, h: &str, e: &str) -> FlashcardRecord {
        FlashcardRecord {
            question: q.into(),
            answer: a.into(),
            hint: h.into(),
            explanation: e.into(),
        }
    }

    #[test]
    fn test_span_is_greedy_across_lines() {
        let text = "Here you go:\n[{\"a\": [1, 2]},\n {\"b\": 3}]\nEnjoy!";
        assert_eq!(extract_json_span(text), Some("[{\"a\": [1, 2]},\n {\"b\": 3}]"));
        assert_eq!(extract_json_span("no brackets"), None);
    }

    #[test]
    fn test_flashcards_wrapped_in_prose() {
        let text = r#"Sure! [{"question":"Q","answer":"A","hint":"H","explanation":"E"}] Hope that helps"#;
        let cards: Vec<FlashcardRecord> = parse_records(text).unwrap();
        assert_eq!(cards, vec![card("Q", "A", "H", "E")]);
    }

    #[test]
    fn test_whole_text_fallback_for_single_object() {
        let text = r#"  {"question":"Q","answer":"A","hint":"H","explanation":"E"}  "#;
        let cards: Vec<FlashcardRecord> = parse_records(text).unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_incomplete_records_are_dropped() {
        let text = r#"[
            {"question":"Q1","answer":"A1","hint":"H1","explanation":"E1"},
            {"question":"Q2","answer":"  ","hint":"H2","explanation":"E2"},
            {"question":"Q3","answer":"A3","hint":"H3"},
            {"question":"Q4","answer":4,"hint":"H4","explanation":"E4"},
            "not an object"
        ]"#;
        let cards: Vec<FlashcardRecord> = parse_records(text).unwrap();
        assert_eq!(cards, vec![card("Q1", "A1", "H1", "E1")]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_records::<FlashcardRecord>("[{\"question\": oops}]").unwrap_err();
        assert!(matches!(err, Error::StructuredParse(_)));

        let err = parse_records::<FlashcardRecord>("I could not do that.").unwrap_err();
        assert!(matches!(err, Error::StructuredParse(_)));

        let err = parse_records::<FlashcardRecord>("42").unwrap_err();
        assert!(matches!(err, Error::StructuredParse(_)));
    }

    #[test]
    fn test_fallback_on_failure_and_on_empty() {
        let fallback = || vec![FlashcardRecord::fallback()];

        assert_eq!(parse_records_or("garbage", fallback), vec![FlashcardRecord::fallback()]);
        assert_eq!(parse_records_or("[]", fallback), vec![FlashcardRecord::fallback()]);
        assert_eq!(
            parse_records_or(r#"[{"question":"Q"}]"#, fallback),
            vec![FlashcardRecord::fallback()]
        );
    }

    #[test]
    fn test_quiz_validation() {
        let text = r#"Quiz:
        [
          {"question":"2+2?","options":["1","2","3","4"],"correct_answer":"4"},
          {"question":"Sky?","options":["blue","green"],"correct_answer":"blue"},
          {"question":"Sun?","options":["star","planet","moon",""],"correct_answer":"star"}
        ]"#;
        let quiz: Vec<QuizQuestionRecord> = parse_records(text).unwrap();
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].correct_answer, "4");
        assert_eq!(quiz[0].options, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_brackets_in_trailing_prose_break_the_span() {
        // greedy span swallows the trailing "[1]" and the payload no longer parses
        let text = r#"[{"question":"Q","answer":"A","hint":"H","explanation":"E"}] see [1]"#;
        assert!(parse_records::<FlashcardRecord>(text).is_err());
        assert_eq!(
            parse_records_or(text, || vec![FlashcardRecord::fallback()]),
            vec![FlashcardRecord::fallback()]
        );
    }

    #[test]
    fn test_extra_keys_are_dropped() {
        let text = r#"[{"question": "Q", "options": ["a", "b", "c", "d"], "correct_answer": "a", "explanation": "because"}]"#;
        let quiz: Vec<QuizQuestionRecord> = parse_records(text).unwrap();
        assert_eq!(quiz.len(), 1);

        let value = serde_json::to_value(&quiz[0]).unwrap();
        assert!(value.get("explanation").is_none());
        assert_eq!(value["correct_answer"], "a");
    }
}
