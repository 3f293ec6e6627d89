//! Questionnaire answers keyed by question identifier.
//!
//! Absent or null answers are never an error: accessors report them as
//! `None` (or `false` for yes/no questions) so that rules depending on them
//! simply do not fire. A value of the wrong shape is reported as an
//! [`AnswerError`], which the engines log and treat as "rule did not fire".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single recorded answer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<AnswerValue>),
    Record(BTreeMap<String, AnswerValue>),
}

impl AnswerValue {
    /// Build a record answer from numeric fields (e.g. blood pressure)
    pub fn record<'a>(fields: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        AnswerValue::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), AnswerValue::Number(v)))
                .collect(),
        )
    }

    fn kind(&self) -> &'static str {
        match self {
            AnswerValue::Null => "null",
            AnswerValue::Bool(_) => "boolean",
            AnswerValue::Number(_) => "number",
            AnswerValue::Text(_) => "text",
            AnswerValue::List(_) => "list",
            AnswerValue::Record(_) => "record",
        }
    }

    /// Numeric view, accepting numeric-looking strings
    fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) if n.is_finite() => Some(*n),
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<Vec<f64>> for AnswerValue {
    fn from(values: Vec<f64>) -> Self {
        AnswerValue::List(values.into_iter().map(AnswerValue::Number).collect())
    }
}

/// Malformed answer value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("answer {question:?} should be {expected}, found {found}")]
    TypeMismatch {
        question: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl AnswerError {
    fn mismatch(question: &str, expected: &'static str, found: &AnswerValue) -> Self {
        AnswerError::TypeMismatch {
            question: question.to_string(),
            expected,
            found: found.kind(),
        }
    }
}

pub type AnswerResult<T> = std::result::Result<T, AnswerError>;

/// All answers recorded for one evaluation
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AnswerState {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, question: &str, value: impl Into<AnswerValue>) -> Self {
        self.insert(question, value);
        self
    }

    pub fn insert(&mut self, question: &str, value: impl Into<AnswerValue>) {
        self.values.insert(question.to_string(), value.into());
    }

    pub fn get(&self, question: &str) -> Option<&AnswerValue> {
        match self.values.get(question) {
            None | Some(AnswerValue::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True only for an explicit "yes"
    pub fn yes(&self, question: &str) -> AnswerResult<bool> {
        Ok(self.yes_no(question)? == Some(true))
    }

    /// True only for an explicit "no"
    pub fn no(&self, question: &str) -> AnswerResult<bool> {
        Ok(self.yes_no(question)? == Some(false))
    }

    /// Yes/no answer; free text other than yes/no/true/false counts as unanswered
    pub fn yes_no(&self, question: &str) -> AnswerResult<Option<bool>> {
        match self.get(question) {
            None => Ok(None),
            Some(AnswerValue::Bool(b)) => Ok(Some(*b)),
            Some(AnswerValue::Text(s)) => Ok(match s.trim().to_ascii_lowercase().as_str() {
                "yes" | "true" => Some(true),
                "no" | "false" => Some(false),
                _ => None,
            }),
            Some(other) => Err(AnswerError::mismatch(question, "yes/no", other)),
        }
    }

    pub fn number(&self, question: &str) -> AnswerResult<Option<f64>> {
        match self.get(question) {
            None => Ok(None),
            Some(AnswerValue::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(value) => value
                .as_number()
                .map(Some)
                .ok_or_else(|| AnswerError::mismatch(question, "number", value)),
        }
    }

    pub fn text(&self, question: &str) -> AnswerResult<Option<&str>> {
        match self.get(question) {
            None => Ok(None),
            Some(AnswerValue::Text(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(AnswerError::mismatch(question, "text", other)),
        }
    }

    /// True when a text answer equals `expected` (case-insensitive)
    pub fn is(&self, question: &str, expected: &str) -> AnswerResult<bool> {
        Ok(self
            .text(question)?
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(expected)))
    }

    /// Numeric field of a record answer
    pub fn record_number(&self, question: &str, field: &str) -> AnswerResult<Option<f64>> {
        match self.get(question) {
            None => Ok(None),
            Some(AnswerValue::Record(fields)) => match fields.get(field) {
                None | Some(AnswerValue::Null) => Ok(None),
                Some(value) => value.as_number().map(Some).ok_or_else(|| {
                    AnswerError::mismatch(&format!("{question}.{field}"), "number", value)
                }),
            },
            Some(other) => Err(AnswerError::mismatch(question, "record", other)),
        }
    }

    /// Numbers of a list answer; non-numeric entries are skipped
    pub fn numbers(&self, question: &str) -> AnswerResult<Vec<f64>> {
        match self.get(question) {
            None => Ok(Vec::new()),
            Some(AnswerValue::List(items)) => {
                Ok(items.iter().filter_map(AnswerValue::as_number).collect())
            }
            Some(other) => Err(AnswerError::mismatch(question, "list", other)),
        }
    }

    /// True when a list answer contains the selection code
    pub fn contains_code(&self, question: &str, code: u32) -> AnswerResult<bool> {
        Ok(self
            .numbers(question)?
            .iter()
            .any(|n| *n == f64::from(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_answers_are_not_errors() {
        let answers = AnswerState::new();
        assert_eq!(answers.yes("smoking"), Ok(false));
        assert_eq!(answers.no("smoking"), Ok(false));
        assert_eq!(answers.number("age"), Ok(None));
        assert_eq!(answers.record_number("blood-pressure", "systolic"), Ok(None));
        assert_eq!(answers.numbers("medications"), Ok(vec![]));
    }

    #[test]
    fn test_yes_no_accepts_text_and_bool() {
        let answers = AnswerState::new()
            .with("a", "yes")
            .with("b", "No")
            .with("c", true)
            .with("d", "unsure");
        assert_eq!(answers.yes("a"), Ok(true));
        assert_eq!(answers.no("b"), Ok(true));
        assert_eq!(answers.yes("c"), Ok(true));
        assert_eq!(answers.yes_no("d"), Ok(None));
    }

    #[test]
    fn test_number_accepts_numeric_string() {
        let answers = AnswerState::new().with("age", " 34 ").with("weight", "");
        assert_eq!(answers.number("age"), Ok(Some(34.0)));
        assert_eq!(answers.number("weight"), Ok(None));
    }

    #[test]
    fn test_wrong_shape_is_type_mismatch() {
        let answers = AnswerState::new()
            .with("smoking", AnswerValue::record([("x", 1.0)]))
            .with("age", "forty");
        assert!(matches!(
            answers.yes("smoking"),
            Err(AnswerError::TypeMismatch { expected: "yes/no", found: "record", .. })
        ));
        assert!(answers.number("age").is_err());
    }

    #[test]
    fn test_null_counts_as_missing() {
        let answers: AnswerState =
            serde_json::from_str(r#"{"smoking": null, "age": 30}"#).unwrap();
        assert_eq!(answers.yes("smoking"), Ok(false));
        assert_eq!(answers.number("age"), Ok(Some(30.0)));
    }

    #[test]
    fn test_deserializes_mixed_answer_file() {
        let answers: AnswerState = serde_json::from_str(
            r#"{
                "blood-pressure": {"systolic": 150, "diastolic": 95},
                "cycle-durations": [28, 30, 26, 29, 31, 27],
                "medications": [1, 3],
                "migraine": "with-aura"
            }"#,
        )
        .unwrap();
        assert_eq!(
            answers.record_number("blood-pressure", "systolic"),
            Ok(Some(150.0))
        );
        assert_eq!(answers.numbers("cycle-durations").unwrap().len(), 6);
        assert_eq!(answers.contains_code("medications", 3), Ok(true));
        assert_eq!(answers.is("migraine", "WITH-AURA"), Ok(true));
    }
}
