use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How the value of an answered question is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum AnswerKind {
    /// The value is used as-is.
    Number,
    /// The value is a label resolved through the question's answer map.
    String,
}

/// The raw answer as submitted: a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One answered question within a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerEntry {
    /// Identifies the question within its questionnaire.
    pub key: String,
    pub kind: AnswerKind,
    pub value: AnswerValue,
}

impl AnswerEntry {
    pub fn number(key: &str, value: f64) -> Self {
        Self {
            key: key.to_string(),
            kind: AnswerKind::Number,
            value: AnswerValue::Number(value),
        }
    }

    pub fn label(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: AnswerKind::String,
            value: AnswerValue::Text(label.to_string()),
        }
    }
}

/// Ordinal coding for categorical questions: question key → label → ordinal.
///
/// Loaded once per questionnaire type and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionAnswerMap(pub HashMap<String, HashMap<String, i32>>);

impl QuestionAnswerMap {
    /// Build a map where every listed question shares the same label coding.
    pub fn uniform(keys: &[&str], labels: &[(&str, i32)]) -> Self {
        let coding: HashMap<String, i32> = labels
            .iter()
            .map(|(label, ordinal)| (label.to_string(), *ordinal))
            .collect();
        Self(
            keys.iter()
                .map(|key| (key.to_string(), coding.clone()))
                .collect(),
        )
    }

    /// Add (or replace) the coding for one question.
    pub fn with_question(mut self, key: &str, labels: &[(&str, i32)]) -> Self {
        let coding = labels
            .iter()
            .map(|(label, ordinal)| (label.to_string(), *ordinal))
            .collect();
        self.0.insert(key.to_string(), coding);
        self
    }

    /// Labels and ordinals for one question, if the question is mapped.
    pub fn question(&self, key: &str) -> Option<&HashMap<String, i32>> {
        self.0.get(key)
    }

    pub fn ordinal(&self, key: &str, label: &str) -> Option<i32> {
        self.0.get(key)?.get(label).copied()
    }

    /// Reverse lookup. Only meaningful when the question's coding is injective.
    pub fn label(&self, key: &str, ordinal: i32) -> Option<&str> {
        self.0
            .get(key)?
            .iter()
            .find(|(_, v)| **v == ordinal)
            .map(|(label, _)| label.as_str())
    }

    pub fn is_injective(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(coding) => {
                let mut seen: Vec<i32> = coding.values().copied().collect();
                seen.sort_unstable();
                seen.windows(2).all(|w| w[0] != w[1])
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
