use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerEntry;

/// A completed questionnaire, as handed over by the storage layer.
///
/// Read-only here: scoring never writes submissions back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub completed_at: jiff::Timestamp,
    pub answers: Vec<AnswerEntry>,
}

impl Submission {
    pub fn new(completed_at: jiff::Timestamp, answers: Vec<AnswerEntry>) -> Self {
        Self {
            completed_at,
            answers,
        }
    }

    /// First answer recorded for `key`, if any.
    pub fn answer(&self, key: &str) -> Option<&AnswerEntry> {
        self.answers.iter().find(|a| a.key == key)
    }
}
