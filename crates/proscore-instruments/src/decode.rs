//! Turning submitted answers into numbers.

use proscore_core::models::answer::{AnswerEntry, AnswerKind, AnswerValue, QuestionAnswerMap};

use crate::error::{DecodingError, ScoringError};

/// The numeric contribution of one answer.
///
/// NUMBER answers pass through. STRING answers are looked up in `map`; a
/// missing question or label is an error, never a silent zero.
pub fn decode_answer(entry: &AnswerEntry, map: &QuestionAnswerMap) -> Result<f64, ScoringError> {
    let decoded = match entry.kind {
        AnswerKind::Number => decode_number(entry),
        AnswerKind::String => decode_label(entry, map),
    };
    if let Err(err) = &decoded {
        tracing::warn!(key = %entry.key, error = %err, "answer could not be decoded");
    }
    decoded
}

fn decode_number(entry: &AnswerEntry) -> Result<f64, ScoringError> {
    let value = match &entry.value {
        AnswerValue::Number(n) => *n,
        AnswerValue::Text(text) => {
            text.trim()
                .parse::<f64>()
                .map_err(|_| DecodingError::NotNumeric {
                    key: entry.key.clone(),
                    value: text.clone(),
                })?
        }
    };
    if !value.is_finite() {
        return Err(ScoringError::InvalidInput(format!(
            "question '{}' has non-finite value {value}",
            entry.key
        )));
    }
    Ok(value)
}

fn decode_label(entry: &AnswerEntry, map: &QuestionAnswerMap) -> Result<f64, ScoringError> {
    let coding = map
        .question(&entry.key)
        .ok_or_else(|| DecodingError::UnknownQuestion {
            key: entry.key.clone(),
        })?;
    let label = entry.value.to_string();
    let ordinal = coding
        .get(&label)
        .ok_or_else(|| DecodingError::UnknownLabel {
            key: entry.key.clone(),
            label,
        })?;
    Ok(f64::from(*ordinal))
}

/// Reverse of [`decode_answer`] for a categorical question.
pub fn encode_answer<'a>(key: &str, ordinal: i32, map: &'a QuestionAnswerMap) -> Option<&'a str> {
    map.label(key, ordinal)
}

/// Decode every answer and add the contributions. No answers sum to 0.
pub fn sum_answers_by_map(
    answers: &[AnswerEntry],
    map: &QuestionAnswerMap,
) -> Result<f64, ScoringError> {
    let mut total = 0.0;
    for entry in answers {
        total += decode_answer(entry, map)?;
    }
    Ok(total)
}

/// A before/after measurement pair, read from a submission by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedLevels {
    pub before: f64,
    pub after: f64,
}

impl PairedLevels {
    pub fn from_answers(
        answers: &[AnswerEntry],
        before_key: &str,
        after_key: &str,
        map: &QuestionAnswerMap,
    ) -> Result<Self, ScoringError> {
        let level = |key: &str| -> Result<f64, ScoringError> {
            let entry = answers.iter().find(|a| a.key == key).ok_or_else(|| {
                ScoringError::InvalidInput(format!("paired measurement is missing '{key}'"))
            })?;
            decode_answer(entry, map)
        };
        Ok(Self {
            before: level(before_key)?,
            after: level(after_key)?,
        })
    }

    /// Adapter for the older layout: a placeholder entry, then the before
    /// level, then the after level.
    pub fn from_legacy_positions(
        answers: &[AnswerEntry],
        map: &QuestionAnswerMap,
    ) -> Result<Self, ScoringError> {
        match answers {
            [_placeholder, before, after, ..] => Ok(Self {
                before: decode_answer(before, map)?,
                after: decode_answer(after, map)?,
            }),
            _ => Err(ScoringError::InvalidInput(format!(
                "legacy paired layout needs 3 answers, got {}",
                answers.len()
            ))),
        }
    }

    pub fn difference(&self) -> f64 {
        self.after - self.before
    }

    pub fn ratio(&self) -> Result<f64, ScoringError> {
        if self.before == 0.0 {
            return Err(ScoringError::InvalidInput(
                "ratio is undefined for a zero before level".into(),
            ));
        }
        Ok(self.after / self.before)
    }
}
