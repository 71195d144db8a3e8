use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A value together with where it falls in its reference population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreComponent {
    pub value: f64,
    /// Percentile rank (0–100).
    pub percentile: u8,
    /// Percentile with an English ordinal suffix, e.g. "71st".
    pub ordinal: String,
}

/// The outcome of scoring one submission.
///
/// Built fresh on every call and never persisted by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub value: f64,
    pub percentile: u8,
    pub ordinal: String,
    /// Difference from the previous submission. Absent when there was no
    /// previous submission, which is not the same as zero change.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub change: Option<ScoreComponent>,
    /// Raw level on the display scale, for paired-measurement questionnaires.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub level: Option<ScoreComponent>,
}

impl ScoreResult {
    pub fn new(base: ScoreComponent) -> Self {
        Self {
            value: base.value,
            percentile: base.percentile,
            ordinal: base.ordinal,
            change: None,
            level: None,
        }
    }

    pub fn base(&self) -> ScoreComponent {
        ScoreComponent {
            value: self.value,
            percentile: self.percentile,
            ordinal: self.ordinal.clone(),
        }
    }
}
