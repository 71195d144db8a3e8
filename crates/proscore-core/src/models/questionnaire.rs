use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The questionnaires this system knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionnaireType {
    /// Seven-item anxiety/feeling inventory, each item rated 0–3.
    FeelingInventory,
    /// Single step count for a day.
    DailySteps,
    /// Single ad-libitum meal intake measurement (kcal).
    AdLibitumIntake,
    /// Hunger level before and after a meal, each 0–100.
    SatietyLevels,
}

impl QuestionnaireType {
    pub const ALL: [QuestionnaireType; 4] = [
        Self::FeelingInventory,
        Self::DailySteps,
        Self::AdLibitumIntake,
        Self::SatietyLevels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeelingInventory => "feeling_inventory",
            Self::DailySteps => "daily_steps",
            Self::AdLibitumIntake => "ad_libitum_intake",
            Self::SatietyLevels => "satiety_levels",
        }
    }
}

impl fmt::Display for QuestionnaireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which reference distribution a value is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scale {
    /// Internal/raw numeric scale used for scoring math.
    #[default]
    Calculated,
    /// The scale a clinician or user sees.
    Display,
    /// Optional dedicated reference distribution for difference scores.
    Change,
}

impl Scale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calculated => "calculated",
            Self::Display => "display",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a normal reference distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DistributionParams {
    pub mean: f64,
    /// Must be finite and strictly positive.
    pub standard_deviation: f64,
}

impl DistributionParams {
    pub const fn new(mean: f64, standard_deviation: f64) -> Self {
        Self {
            mean,
            standard_deviation,
        }
    }
}
