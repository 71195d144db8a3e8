use proscore_core::models::answer::QuestionAnswerMap;
use proscore_core::models::questionnaire::{DistributionParams, Scale};

use super::{Aggregation, QuestionnaireDefinition};
use crate::config::QuestionnaireConfig;

/// Feeling inventory: seven anxiety items over the last two weeks, each
/// rated "Not at all" (0) to "Nearly every day" (3). Total 0–21.
/// Higher = more anxiety.
pub const DEFINITION: QuestionnaireDefinition = QuestionnaireDefinition {
    name: "Feeling Inventory",
    aggregation: Aggregation::SumByMap,
    score_scale: Scale::Calculated,
    level_scale: None,
};

pub const ITEMS: [&str; 7] = [
    "nervous",
    "uncontrolled_worry",
    "worry_too_much",
    "trouble_relaxing",
    "restless",
    "irritable",
    "afraid",
];

pub const LABELS: [(&str, i32); 4] = [
    ("Not at all", 0),
    ("Several days", 1),
    ("More than half the days", 2),
    ("Nearly every day", 3),
];

pub fn config() -> QuestionnaireConfig {
    QuestionnaireConfig {
        calculated: Some(DistributionParams::new(3.0, 3.4)),
        // Total rescaled to 0–100.
        display: Some(DistributionParams::new(14.3, 16.2)),
        // Week-to-week differences centre on no change.
        change: Some(DistributionParams::new(0.0, 3.6)),
        change_scale: Scale::Change,
        answer_map: Some(QuestionAnswerMap::uniform(&ITEMS, &LABELS)),
    }
}
