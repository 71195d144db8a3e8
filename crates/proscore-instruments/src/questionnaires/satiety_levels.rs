use proscore_core::models::questionnaire::{DistributionParams, Scale};

use super::{Aggregation, QuestionnaireDefinition};
use crate::config::QuestionnaireConfig;

pub const BEFORE_LEVEL: &str = "before_level";
pub const AFTER_LEVEL: &str = "after_level";

/// Satiety levels: hunger rated 0–100 before and after a standard meal.
/// The score is the drop in hunger; the after-level is also ranked on the
/// display scale.
pub const DEFINITION: QuestionnaireDefinition = QuestionnaireDefinition {
    name: "Satiety Levels",
    aggregation: Aggregation::PairedDifference {
        before: BEFORE_LEVEL,
        after: AFTER_LEVEL,
    },
    score_scale: Scale::Calculated,
    level_scale: Some(Scale::Display),
};

pub fn config() -> QuestionnaireConfig {
    QuestionnaireConfig {
        // after - before; hunger normally falls after eating.
        calculated: Some(DistributionParams::new(-45.0, 20.0)),
        display: Some(DistributionParams::new(30.0, 20.0)),
        // Visit-to-visit shift in the hunger drop.
        change: Some(DistributionParams::new(0.0, 15.0)),
        change_scale: Scale::Change,
        answer_map: None,
    }
}
