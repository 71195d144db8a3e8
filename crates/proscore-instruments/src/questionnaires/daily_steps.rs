use proscore_core::models::questionnaire::{DistributionParams, Scale};

use super::{Aggregation, QuestionnaireDefinition};
use crate::config::QuestionnaireConfig;

pub const DEFINITION: QuestionnaireDefinition = QuestionnaireDefinition {
    name: "Daily Steps",
    aggregation: Aggregation::Single,
    score_scale: Scale::Calculated,
    level_scale: None,
};

pub fn config() -> QuestionnaireConfig {
    QuestionnaireConfig {
        calculated: Some(DistributionParams::new(7500.0, 3000.0)),
        // Thousands of steps.
        display: Some(DistributionParams::new(7.5, 3.0)),
        // Day-to-day differences centre on no change.
        change: Some(DistributionParams::new(0.0, 2000.0)),
        change_scale: Scale::Change,
        answer_map: None,
    }
}
