use proscore_core::models::questionnaire::{DistributionParams, Scale};

use super::{Aggregation, QuestionnaireDefinition};
use crate::config::QuestionnaireConfig;

/// Ad-libitum meal: energy eaten (kcal) when served until comfortably full.
pub const DEFINITION: QuestionnaireDefinition = QuestionnaireDefinition {
    name: "Ad-Libitum Intake",
    aggregation: Aggregation::Single,
    score_scale: Scale::Calculated,
    level_scale: None,
};

pub fn config() -> QuestionnaireConfig {
    QuestionnaireConfig {
        calculated: Some(DistributionParams::new(850.0, 300.0)),
        display: Some(DistributionParams::new(85.0, 30.0)),
        change: Some(DistributionParams::new(0.0, 200.0)),
        change_scale: Scale::Change,
        answer_map: None,
    }
}
