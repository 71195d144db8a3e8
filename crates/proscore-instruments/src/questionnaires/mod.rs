//! Per-questionnaire scoring rules and built-in reference data.

pub mod ad_libitum_intake;
pub mod daily_steps;
pub mod feeling_inventory;
pub mod satiety_levels;

use proscore_core::models::answer::{AnswerEntry, QuestionAnswerMap};
use proscore_core::models::questionnaire::{QuestionnaireType, Scale};

use crate::config::QuestionnaireConfig;
use crate::decode::{self, PairedLevels};
use crate::error::ScoringError;

/// How the answers of a submission collapse into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Decode every answer through the answer map and add them up.
    SumByMap,
    /// The value of the one answer. No answers count as 0.
    Single,
    /// `after - before`.
    PairedDifference {
        before: &'static str,
        after: &'static str,
    },
    /// `after / before`.
    PairedRatio {
        before: &'static str,
        after: &'static str,
    },
}

/// The aggregated value of a submission, plus the raw level for paired
/// measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub value: f64,
    pub level: Option<f64>,
}

impl Aggregation {
    pub fn uses_answer_map(&self) -> bool {
        matches!(self, Self::SumByMap)
    }

    pub fn apply(
        &self,
        answers: &[AnswerEntry],
        map: &QuestionAnswerMap,
    ) -> Result<Aggregate, ScoringError> {
        let aggregate = match *self {
            Self::SumByMap => Aggregate {
                value: decode::sum_answers_by_map(answers, map)?,
                level: None,
            },
            Self::Single => {
                let value = match answers {
                    [] => 0.0,
                    [only] => decode::decode_answer(only, map)?,
                    _ => {
                        return Err(ScoringError::InvalidInput(format!(
                            "expected a single answer, got {}",
                            answers.len()
                        )));
                    }
                };
                Aggregate { value, level: None }
            }
            Self::PairedDifference { before, after } => {
                let levels = PairedLevels::from_answers(answers, before, after, map)?;
                Aggregate {
                    value: levels.difference(),
                    level: Some(levels.after),
                }
            }
            Self::PairedRatio { before, after } => {
                let levels = PairedLevels::from_answers(answers, before, after, map)?;
                Aggregate {
                    value: levels.ratio()?,
                    level: Some(levels.after),
                }
            }
        };
        Ok(aggregate)
    }
}

/// The fixed scoring rules of one questionnaire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireDefinition {
    pub name: &'static str,
    pub aggregation: Aggregation,
    /// Scale the aggregated value is ranked against.
    pub score_scale: Scale,
    /// Scale the raw after-level is ranked against, for paired measurements.
    pub level_scale: Option<Scale>,
}

pub fn definition(questionnaire: QuestionnaireType) -> &'static QuestionnaireDefinition {
    match questionnaire {
        QuestionnaireType::FeelingInventory => &feeling_inventory::DEFINITION,
        QuestionnaireType::DailySteps => &daily_steps::DEFINITION,
        QuestionnaireType::AdLibitumIntake => &ad_libitum_intake::DEFINITION,
        QuestionnaireType::SatietyLevels => &satiety_levels::DEFINITION,
    }
}

pub fn builtin_config(questionnaire: QuestionnaireType) -> QuestionnaireConfig {
    match questionnaire {
        QuestionnaireType::FeelingInventory => feeling_inventory::config(),
        QuestionnaireType::DailySteps => daily_steps::config(),
        QuestionnaireType::AdLibitumIntake => ad_libitum_intake::config(),
        QuestionnaireType::SatietyLevels => satiety_levels::config(),
    }
}
