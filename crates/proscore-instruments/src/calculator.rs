use std::collections::HashMap;

use proscore_core::models::answer::{AnswerEntry, QuestionAnswerMap};
use proscore_core::models::questionnaire::{QuestionnaireType, Scale};
use proscore_core::models::score::ScoreResult;
use proscore_core::models::submission::Submission;

use crate::config::ScoringConfig;
use crate::error::{ConfigurationError, ScoringError};
use crate::questionnaires::{self, Aggregate};
use crate::registry::DistributionRegistry;

/// Scores submissions against the registered reference distributions.
///
/// Holds only immutable data once built; share it behind an `Arc` to score
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    registry: DistributionRegistry,
    answer_maps: HashMap<QuestionnaireType, QuestionAnswerMap>,
}

impl ScoreCalculator {
    pub fn from_config(config: &ScoringConfig) -> Result<Self, ConfigurationError> {
        let registry = DistributionRegistry::build(config)?;

        let mut answer_maps = HashMap::new();
        for (questionnaire, entry) in &config.questionnaires {
            let definition = questionnaires::definition(*questionnaire);
            match &entry.answer_map {
                Some(map) if !map.is_empty() => {
                    answer_maps.insert(*questionnaire, map.clone());
                }
                _ if definition.aggregation.uses_answer_map() => {
                    return Err(ConfigurationError::MissingAnswerMap(*questionnaire));
                }
                _ => {}
            }
        }

        Ok(Self {
            registry,
            answer_maps,
        })
    }

    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_config(&ScoringConfig::builtin())
    }

    pub fn registry(&self) -> &DistributionRegistry {
        &self.registry
    }

    /// The answer map for `questionnaire`; empty when the type has none.
    pub fn answer_map(&self, questionnaire: QuestionnaireType) -> &QuestionAnswerMap {
        static EMPTY: std::sync::LazyLock<QuestionAnswerMap> =
            std::sync::LazyLock::new(QuestionAnswerMap::default);
        self.answer_maps.get(&questionnaire).unwrap_or(&EMPTY)
    }

    /// Collapse a list of answers into the questionnaire's score value.
    pub fn aggregate(
        &self,
        questionnaire: QuestionnaireType,
        answers: &[AnswerEntry],
    ) -> Result<Aggregate, ScoringError> {
        let definition = questionnaires::definition(questionnaire);
        definition
            .aggregation
            .apply(answers, self.answer_map(questionnaire))
    }

    /// Score `current`, and its change since `previous` when one is given.
    pub fn calculate_score(
        &self,
        previous: Option<&Submission>,
        current: &Submission,
        questionnaire: QuestionnaireType,
    ) -> Result<ScoreResult, ScoringError> {
        let definition = questionnaires::definition(questionnaire);
        let scales = self.registry.scales(questionnaire)?;
        let lookup = move |scale: Scale| {
            scales.get(scale).ok_or(ScoringError::Lookup {
                questionnaire,
                scale,
            })
        };

        let current_aggregate = self.aggregate(questionnaire, &current.answers)?;
        let mut result =
            ScoreResult::new(lookup(definition.score_scale)?.score(current_aggregate.value)?);

        if let (Some(level_scale), Some(level)) = (definition.level_scale, current_aggregate.level)
        {
            result.level = Some(lookup(level_scale)?.score(level)?);
        }

        if let Some(previous) = previous {
            let previous_aggregate = self.aggregate(questionnaire, &previous.answers)?;
            let delta = current_aggregate.value - previous_aggregate.value;
            result.change = Some(lookup(scales.change_scale)?.score(delta)?);
        }

        tracing::debug!(
            %questionnaire,
            name = definition.name,
            value = result.value,
            percentile = result.percentile,
            has_change = result.change.is_some(),
            "submission scored"
        );
        Ok(result)
    }
}
