use std::collections::HashMap;

use proscore_core::models::questionnaire::{QuestionnaireType, Scale};

use crate::config::{QuestionnaireConfig, ScoringConfig};
use crate::distribution::NormalDistribution;
use crate::error::{ConfigurationError, ScoringError};

/// The reference distributions of one questionnaire type.
#[derive(Debug, Clone)]
pub struct ScaleSet {
    pub calculated: NormalDistribution,
    pub display: NormalDistribution,
    pub change: Option<NormalDistribution>,
    pub change_scale: Scale,
}

impl ScaleSet {
    fn build(
        questionnaire: QuestionnaireType,
        entry: &QuestionnaireConfig,
    ) -> Result<Self, ConfigurationError> {
        let model = |scale: Scale| -> Result<Option<NormalDistribution>, ConfigurationError> {
            entry
                .params(scale)
                .map(|params| {
                    NormalDistribution::new(params).map_err(|e| {
                        ConfigurationError::InvalidDistribution {
                            questionnaire,
                            scale,
                            reason: e.to_string(),
                        }
                    })
                })
                .transpose()
        };
        let required = |scale: Scale| -> Result<NormalDistribution, ConfigurationError> {
            model(scale)?.ok_or(ConfigurationError::MissingDistribution {
                questionnaire,
                scale,
            })
        };

        let set = Self {
            calculated: required(Scale::Calculated)?,
            display: required(Scale::Display)?,
            change: model(Scale::Change)?,
            change_scale: entry.change_scale,
        };
        if set.change_scale == Scale::Change && set.change.is_none() {
            return Err(ConfigurationError::MissingDistribution {
                questionnaire,
                scale: Scale::Change,
            });
        }
        Ok(set)
    }

    pub fn get(&self, scale: Scale) -> Option<&NormalDistribution> {
        match scale {
            Scale::Calculated => Some(&self.calculated),
            Scale::Display => Some(&self.display),
            Scale::Change => self.change.as_ref(),
        }
    }
}

/// Reference distributions for every configured questionnaire type.
///
/// Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct DistributionRegistry {
    entries: HashMap<QuestionnaireType, ScaleSet>,
}

impl DistributionRegistry {
    /// Fails on the first questionnaire with missing or invalid parameters;
    /// no partially built registry is returned.
    pub fn build(config: &ScoringConfig) -> Result<Self, ConfigurationError> {
        let mut entries = HashMap::with_capacity(config.questionnaires.len());
        for (questionnaire, entry) in &config.questionnaires {
            let set = ScaleSet::build(*questionnaire, entry)?;
            let calculated = set.calculated.params();
            let display_params = set.display.params();
            tracing::debug!(
                %questionnaire,
                calculated_mean = calculated.mean,
                calculated_sd = calculated.standard_deviation,
                display_mean = display_params.mean,
                display_sd = display_params.standard_deviation,
                change_scale = %set.change_scale,
                "registered reference distributions"
            );
            entries.insert(*questionnaire, set);
        }
        tracing::info!(questionnaires = entries.len(), "distribution registry built");
        Ok(Self { entries })
    }

    pub fn scales(&self, questionnaire: QuestionnaireType) -> Result<&ScaleSet, ScoringError> {
        self.entries
            .get(&questionnaire)
            .ok_or(ScoringError::UnknownQuestionnaire(questionnaire))
    }

    pub fn get(
        &self,
        questionnaire: QuestionnaireType,
        scale: Scale,
    ) -> Result<&NormalDistribution, ScoringError> {
        self.scales(questionnaire)?
            .get(scale)
            .ok_or(ScoringError::Lookup {
                questionnaire,
                scale,
            })
    }

    pub fn percentile(
        &self,
        questionnaire: QuestionnaireType,
        scale: Scale,
        value: f64,
    ) -> Result<u8, ScoringError> {
        self.get(questionnaire, scale)?.percentile(value)
    }

    pub fn contains(&self, questionnaire: QuestionnaireType) -> bool {
        self.entries.contains_key(&questionnaire)
    }
}
