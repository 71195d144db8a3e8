use std::collections::BTreeMap;
use std::path::Path;

use proscore_core::models::answer::QuestionAnswerMap;
use proscore_core::models::questionnaire::{DistributionParams, QuestionnaireType, Scale};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigurationError, ScoringError};
use crate::questionnaires;

/// Current config version. Bump this when changing shape; each bump needs a
/// step in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Static reference data for every scored questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub questionnaires: BTreeMap<QuestionnaireType, QuestionnaireConfig>,
}

/// Reference distributions and answer coding for one questionnaire type.
///
/// Everything is optional at parse time; gaps are reported when the registry
/// is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireConfig {
    #[serde(default)]
    pub calculated: Option<DistributionParams>,
    #[serde(default)]
    pub display: Option<DistributionParams>,
    /// Dedicated distribution for difference scores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<DistributionParams>,
    /// Scale that change scores are ranked against.
    #[serde(default)]
    pub change_scale: Scale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_map: Option<QuestionAnswerMap>,
}

impl QuestionnaireConfig {
    pub fn params(&self, scale: Scale) -> Option<DistributionParams> {
        match scale {
            Scale::Calculated => self.calculated,
            Scale::Display => self.display,
            Scale::Change => self.change,
        }
    }
}

impl ScoringConfig {
    /// The reference configuration shipped with the built-in questionnaires.
    pub fn builtin() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            questionnaires: QuestionnaireType::ALL
                .into_iter()
                .map(|ty| (ty, questionnaires::builtin_config(ty)))
                .collect(),
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ScoringError> {
        // Parse as raw JSON so migrations run before deserializing.
        let json: Value = serde_json::from_str(contents)?;
        let raw_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        let on_disk_version =
            u32::try_from(raw_version).map_err(|_| ConfigurationError::UnsupportedVersion {
                found: raw_version,
                supported: CURRENT_VERSION,
            })?;

        let migrated = migrate(json, on_disk_version)?;
        let config: ScoringConfig = serde_json::from_value(migrated)?;
        Ok(config)
    }

    pub fn get(&self, questionnaire: QuestionnaireType) -> Option<&QuestionnaireConfig> {
        self.questionnaires.get(&questionnaire)
    }
}

pub fn load_config(path: &Path) -> Result<ScoringConfig, ScoringError> {
    let contents = std::fs::read_to_string(path)?;
    let config = ScoringConfig::from_json_str(&contents)?;
    tracing::info!(
        path = %path.display(),
        questionnaires = config.questionnaires.len(),
        "scoring config loaded"
    );
    Ok(config)
}

pub fn save_config(config: &ScoringConfig, path: &Path) -> Result<(), ScoringError> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "scoring config saved");
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: Value, from_version: u32) -> Result<Value, ConfigurationError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigurationError::UnsupportedVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: flatten `distribution: { calculated, display }` into the entry
    // and make the change scale explicit.
    if from_version < 1 {
        let entries = json
            .get_mut("questionnaires")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                ConfigurationError::Malformed("'questionnaires' is not a JSON object".into())
            })?;

        for (name, entry) in entries.iter_mut() {
            let obj = entry.as_object_mut().ok_or_else(|| {
                ConfigurationError::Malformed(format!("entry '{name}' is not a JSON object"))
            })?;
            if let Some(Value::Object(nested)) = obj.remove("distribution") {
                for (scale, params) in nested {
                    obj.entry(scale).or_insert(params);
                }
            }
            obj.entry("change_scale")
                .or_insert(Value::String(Scale::Calculated.as_str().to_string()));
        }

        if let Some(root) = json.as_object_mut() {
            root.insert("config_version".to_string(), Value::Number(1.into()));
        }
        tracing::info!("migrated scoring config v0 → v1");
    }

    Ok(json)
}
