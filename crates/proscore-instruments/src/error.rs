use proscore_core::models::questionnaire::{QuestionnaireType, Scale};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(QuestionnaireType),

    #[error("no {scale} distribution registered for '{questionnaire}'")]
    Lookup {
        questionnaire: QuestionnaireType,
        scale: Scale,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Static configuration that cannot produce a usable registry.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("'{questionnaire}' has no {scale} distribution parameters")]
    MissingDistribution {
        questionnaire: QuestionnaireType,
        scale: Scale,
    },

    #[error("'{questionnaire}' {scale} distribution is invalid: {reason}")]
    InvalidDistribution {
        questionnaire: QuestionnaireType,
        scale: Scale,
        reason: String,
    },

    #[error("invalid distribution parameters: {0}")]
    InvalidParams(String),

    #[error("'{0}' scores categorical answers but has no answer map")]
    MissingAnswerMap(QuestionnaireType),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

/// A categorical answer that the active answer map cannot resolve.
#[derive(Debug, Error, PartialEq)]
pub enum DecodingError {
    #[error("question '{key}' has no entry in the answer map")]
    UnknownQuestion { key: String },

    #[error("question '{key}' has no ordinal for label '{label}'")]
    UnknownLabel { key: String, label: String },

    #[error("question '{key}' expects a number, got '{value}'")]
    NotNumeric { key: String, value: String },
}

impl ScoringError {
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
