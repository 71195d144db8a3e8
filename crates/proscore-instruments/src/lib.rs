//! proscore-instruments
//!
//! Scoring engine for patient-reported-outcome questionnaires. Pure
//! computation over already-fetched data: answers are decoded and
//! aggregated per questionnaire type, then ranked against normal reference
//! distributions to produce percentiles and change scores.

pub mod calculator;
pub mod config;
pub mod decode;
pub mod distribution;
pub mod error;
pub mod questionnaires;
pub mod registry;
pub mod stats;

pub use calculator::ScoreCalculator;
pub use config::ScoringConfig;
pub use error::{ConfigurationError, DecodingError, ScoringError};
