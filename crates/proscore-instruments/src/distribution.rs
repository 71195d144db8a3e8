use proscore_core::models::questionnaire::DistributionParams;
use proscore_core::models::score::ScoreComponent;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{ConfigurationError, ScoringError};
use crate::stats;

/// A normal reference population.
///
/// Immutable after construction, so one instance can be shared across
/// threads for read-only scoring.
#[derive(Debug, Clone)]
pub struct NormalDistribution {
    params: DistributionParams,
    normal: Normal,
}

impl NormalDistribution {
    pub fn new(params: DistributionParams) -> Result<Self, ConfigurationError> {
        let DistributionParams {
            mean,
            standard_deviation,
        } = params;
        if !mean.is_finite() {
            return Err(ConfigurationError::InvalidParams(format!(
                "mean must be finite, got {mean}"
            )));
        }
        if !standard_deviation.is_finite() || standard_deviation <= 0.0 {
            return Err(ConfigurationError::InvalidParams(format!(
                "standard deviation must be finite and positive, got {standard_deviation}"
            )));
        }
        let normal = Normal::new(mean, standard_deviation)
            .map_err(|e| ConfigurationError::InvalidParams(e.to_string()))?;
        Ok(Self { params, normal })
    }

    pub fn params(&self) -> DistributionParams {
        self.params
    }

    pub fn cdf(&self, value: f64) -> f64 {
        self.normal.cdf(value)
    }

    /// `floor(CDF(value) * 100)`. The CDF saturates at 0 and 1 for extreme
    /// values, so the result stays within 0–100.
    pub fn percentile(&self, value: f64) -> Result<u8, ScoringError> {
        if !value.is_finite() {
            return Err(ScoringError::InvalidInput(format!(
                "cannot take the percentile of {value}"
            )));
        }
        Ok((self.cdf(value) * 100.0).floor() as u8)
    }

    /// The percentile as an ordinal string, or `None` for non-finite input.
    pub fn ordinal(&self, value: f64) -> Option<String> {
        let percentile = self.percentile(value).ok()?;
        stats::ordinal(f64::from(percentile))
    }

    pub fn score(&self, value: f64) -> Result<ScoreComponent, ScoringError> {
        let percentile = self.percentile(value)?;
        let ordinal = stats::ordinal(f64::from(percentile)).ok_or_else(|| {
            ScoringError::InvalidInput(format!("no ordinal for percentile {percentile}"))
        })?;
        Ok(ScoreComponent {
            value,
            percentile,
            ordinal,
        })
    }
}
