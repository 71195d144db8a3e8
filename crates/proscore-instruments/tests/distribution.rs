use proscore_core::models::questionnaire::DistributionParams;
use proscore_instruments::distribution::NormalDistribution;
use proscore_instruments::error::{ConfigurationError, ScoringError};

fn normal(mean: f64, sd: f64) -> NormalDistribution {
    NormalDistribution::new(DistributionParams::new(mean, sd)).unwrap()
}

#[test]
fn mean_is_the_fiftieth_percentile() {
    for (mean, sd) in [(0.0, 1.0), (3.0, 3.4), (7500.0, 3000.0), (-45.0, 20.0)] {
        let p = normal(mean, sd).percentile(mean).unwrap();
        assert!((49..=50).contains(&p), "mean {mean} sd {sd} gave {p}");
    }
}

#[test]
fn known_standard_normal_percentiles() {
    let dist = normal(0.0, 1.0);
    assert_eq!(dist.percentile(1.0).unwrap(), 84);
    assert_eq!(dist.percentile(-1.0).unwrap(), 15);
    assert_eq!(dist.percentile(1.96).unwrap(), 97);
}

#[test]
fn extreme_values_saturate() {
    let dist = normal(100.0, 15.0);
    assert_eq!(dist.percentile(-1e9).unwrap(), 0);
    assert_eq!(dist.percentile(1e9).unwrap(), 100);
    assert_eq!(dist.percentile(f64::MAX).unwrap(), 100);
}

#[test]
fn ordinal_formats_the_percentile() {
    let dist = normal(0.0, 1.0);
    assert_eq!(dist.ordinal(1.0).as_deref(), Some("84th"));
    assert_eq!(dist.ordinal(-1.0).as_deref(), Some("15th"));
    assert_eq!(dist.ordinal(f64::NAN), None);
}

#[test]
fn non_finite_percentile_is_an_error() {
    let dist = normal(0.0, 1.0);
    assert!(matches!(
        dist.percentile(f64::NAN),
        Err(ScoringError::InvalidInput(_))
    ));
    assert!(dist.score(f64::INFINITY).is_err());
}

#[test]
fn score_bundles_value_percentile_and_ordinal() {
    let component = normal(0.0, 1.0).score(1.0).unwrap();
    assert_eq!(component.value, 1.0);
    assert_eq!(component.percentile, 84);
    assert_eq!(component.ordinal, "84th");
}

#[test]
fn rejects_non_positive_standard_deviation() {
    for sd in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = NormalDistribution::new(DistributionParams::new(0.0, sd)).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidParams(_)), "sd {sd}");
    }
    assert!(NormalDistribution::new(DistributionParams::new(f64::NAN, 1.0)).is_err());
}
