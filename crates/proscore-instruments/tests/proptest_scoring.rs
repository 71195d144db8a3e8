//! Property-based tests for the percentile model and scoring pipeline.

use proptest::prelude::*;
use proscore_core::models::answer::AnswerEntry;
use proscore_core::models::questionnaire::{DistributionParams, QuestionnaireType};
use proscore_core::models::submission::Submission;
use proscore_instruments::decode::{decode_answer, encode_answer};
use proscore_instruments::distribution::NormalDistribution;
use proscore_instruments::questionnaires::feeling_inventory::{ITEMS, LABELS};
use proscore_instruments::stats;
use proscore_instruments::ScoreCalculator;

fn submission(labels: &[usize]) -> Submission {
    let answers = ITEMS
        .iter()
        .zip(labels)
        .map(|(item, i)| AnswerEntry::label(item, LABELS[*i].0))
        .collect();
    Submission::new("2024-01-01T00:00:00Z".parse().unwrap(), answers)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn mean_is_the_median(mean in -1e6f64..1e6, sd in 1e-3f64..1e4) {
        let dist = NormalDistribution::new(DistributionParams::new(mean, sd)).unwrap();
        let p = dist.percentile(mean).unwrap();
        prop_assert!((49..=50).contains(&p), "mean {} sd {} gave {}", mean, sd, p);
    }

    #[test]
    fn percentile_is_non_decreasing(
        mean in -1e3f64..1e3,
        sd in 1e-2f64..1e3,
        a in -1e4f64..1e4,
        b in -1e4f64..1e4,
    ) {
        let dist = NormalDistribution::new(DistributionParams::new(mean, sd)).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = dist.percentile(lo).unwrap();
        let p_hi = dist.percentile(hi).unwrap();
        prop_assert!(p_lo <= p_hi);
        prop_assert!(p_hi <= 100);
    }

    #[test]
    fn ordinal_keeps_the_truncated_number(n in -1e6f64..1e6) {
        let formatted = stats::ordinal(n).unwrap();
        let digits = &formatted[..formatted.len() - 2];
        prop_assert_eq!(digits.parse::<i64>().unwrap(), n.trunc() as i64);
    }

    #[test]
    fn range_has_ceil_count(start in -100i32..100, len in 1i32..200, step in 1i32..10) {
        let start = f64::from(start);
        let end = start + f64::from(len);
        let step = f64::from(step);
        let values: Vec<f64> = stats::range(start, end, step).collect();
        prop_assert_eq!(values.len(), ((end - start) / step).ceil() as usize);
        prop_assert!(values.iter().all(|v| *v < end));
    }

    #[test]
    fn inventory_scoring_is_pure(
        current in prop::collection::vec(0usize..4, 7),
        previous in prop::collection::vec(0usize..4, 7),
    ) {
        let calculator = ScoreCalculator::builtin().unwrap();
        let current = submission(&current);
        let previous = submission(&previous);

        let first = calculator
            .calculate_score(Some(&previous), &current, QuestionnaireType::FeelingInventory)
            .unwrap();
        let second = calculator
            .calculate_score(Some(&previous), &current, QuestionnaireType::FeelingInventory)
            .unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!((0.0..=21.0).contains(&first.value));
        prop_assert!(first.percentile <= 100);
    }

    #[test]
    fn inventory_labels_round_trip(item in 0usize..7, label in 0usize..4) {
        let calculator = ScoreCalculator::builtin().unwrap();
        let map = calculator.answer_map(QuestionnaireType::FeelingInventory);
        let entry = AnswerEntry::label(ITEMS[item], LABELS[label].0);

        let ordinal = decode_answer(&entry, map).unwrap() as i32;
        prop_assert_eq!(encode_answer(ITEMS[item], ordinal, map), Some(LABELS[label].0));
    }
}
