use proscore_core::models::answer::{AnswerEntry, AnswerKind, AnswerValue, QuestionAnswerMap};
use proscore_core::models::questionnaire::{QuestionnaireType, Scale};
use proscore_core::models::score::{ScoreComponent, ScoreResult};
use proscore_core::models::submission::Submission;

#[test]
fn answer_entry_reads_number_and_string_values() {
    let json = r#"[
        {"key": "steps", "kind": "NUMBER", "value": 8250},
        {"key": "q1", "kind": "STRING", "value": "Several days"}
    ]"#;

    let answers: Vec<AnswerEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(answers[0].kind, AnswerKind::Number);
    assert_eq!(answers[0].value, AnswerValue::Number(8250.0));
    assert_eq!(answers[1].kind, AnswerKind::String);
    assert_eq!(answers[1].value, AnswerValue::Text("Several days".to_string()));
}

#[test]
fn questionnaire_type_uses_snake_case_names() {
    let json = serde_json::to_string(&QuestionnaireType::AdLibitumIntake).unwrap();
    assert_eq!(json, "\"ad_libitum_intake\"");
    assert_eq!(QuestionnaireType::SatietyLevels.to_string(), "satiety_levels");

    for ty in QuestionnaireType::ALL {
        let parsed: QuestionnaireType =
            serde_json::from_str(&format!("\"{}\"", ty.as_str())).unwrap();
        assert_eq!(parsed, ty);
    }
}

#[test]
fn scale_defaults_to_calculated() {
    assert_eq!(Scale::default(), Scale::Calculated);
    let parsed: Scale = serde_json::from_str("\"change\"").unwrap();
    assert_eq!(parsed, Scale::Change);
}

#[test]
fn answer_map_reverse_lookup_on_injective_question() {
    let map = QuestionAnswerMap::default()
        .with_question("mood", &[("low", 0), ("ok", 1), ("high", 2)])
        .with_question("sleep", &[("bad", 0), ("poor", 0)]);

    assert_eq!(map.ordinal("mood", "ok"), Some(1));
    assert_eq!(map.label("mood", 2), Some("high"));
    assert!(map.is_injective("mood"));
    assert!(!map.is_injective("sleep"));
    assert!(!map.is_injective("missing"));
    assert_eq!(map.ordinal("missing", "ok"), None);
}

#[test]
fn score_result_omits_absent_change() {
    let result = ScoreResult::new(ScoreComponent {
        value: 12.0,
        percentile: 71,
        ordinal: "71st".to_string(),
    });

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["percentile"], 71);
    assert!(json.get("change").is_none());
    assert!(json.get("level").is_none());
    assert_eq!(result.base().ordinal, "71st");
}

#[test]
fn submission_finds_answer_by_key() {
    let submission = Submission::new(
        "2024-03-01T09:30:00Z".parse().unwrap(),
        vec![
            AnswerEntry::number("before", 70.0),
            AnswerEntry::number("after", 20.0),
        ],
    );

    assert_eq!(
        submission.answer("after").map(|a| &a.value),
        Some(&AnswerValue::Number(20.0))
    );
    assert!(submission.answer("placeholder").is_none());
}
