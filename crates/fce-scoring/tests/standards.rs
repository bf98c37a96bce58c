use std::collections::HashSet;

use fce_scoring::error::ScoringError;
use fce_scoring::{
    distance_category, get_mtm_standard, get_mtm_standards, require_mtm_standard, weight_category,
    Difficulty, DistanceCategory, WeightCategory,
};

#[test]
fn reference_tasks_have_expected_definitions() {
    let lifting = get_mtm_standard("lifting").unwrap();
    assert_eq!(lifting.base_standard_time, 10.0);
    assert!(lifting.factors.weight);

    let balance = get_mtm_standard("balance").unwrap();
    assert_eq!(balance.base_standard_time, 30.0);
    assert!(balance.factors.distance);

    let fingering = get_mtm_standard("fingering").unwrap();
    assert_eq!(fingering.base_standard_time, 12.0);
    assert_eq!(fingering.factors.reps, Some(10.0));
}

#[test]
fn unknown_task_lookup_is_none() {
    assert!(get_mtm_standard("juggling").is_none());
    match require_mtm_standard("juggling") {
        Err(ScoringError::UnknownTask(id)) => assert_eq!(id, "juggling"),
        other => panic!("expected UnknownTask, got {other:?}"),
    }
}

#[test]
fn table_entries_are_well_formed() {
    let standards = get_mtm_standards();
    assert!(standards.len() >= 3);

    let ids: HashSet<_> = standards.iter().map(|s| s.task_id.as_str()).collect();
    assert_eq!(ids.len(), standards.len());

    for standard in &standards {
        assert!(standard.base_standard_time > 0.0, "{}", standard.task_id);
        assert!(!standard.task_name.is_empty());
        assert!(!standard.unit.is_empty());
        if let Some(reps) = standard.factors.reps {
            assert!(reps > 0.0, "{}", standard.task_id);
        }
        let found = get_mtm_standard(&standard.task_id).unwrap();
        assert_eq!(found.task_name, standard.task_name);
    }
}

#[test]
fn weight_bands() {
    assert_eq!(weight_category(0.0), WeightCategory::Light);
    assert_eq!(weight_category(9.99), WeightCategory::Light);
    assert_eq!(weight_category(10.0), WeightCategory::Medium);
    assert_eq!(weight_category(30.0), WeightCategory::Medium);
    assert_eq!(weight_category(30.5), WeightCategory::Heavy);
    assert_eq!(weight_category(50.0), WeightCategory::Heavy);
    assert_eq!(weight_category(50.5), WeightCategory::VeryHeavy);
}

#[test]
fn distance_bands() {
    assert_eq!(distance_category(19.0), DistanceCategory::Short);
    assert_eq!(distance_category(20.0), DistanceCategory::Medium);
    assert_eq!(distance_category(50.0), DistanceCategory::Medium);
    assert_eq!(distance_category(51.0), DistanceCategory::Long);
    assert_eq!(distance_category(100.0), DistanceCategory::Long);
    assert_eq!(distance_category(100.1), DistanceCategory::VeryLong);
}

#[test]
fn multipliers_match_factor_tables() {
    assert_eq!(WeightCategory::Light.multiplier(), 0.85);
    assert_eq!(WeightCategory::Medium.multiplier(), 1.0);
    assert_eq!(WeightCategory::Heavy.multiplier(), 1.3);
    assert_eq!(WeightCategory::VeryHeavy.multiplier(), 1.6);

    assert_eq!(DistanceCategory::Short.multiplier(), 0.8);
    assert_eq!(DistanceCategory::Medium.multiplier(), 1.0);
    assert_eq!(DistanceCategory::Long.multiplier(), 1.2);
    assert_eq!(DistanceCategory::VeryLong.multiplier(), 1.4);

    assert_eq!(Difficulty::Easy.multiplier(), 0.8);
    assert_eq!(Difficulty::Medium.multiplier(), 1.0);
    assert_eq!(Difficulty::Hard.multiplier(), 1.3);
}

#[test]
fn difficulty_parses_loosely() {
    assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!(Difficulty::Medium.to_string(), "medium");

    let err = "extreme".parse::<Difficulty>().unwrap_err();
    assert!(matches!(err, ScoringError::UnknownDifficulty(ref s) if s == "extreme"));
}

#[test]
fn categories_serialize_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&WeightCategory::VeryHeavy).unwrap(),
        "\"very_heavy\""
    );
    assert_eq!(
        serde_json::to_string(&DistanceCategory::VeryLong).unwrap(),
        "\"very_long\""
    );
}
