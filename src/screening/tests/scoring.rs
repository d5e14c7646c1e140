use super::common::*;
use crate::screening::scoring::{ScoringConfig, ScoringEngine};

#[test]
fn final_year_students_score_the_maximum_in_any_program_length() {
    let engine = scoring_engine();
    for max_grade in [2u8, 3, 4] {
        let mut record = eligible_record("김민준");
        record.grade = max_grade;
        record.max_grade = max_grade;
        engine.score(&mut record, &mut audit());
        assert_eq!(
            record.grade_score, 50.0,
            "max_grade {max_grade} should reach the ceiling"
        );
    }
}

#[test]
fn grade_score_normalizes_across_program_lengths() {
    let engine = scoring_engine();

    let mut second_of_four = eligible_record("가");
    second_of_four.grade = 2;
    second_of_four.max_grade = 4;
    engine.score(&mut second_of_four, &mut audit());
    assert_eq!(second_of_four.grade_score, 25.0);

    let mut second_of_three = eligible_record("나");
    second_of_three.grade = 2;
    second_of_three.max_grade = 3;
    engine.score(&mut second_of_three, &mut audit());
    assert_eq!(second_of_three.grade_score, 33.33);
}

#[test]
fn unknown_grade_scores_zero() {
    let engine = scoring_engine();
    let mut record = eligible_record("김민준");
    engine.score(&mut record, &mut audit());
    assert_eq!(record.grade_score, 0.0);
}

#[test]
fn completion_score_is_clamped_and_monotonic() {
    let engine = scoring_engine();

    let mut over_complete = eligible_record("가");
    over_complete.completed_credits = 150.0;
    over_complete.graduation_credits = 120.0;
    engine.score(&mut over_complete, &mut audit());
    assert_eq!(over_complete.completion_rate, 1.0);
    assert_eq!(over_complete.completion_score, 50.0);

    let mut previous_score = -1.0;
    for completed in [0.0, 30.0, 60.0, 90.0, 120.0, 200.0] {
        let mut record = eligible_record("나");
        record.completed_credits = completed;
        record.graduation_credits = 120.0;
        engine.score(&mut record, &mut audit());
        assert!(record.completion_score >= previous_score);
        previous_score = record.completion_score;
    }
}

#[test]
fn bonus_categories_sum_and_cap() {
    let engine = scoring_engine();
    let mut record = eligible_record("김민준");
    record.major = "방위산업학과".to_string();
    record.has_certificate = true;
    record.volunteer_hours = 80.0;
    engine.score(&mut record, &mut audit());

    assert!(record.bonus_stem);
    assert!(record.bonus_cert);
    assert!(record.bonus_volunteer);
    assert_eq!(record.bonus_score, 10.0);
}

#[test]
fn bonus_ceiling_is_configurable() {
    let config = ScoringConfig {
        bonus_ceiling: 5.0,
        ..ScoringConfig::default()
    };
    let engine = ScoringEngine::new(config);
    let mut record = eligible_record("김민준");
    record.major = "컴퓨터공학과".to_string();
    record.has_certificate = true;
    record.volunteer_hours = 80.0;
    engine.score(&mut record, &mut audit());

    assert_eq!(record.bonus_score, 5.0);
}

#[test]
fn volunteer_bonus_requires_the_hour_threshold() {
    let engine = scoring_engine();
    let mut record = eligible_record("김민준");
    record.volunteer_hours = 49.5;
    engine.score(&mut record, &mut audit());
    assert!(!record.bonus_volunteer);

    record.volunteer_hours = 50.0;
    engine.score(&mut record, &mut audit());
    assert!(record.bonus_volunteer);
}

#[test]
fn humanities_major_earns_no_stem_bonus() {
    let engine = scoring_engine();
    let mut record = eligible_record("김민준");
    record.major = "국어국문학과".to_string();
    engine.score(&mut record, &mut audit());
    assert!(!record.bonus_stem);
    assert_eq!(record.bonus_score, 0.0);
}

#[test]
fn total_is_the_rounded_sum_of_components() {
    let engine = scoring_engine();
    let mut record = eligible_record("김민준");
    record.grade = 3;
    record.max_grade = 4;
    record.completed_credits = 98.5;
    record.graduation_credits = 130.0;
    record.major = "컴퓨터공학과".to_string();
    engine.score(&mut record, &mut audit());

    assert_eq!(record.grade_score, 37.5);
    assert_eq!(record.completion_score, 37.88);
    assert_eq!(record.bonus_score, 5.0);
    assert_eq!(record.total_score, 80.38);
}

#[test]
fn scoring_is_deterministic_for_identical_records() {
    let engine = scoring_engine();
    let build = || {
        let mut record = eligible_record("김민준");
        record.grade = 2;
        record.max_grade = 3;
        record.completed_credits = 61.0;
        record.graduation_credits = 95.0;
        record.gpa = 3.77;
        record.major = "소프트웨어학과".to_string();
        record.volunteer_hours = 55.0;
        record
    };

    let mut first = build();
    let mut second = build();
    engine.score(&mut first, &mut audit());
    engine.score(&mut second, &mut audit());

    assert_eq!(first.total_score, second.total_score);
    assert_eq!(first.grade_score, second.grade_score);
    assert_eq!(first.completion_score, second.completion_score);
    assert_eq!(first.bonus_score, second.bonus_score);
}
