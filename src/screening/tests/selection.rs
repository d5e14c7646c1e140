use std::collections::BTreeSet;

use super::common::*;
use crate::screening::selection::select_scholars;

fn no_exclusions() -> BTreeSet<String> {
    BTreeSet::new()
}

#[test]
fn ineligible_records_never_reach_the_eligible_pool() {
    let mut top_scorer = scored_record("김민준", 99.0, 1.0, 4, 4.5);
    top_scorer.is_eligible = false;
    let runner_up = scored_record("이서연", 60.0, 0.5, 2, 3.0);

    let mut records = vec![top_scorer, runner_up];
    let outcome = select_scholars(&mut records, 10, &no_exclusions());

    assert_eq!(outcome.all_eligible.len(), 1);
    assert_eq!(outcome.all_eligible[0].record.name, "이서연");
    assert_eq!(outcome.selected.len(), 1);
}

#[test]
fn total_score_orders_before_any_tie_break() {
    let mut records = vec![
        scored_record("가", 70.0, 0.9, 4, 4.3),
        scored_record("나", 85.0, 0.1, 1, 1.0),
    ];
    let outcome = select_scholars(&mut records, 2, &no_exclusions());

    assert_eq!(outcome.all_eligible[0].record.name, "나");
    assert_eq!(outcome.all_eligible[0].rank, 1);
    assert_eq!(outcome.all_eligible[1].record.name, "가");
    assert_eq!(outcome.all_eligible[1].rank, 2);
}

#[test]
fn completion_rate_breaks_score_ties() {
    let mut records = vec![
        scored_record("가", 80.0, 0.90, 4, 4.5),
        scored_record("나", 80.0, 0.95, 1, 2.0),
    ];
    let outcome = select_scholars(&mut records, 2, &no_exclusions());

    assert_eq!(outcome.all_eligible[0].record.name, "나");
    assert_eq!(outcome.all_eligible[1].record.name, "가");
}

#[test]
fn grade_then_gpa_break_remaining_ties() {
    let mut records = vec![
        scored_record("가", 80.0, 0.9, 2, 4.5),
        scored_record("나", 80.0, 0.9, 3, 2.0),
    ];
    let outcome = select_scholars(&mut records, 2, &no_exclusions());
    assert_eq!(outcome.all_eligible[0].record.name, "나");

    let mut records = vec![
        scored_record("다", 80.0, 0.9, 3, 3.1),
        scored_record("라", 80.0, 0.9, 3, 3.9),
    ];
    let outcome = select_scholars(&mut records, 2, &no_exclusions());
    assert_eq!(outcome.all_eligible[0].record.name, "라");
}

#[test]
fn full_ties_keep_input_order_with_distinct_ranks() {
    let mut records = vec![
        scored_record("가", 80.0, 0.9, 3, 3.5),
        scored_record("나", 80.0, 0.9, 3, 3.5),
    ];
    let outcome = select_scholars(&mut records, 2, &no_exclusions());

    assert_eq!(outcome.all_eligible[0].record.name, "가");
    assert_eq!(outcome.all_eligible[0].rank, 1);
    assert_eq!(outcome.all_eligible[1].record.name, "나");
    assert_eq!(outcome.all_eligible[1].rank, 2);
}

#[test]
fn quota_truncates_selected_but_not_all_eligible() {
    let mut records = vec![
        scored_record("가", 90.0, 0.9, 4, 4.0),
        scored_record("나", 70.0, 0.7, 3, 3.0),
    ];
    let outcome = select_scholars(&mut records, 1, &no_exclusions());

    assert_eq!(outcome.selected.len(), 1);
    assert_eq!(outcome.selected[0].record.name, "가");
    assert_eq!(outcome.all_eligible.len(), 2);
}

#[test]
fn excluded_names_are_annotated_and_removed_from_both_lists() {
    let mut records = vec![
        scored_record("김민준", 90.0, 0.9, 4, 4.0),
        scored_record("이서연", 70.0, 0.7, 3, 3.0),
    ];
    let excluded: BTreeSet<String> = ["김민준".to_string()].into_iter().collect();

    let outcome = select_scholars(&mut records, 10, &excluded);

    assert_eq!(outcome.all_eligible.len(), 1);
    assert_eq!(outcome.all_eligible[0].record.name, "이서연");
    assert_eq!(outcome.selected.len(), 1);
    assert!(records[0].parse_notes[0].contains("중복 선발 제외"));
    assert!(records[1].parse_notes.is_empty());
}

#[test]
fn empty_eligible_pool_yields_two_empty_lists() {
    let mut ineligible = vec![{
        let mut record = scored_record("김민준", 90.0, 0.9, 4, 4.0);
        record.is_eligible = false;
        record
    }];
    let outcome = select_scholars(&mut ineligible, 10, &no_exclusions());
    assert!(outcome.selected.is_empty());
    assert!(outcome.all_eligible.is_empty());

    let outcome = select_scholars(&mut [], 10, &no_exclusions());
    assert!(outcome.selected.is_empty());
    assert!(outcome.all_eligible.is_empty());
}

#[test]
fn selection_is_idempotent_over_identical_input() {
    let build = || {
        vec![
            scored_record("가", 80.0, 0.9, 3, 3.5),
            scored_record("나", 80.0, 0.9, 3, 3.5),
            scored_record("다", 85.0, 0.2, 1, 2.0),
        ]
    };

    let mut first_input = build();
    let mut second_input = build();
    let first = select_scholars(&mut first_input, 2, &no_exclusions());
    let second = select_scholars(&mut second_input, 2, &no_exclusions());

    let first_order: Vec<(usize, String)> = first
        .all_eligible
        .iter()
        .map(|ranked| (ranked.rank, ranked.record.name.clone()))
        .collect();
    let second_order: Vec<(usize, String)> = second
        .all_eligible
        .iter()
        .map(|ranked| (ranked.rank, ranked.record.name.clone()))
        .collect();
    assert_eq!(first_order, second_order);
    assert_eq!(first_order[0].1, "다");
}
