use super::common::*;
use crate::screening::domain::Region;
use crate::screening::report::summarize;
use crate::screening::selection::RankedRecord;

fn ranked(rank: usize, name: &str, total: f64, rate: f64, grade: u8, gpa: f64) -> RankedRecord {
    RankedRecord {
        rank,
        record: scored_record(name, total, rate, grade, gpa),
    }
}

#[test]
fn empty_selection_produces_no_report() {
    assert_eq!(summarize(&[], 30), None);
}

#[test]
fn statistics_aggregate_the_selected_set() {
    let mut first = ranked(1, "김민준", 90.0, 0.9, 4, 4.0);
    first.record.region = Some(Region::Seoul);
    first.record.bonus_stem = true;
    first.record.bonus_cert = true;

    let mut second = ranked(2, "이서연", 70.0, 0.7, 3, 3.0);
    second.record.region = Some(Region::Seoul);
    second.record.bonus_volunteer = true;

    let third = ranked(3, "박도윤", 50.0, 0.5, 0, 2.0);

    let stats = summarize(&[first, second, third], 30).expect("non-empty selection");

    assert_eq!(stats.total_applicants, 30);
    assert_eq!(stats.selected_count, 3);
    assert_eq!(stats.selection_rate, 10.0);
    assert_eq!(stats.avg_score, 70.0);
    assert_eq!(stats.max_score, 90.0);
    assert_eq!(stats.min_score, 50.0);
    assert_eq!(stats.avg_completion, 70.0);
    assert_eq!(stats.avg_gpa, 3.0);

    assert_eq!(stats.grade_dist.get("4학년"), Some(&1));
    assert_eq!(stats.grade_dist.get("3학년"), Some(&1));
    assert_eq!(stats.grade_dist.get("미확인"), Some(&1));

    assert_eq!(stats.region_dist.get("서울"), Some(&2));
    assert_eq!(stats.region_dist.get("미확인"), Some(&1));

    assert_eq!(stats.stem_count, 1);
    assert_eq!(stats.cert_count, 1);
    assert_eq!(stats.volunteer_count, 1);
}

#[test]
fn zero_total_applicants_reports_a_zero_rate() {
    let only = ranked(1, "김민준", 90.0, 0.9, 4, 4.0);
    let stats = summarize(&[only], 0).expect("non-empty selection");
    assert_eq!(stats.selection_rate, 0.0);
}
