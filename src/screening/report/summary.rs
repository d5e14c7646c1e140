use std::collections::BTreeMap;

use super::super::domain::UNRESOLVED_LABEL;
use super::super::scoring::round2;
use super::super::selection::RankedRecord;
use super::views::SelectionStatistics;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Summarize a selection round for reporting. Returns `None` when
/// nothing was selected, which callers render as "no report".
pub fn summarize(selected: &[RankedRecord], total_applicants: usize) -> Option<SelectionStatistics> {
    if selected.is_empty() {
        return None;
    }

    let count = selected.len();
    let scores: Vec<f64> = selected
        .iter()
        .map(|ranked| ranked.record.total_score)
        .collect();
    let avg_score = round2(scores.iter().sum::<f64>() / count as f64);
    let max_score = round2(scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)));
    let min_score = round2(scores.iter().fold(f64::INFINITY, |a, &b| a.min(b)));

    let avg_completion = round1(
        selected
            .iter()
            .map(|ranked| ranked.record.completion_rate * 100.0)
            .sum::<f64>()
            / count as f64,
    );
    let avg_gpa = round2(
        selected
            .iter()
            .map(|ranked| ranked.record.gpa)
            .sum::<f64>()
            / count as f64,
    );

    let mut grade_dist: BTreeMap<String, usize> = BTreeMap::new();
    let mut region_dist: BTreeMap<String, usize> = BTreeMap::new();
    for ranked in selected {
        let grade_label = if ranked.record.grade > 0 {
            format!("{}학년", ranked.record.grade)
        } else {
            UNRESOLVED_LABEL.to_string()
        };
        *grade_dist.entry(grade_label).or_insert(0) += 1;

        let region_label = ranked
            .record
            .region
            .map(|region| region.label().to_string())
            .unwrap_or_else(|| UNRESOLVED_LABEL.to_string());
        *region_dist.entry(region_label).or_insert(0) += 1;
    }

    let stem_count = selected
        .iter()
        .filter(|ranked| ranked.record.bonus_stem)
        .count();
    let cert_count = selected
        .iter()
        .filter(|ranked| ranked.record.bonus_cert)
        .count();
    let volunteer_count = selected
        .iter()
        .filter(|ranked| ranked.record.bonus_volunteer)
        .count();

    let selection_rate = if total_applicants > 0 {
        round1(count as f64 / total_applicants as f64 * 100.0)
    } else {
        0.0
    };

    Some(SelectionStatistics {
        total_applicants,
        selected_count: count,
        selection_rate,
        avg_score,
        max_score,
        min_score,
        avg_completion,
        avg_gpa,
        grade_dist,
        region_dist,
        stem_count,
        cert_count,
        volunteer_count,
    })
}
