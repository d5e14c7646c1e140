//! Eligibility filtering, tie-break ordering, and rank assignment.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::ApplicantRecord;

/// An applicant with its 1-based position in the sorted eligible set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRecord {
    pub rank: usize,
    pub record: ApplicantRecord,
}

/// Output of one selection round: the quota-limited shortlist and the
/// complete ranked eligible set behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionOutcome {
    pub selected: Vec<RankedRecord>,
    pub all_eligible: Vec<RankedRecord>,
}

/// Rank eligible applicants and take the top `quota`.
///
/// Applicants named in `excluded_names` (awardees of earlier rounds)
/// are annotated in place and left out of both output lists, as are all
/// ineligible records. Ordering is descending on
/// `(total_score, completion_rate, grade, gpa)`; records tying on the
/// whole tuple keep their input order and still receive distinct
/// consecutive ranks.
pub fn select_scholars(
    records: &mut [ApplicantRecord],
    quota: usize,
    excluded_names: &BTreeSet<String>,
) -> SelectionOutcome {
    for record in records.iter_mut() {
        if excluded_names.contains(&record.name) {
            record
                .parse_notes
                .insert(0, "⛔ 이전 선발자 — 중복 선발 제외".to_string());
        }
    }

    let mut eligible: Vec<ApplicantRecord> = records
        .iter()
        .filter(|record| record.is_eligible && !excluded_names.contains(&record.name))
        .cloned()
        .collect();

    if eligible.is_empty() {
        return SelectionOutcome::default();
    }

    eligible.sort_by(|a, b| {
        b.total_score
            .total_cmp(&a.total_score)
            .then(b.completion_rate.total_cmp(&a.completion_rate))
            .then(b.grade.cmp(&a.grade))
            .then(b.gpa.total_cmp(&a.gpa))
    });

    let all_eligible: Vec<RankedRecord> = eligible
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedRecord {
            rank: index + 1,
            record,
        })
        .collect();
    let selected: Vec<RankedRecord> = all_eligible.iter().take(quota).cloned().collect();

    info!(
        eligible = all_eligible.len(),
        selected = selected.len(),
        "selection complete"
    );

    SelectionOutcome {
        selected,
        all_eligible,
    }
}
