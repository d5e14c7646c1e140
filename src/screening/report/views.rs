use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate statistics over one selection round, consumed by reporting
/// front ends. Distribution maps are BTreeMaps so serialized output is
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionStatistics {
    pub total_applicants: usize,
    pub selected_count: usize,
    /// Selected share of all applicants, percent rounded to one decimal.
    pub selection_rate: f64,
    pub avg_score: f64,
    pub max_score: f64,
    pub min_score: f64,
    /// Average completion rate of the selected set, in percent.
    pub avg_completion: f64,
    pub avg_gpa: f64,
    /// Count per displayed grade label (e.g. "4학년", "미확인").
    pub grade_dist: BTreeMap<String, usize>,
    /// Count per region label; applicants with no mapped region fall
    /// under "미확인".
    pub region_dist: BTreeMap<String, usize>,
    pub stem_count: usize,
    pub cert_count: usize,
    pub volunteer_count: usize,
}
