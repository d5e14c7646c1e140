use serde::{Deserialize, Serialize};

/// Point schedule for the selection rubric.
///
/// The foundation revises these weights between award cycles, so every
/// value is configuration rather than a constant. Defaults reflect the
/// current rubric: grade and completion are worth 50 points each, with
/// up to 10 bonus points on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points a final-year student earns from the grade component.
    pub grade_weight: f64,
    /// Points a fully-completed program earns from the completion component.
    pub completion_weight: f64,
    /// Bonus for a STEM or defense-industry major.
    pub stem_bonus: f64,
    /// Bonus for a national certificate or language-test score.
    pub certificate_bonus: f64,
    /// Bonus for volunteer service at or above the hour threshold.
    pub volunteer_bonus: f64,
    /// Volunteer hours required before the volunteer bonus applies.
    pub volunteer_hours_threshold: f64,
    /// Hard cap on the summed bonus, below the sum of all categories.
    pub bonus_ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            grade_weight: 50.0,
            completion_weight: 50.0,
            stem_bonus: 5.0,
            certificate_bonus: 3.0,
            volunteer_bonus: 2.0,
            volunteer_hours_threshold: 50.0,
            bonus_ceiling: 10.0,
        }
    }
}
