mod config;
mod rules;

pub use config::ScoringConfig;

pub(crate) use rules::round2;

use super::domain::ApplicantRecord;
use super::processor::AuditTrail;

/// Stateless engine applying the configured point schedule to a record.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute and store every derived score field on the record.
    pub fn score(&self, record: &mut ApplicantRecord, audit: &mut AuditTrail) {
        rules::score_record(record, &self.config, audit);
    }
}
