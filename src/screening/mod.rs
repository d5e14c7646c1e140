//! Applicant-document screening, scoring, and ranked selection.
//!
//! The pipeline turns an archive of per-applicant PDFs into scored
//! `ApplicantRecord`s: text extraction behind a trait seam, identifier
//! masking, keyword classification, ordered-pattern field extraction,
//! order-independent per-applicant merging, and a deterministic scoring
//! pass. Selection and reporting operate on the finished records.

pub(crate) mod aggregate;
pub(crate) mod classify;
pub mod domain;
pub(crate) mod fields;
pub(crate) mod intake;
pub mod masking;
pub mod pdf;
pub mod processor;
pub mod report;
pub mod scoring;
pub mod selection;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use domain::{
    ApplicantRecord, DocumentKind, ParseWarning, Region, DEFAULT_GRADUATION_CREDITS,
    DEFAULT_MAX_GRADE, UNRESOLVED_LABEL,
};
pub use masking::mask_sensitive;
pub use pdf::{PdfTextExtractor, TextExtractor};
pub use processor::{AuditTrail, ProcessError, ProcessOutcome, ScreeningPipeline};
pub use report::{summarize, SelectionStatistics};
pub use scoring::{ScoringConfig, ScoringEngine};
pub use selection::{select_scholars, RankedRecord, SelectionOutcome};
