use std::collections::HashMap;
use std::io::{Cursor, Read};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::aggregate;
use super::classify;
use super::domain::{ApplicantRecord, ParseWarning};
use super::intake;
use super::masking::mask_sensitive;
use super::pdf::{PdfTextExtractor, TextExtractor};
use super::scoring::{ScoringConfig, ScoringEngine};

/// Per-invocation processing trail. Owned by one pipeline run and
/// returned with its results, so concurrent runs cannot interleave and
/// a reviewer can replay exactly what one batch did.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AuditTrail {
    entries: Vec<String>,
}

impl AuditTrail {
    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Fatal failures for a whole batch. Per-file problems never surface
/// here; they become parse notes on the affected applicant instead.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("archive is not readable: {0}")]
    InvalidArchive(#[from] zip::result::ZipError),
    #[error("archive decompresses to {found} bytes, above the {limit} byte ceiling")]
    ArchiveTooLarge { limit: u64, found: u64 },
}

/// Everything one batch produced: every discovered applicant (eligible
/// or not), the flat warning list, and the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub records: Vec<ApplicantRecord>,
    pub warnings: Vec<ParseWarning>,
    pub audit: AuditTrail,
}

/// Walks an uploaded archive, parses each applicant's documents, and
/// scores the merged records. One instance is reusable across batches;
/// it holds no per-batch state.
pub struct ScreeningPipeline<X: TextExtractor = PdfTextExtractor> {
    extractor: X,
    engine: ScoringEngine,
    max_uncompressed_bytes: Option<u64>,
}

impl ScreeningPipeline<PdfTextExtractor> {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_extractor(PdfTextExtractor, config)
    }
}

impl<X: TextExtractor> ScreeningPipeline<X> {
    /// Build a pipeline around a custom text-extraction seam.
    pub fn with_extractor(extractor: X, config: ScoringConfig) -> Self {
        Self {
            extractor,
            engine: ScoringEngine::new(config),
            max_uncompressed_bytes: None,
        }
    }

    /// Enforce a decompressed-size ceiling for callers that want the
    /// core, rather than the transport, to reject oversized batches.
    pub fn with_archive_limit(mut self, max_uncompressed_bytes: u64) -> Self {
        self.max_uncompressed_bytes = Some(max_uncompressed_bytes);
        self
    }

    /// Process one archive of applicant documents end to end.
    ///
    /// Returns every applicant key discovered, including ineligible and
    /// empty records; exclusion happens at selection time so diagnostic
    /// output stays complete.
    pub fn process_archive(&self, archive_bytes: &[u8]) -> Result<ProcessOutcome, ProcessError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes))?;
        let mut audit = AuditTrail::default();
        audit.record(format!("archive opened: {} entries", archive.len()));
        info!(entries = archive.len(), "archive opened");

        self.enforce_size_ceiling(&mut archive)?;

        // Insertion-ordered accumulation: the first entry seen for a key
        // creates its record, and output order follows the archive.
        let mut order: Vec<String> = Vec::new();
        let mut records: HashMap<String, ApplicantRecord> = HashMap::new();

        for index in 0..archive.len() {
            let mut file = match archive.by_index(index) {
                Ok(file) => file,
                Err(err) => {
                    warn!(index, error = %err, "unreadable archive entry skipped");
                    audit.record(format!("entry #{index} unreadable: {err}"));
                    continue;
                }
            };
            let entry_path = file.name().to_string();
            if !intake::is_candidate_document(&entry_path) {
                continue;
            }

            let key = intake::applicant_key_for(&entry_path);
            let record = records.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                ApplicantRecord::new(key)
            });

            let mut document_bytes = Vec::new();
            if let Err(err) = file.read_to_end(&mut document_bytes) {
                warn!(entry = %entry_path, error = %err, "archive entry read failed");
                record.note(format!("❌ '{entry_path}': 읽기 오류 — {err}"));
                continue;
            }

            let text = mask_sensitive(&self.extractor.extract(&document_bytes));
            if text.trim().is_empty() {
                warn!(entry = %entry_path, "no extractable text");
                record.note(format!("⚠ '{entry_path}': 텍스트 추출 불가 (스캔 이미지로 추정)"));
                continue;
            }

            let kind = classify::classify(&text);
            record.retain_text(kind, &text);
            aggregate::apply_document(record, kind, &text);
            audit.record(format!("parsed '{entry_path}' as {}", kind.label()));
        }

        let mut results = Vec::with_capacity(order.len());
        for key in order {
            let mut record = records.remove(&key).unwrap_or_else(|| {
                // Key bookkeeping and map insertion happen together, so
                // this branch is unreachable; an empty record keeps the
                // batch alive regardless.
                ApplicantRecord::new(key)
            });
            aggregate::resolve_name(&mut record);
            aggregate::annotate_if_ineligible(&mut record);
            self.engine.score(&mut record, &mut audit);
            results.push(record);
        }

        let eligible = results.iter().filter(|record| record.is_eligible).count();
        audit.record(format!(
            "batch complete: {} applicants, {} eligible",
            results.len(),
            eligible
        ));
        info!(applicants = results.len(), eligible, "batch complete");

        let warnings = results
            .iter()
            .filter(|record| !record.parse_notes.is_empty())
            .map(|record| ParseWarning {
                applicant_name: record.name.clone(),
                note: record.parse_notes.join(" | "),
            })
            .collect();

        Ok(ProcessOutcome {
            records: results,
            warnings,
            audit,
        })
    }

    fn enforce_size_ceiling(
        &self,
        archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    ) -> Result<(), ProcessError> {
        let Some(limit) = self.max_uncompressed_bytes else {
            return Ok(());
        };
        let mut total: u64 = 0;
        for index in 0..archive.len() {
            if let Ok(file) = archive.by_index_raw(index) {
                total = total.saturating_add(file.size());
            }
        }
        if total > limit {
            return Err(ProcessError::ArchiveTooLarge { limit, found: total });
        }
        Ok(())
    }
}
