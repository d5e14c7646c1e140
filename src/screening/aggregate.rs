//! Per-applicant merge policy.
//!
//! Documents arrive in whatever order the archive stores them, so every
//! rule here is order-independent: fill-if-empty for most fields,
//! OR/max accumulation for bonus evidence, and confidence-tier
//! precedence for the program-length inference. A populated field is
//! never overwritten by a lower-priority document type.

use super::classify::{contains_any, ELIGIBILITY_KEYWORDS};
use super::domain::{ApplicantRecord, DocumentKind, DEFAULT_MAX_GRADE};
use super::fields;

/// Fold one classified document's fields into the applicant record.
pub(crate) fn apply_document(record: &mut ApplicantRecord, kind: DocumentKind, text: &str) {
    // Residence and program length can surface on any form, so both are
    // attempted regardless of kind.
    if record.region.is_none() {
        record.region = fields::extract_region(text);
    }
    apply_program_length(record, text);

    match kind {
        DocumentKind::Eligibility => {
            record.is_eligible = true;
        }
        DocumentKind::Enrollment => {
            record.has_enrollment = true;
            if record.grade == 0 {
                if let Some(grade) = fields::extract_grade(text) {
                    record.grade = grade;
                }
            }
            if record.major.is_empty() {
                if let Some(major) = fields::extract_major(text) {
                    record.major = major;
                }
            }
        }
        DocumentKind::Transcript => {
            record.has_transcript = true;
            let (completed, graduation) = fields::extract_credits(text);
            if let Some(completed) = completed {
                record.completed_credits = completed;
            }
            if let Some(graduation) = graduation {
                record.graduation_credits = graduation;
                corroborate_program_length(record, graduation);
            }
            if let Some(gpa) = fields::extract_gpa(text) {
                record.gpa = gpa;
            }
            // Fall back to the transcript for enrollment fields when no
            // enrollment certificate supplied them.
            if record.grade == 0 {
                if let Some(grade) = fields::extract_grade(text) {
                    record.grade = grade;
                }
            }
            if record.major.is_empty() {
                if let Some(major) = fields::extract_major(text) {
                    record.major = major;
                }
            }
        }
        DocumentKind::Bonus => {
            record.has_bonus_doc = true;
            apply_bonus_evidence(record, text);
        }
        DocumentKind::Unknown => {
            // Unrecognized paperwork still gets the full extractor
            // sweep, filling only still-default fields.
            if contains_any(text, ELIGIBILITY_KEYWORDS) {
                record.is_eligible = true;
            }
            if record.grade == 0 {
                if let Some(grade) = fields::extract_grade(text) {
                    record.grade = grade;
                }
            }
            if record.major.is_empty() {
                if let Some(major) = fields::extract_major(text) {
                    record.major = major;
                }
            }
            let (completed, graduation) = fields::extract_credits(text);
            if let Some(completed) = completed {
                if record.completed_credits == 0.0 {
                    record.completed_credits = completed;
                }
            }
            if let Some(graduation) = graduation {
                record.graduation_credits = graduation;
                corroborate_program_length(record, graduation);
            }
            if let Some(gpa) = fields::extract_gpa(text) {
                if record.gpa == 0.0 {
                    record.gpa = gpa;
                }
            }
            apply_bonus_evidence(record, text);
        }
    }
}

fn apply_bonus_evidence(record: &mut ApplicantRecord, text: &str) {
    if fields::has_certificate_evidence(text) {
        record.has_certificate = true;
    }
    let hours = fields::extract_volunteer_hours(text);
    if hours > 0.0 {
        record.volunteer_hours = record.volunteer_hours.max(hours);
    }
    if fields::has_military_evidence(text) {
        record.is_military = true;
    }
}

/// Adopt a program-length signal only when it is more convincing than
/// whatever produced the current value, so document order cannot change
/// the outcome.
fn apply_program_length(record: &mut ApplicantRecord, text: &str) {
    if let Some((years, tier)) = fields::extract_program_length(text) {
        let more_convincing = match record.program_length_tier {
            Some(current) => tier < current,
            None => true,
        };
        if more_convincing {
            record.max_grade = years;
            record.program_length_tier = Some(tier);
        }
    }
}

/// Graduation-credit thresholds identify short programs when no wording
/// in any document did: below ~90 credits implies a 2-year program,
/// below ~115 a 3-year one. Never applied over an explicit signal.
fn corroborate_program_length(record: &mut ApplicantRecord, graduation_credits: f64) {
    if record.program_length_tier.is_some() || record.max_grade != DEFAULT_MAX_GRADE {
        return;
    }
    if graduation_credits < 90.0 {
        record.max_grade = 2;
    } else if graduation_credits < 115.0 {
        record.max_grade = 3;
    }
}

/// After every document is in, scan the retained texts in first-seen
/// order and adopt the first name any of them yields, replacing the
/// archive-derived key placeholder.
pub(crate) fn resolve_name(record: &mut ApplicantRecord) {
    for (_, text) in &record.retained_texts {
        if let Some(name) = fields::extract_name(text) {
            record.name = name;
            return;
        }
    }
}

/// Missing eligibility confirmation disqualifies but never deletes: the
/// record stays in diagnostic output with the reason up front.
pub(crate) fn annotate_if_ineligible(record: &mut ApplicantRecord) {
    if !record.is_eligible {
        record
            .parse_notes
            .insert(0, "⛔ 자립지원 대상자 확인서 미확인 — 선발 대상 제외".to_string());
    }
}
