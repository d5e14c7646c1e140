//! Keyword-precedence document classifier.
//!
//! Submitted paperwork arrives as inconsistently formatted PDF text, so
//! classification relies on the fixed phrases each form carries rather
//! than layout. The first keyword set that matches decides the kind.

use super::domain::DocumentKind;

/// Phrases naming the self-reliance eligibility confirmation form.
pub(crate) const ELIGIBILITY_KEYWORDS: &[&str] = &[
    "자립지원 대상자 확인서",
    "자립지원대상자확인서",
    "자립준비청년 확인서",
];

pub(crate) const ENROLLMENT_KEYWORDS: &[&str] = &["재학증명서", "재학 증명서"];

pub(crate) const TRANSCRIPT_KEYWORDS: &[&str] = &["성적증명서", "성적표", "학업성적", "성적 증명서"];

/// National certifications and standardized language tests.
pub(crate) const CERTIFICATE_KEYWORDS: &[&str] = &[
    "국가기술자격",
    "국가전문자격",
    "기사",
    "산업기사",
    "기능사",
    "기능장",
    "기술사",
    "TOEIC",
    "TOEFL",
    "IELTS",
    "OPIc",
    "JLPT",
    "HSK",
    "토익",
    "토플",
    "오픽",
    "텝스",
    "TEPS",
    "자격증",
    "면허",
    "어학성적",
];

pub(crate) const VOLUNTEER_KEYWORDS: &[&str] =
    &["봉사", "자원봉사", "사회봉사", "봉사활동", "봉사시간"];

pub(crate) const MILITARY_KEYWORDS: &[&str] = &[
    "병역",
    "현역",
    "예비역",
    "만기전역",
    "군필",
    "복무완료",
    "전역",
    "군복무",
    "병역이행",
];

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Assign a document kind by first-match-wins keyword precedence:
/// eligibility, then enrollment, then transcript, then any bonus
/// evidence (certificate, volunteer, or military vocabulary).
pub fn classify(text: &str) -> DocumentKind {
    if contains_any(text, ELIGIBILITY_KEYWORDS) {
        return DocumentKind::Eligibility;
    }
    if contains_any(text, ENROLLMENT_KEYWORDS) {
        return DocumentKind::Enrollment;
    }
    if contains_any(text, TRANSCRIPT_KEYWORDS) {
        return DocumentKind::Transcript;
    }
    if contains_any(text, CERTIFICATE_KEYWORDS)
        || contains_any(text, VOLUNTEER_KEYWORDS)
        || contains_any(text, MILITARY_KEYWORDS)
    {
        return DocumentKind::Bonus;
    }
    DocumentKind::Unknown
}
