use crate::screening::domain::ApplicantRecord;
use crate::screening::processor::AuditTrail;
use crate::screening::scoring::{ScoringConfig, ScoringEngine};

pub(super) const ELIGIBILITY_TEXT: &str = "자립지원 대상자 확인서\n성명: 김민준\n위 사람은 자립준비청년임을 확인함";

pub(super) const ENROLLMENT_TEXT: &str =
    "재학증명서\n성명: 김민준\n학과: 컴퓨터공학과\n3학년 재학 중임을 증명함\n한국대학교 총장";

pub(super) const TRANSCRIPT_TEXT: &str =
    "성적증명서\n성명: 김민준\n취득 학점: 98.5\n졸업 기준 학점: 130\n전체 평점: 4.12";

pub(super) const BONUS_TEXT: &str =
    "가산점 증빙\nTOEIC 905점 취득 확인\n봉사 시간: 72\n만기전역 (육군 병장)";

pub(super) fn blank_record(key: &str) -> ApplicantRecord {
    ApplicantRecord::new(key)
}

pub(super) fn eligible_record(name: &str) -> ApplicantRecord {
    let mut record = ApplicantRecord::new(name);
    record.is_eligible = true;
    record
}

/// Eligible record with score fields pre-set, for selection tests that
/// exercise ordering rather than the scoring engine.
pub(super) fn scored_record(
    name: &str,
    total_score: f64,
    completion_rate: f64,
    grade: u8,
    gpa: f64,
) -> ApplicantRecord {
    let mut record = eligible_record(name);
    record.total_score = total_score;
    record.completion_rate = completion_rate;
    record.grade = grade;
    record.gpa = gpa;
    record
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn audit() -> AuditTrail {
    AuditTrail::default()
}
