use tracing::debug;

use super::super::domain::ApplicantRecord;
use super::super::processor::AuditTrail;
use super::config::ScoringConfig;

/// Majors that qualify for the STEM/defense bonus, matched as
/// substrings of the extracted major name.
pub(crate) const STEM_KEYWORDS: &[&str] = &[
    "공학",
    "이학",
    "전자",
    "기계",
    "컴퓨터",
    "소프트웨어",
    "정보",
    "국방",
    "방산",
    "항공",
    "우주",
    "화학",
    "물리",
    "수학",
    "전기",
    "통신",
    "로봇",
    "자동화",
    "반도체",
    "에너지",
    "재료",
    "토목",
    "건축",
    "환경",
    "생명",
    "바이오",
    "인공지능",
    "AI",
    "데이터",
    "사이버",
    "보안",
    "국방공학",
    "방위산업",
    "드론",
    "무기체계",
    "레이더",
    "탄약",
];

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fill in every derived score field. Pure apart from the audit entry:
/// the same record always produces the same scores.
pub(crate) fn score_record(
    record: &mut ApplicantRecord,
    config: &ScoringConfig,
    audit: &mut AuditTrail,
) {
    // Grade component, normalized by program length so a final-year
    // student scores the maximum whether the program runs 2, 3, or 4
    // years.
    record.grade_score = if record.grade > 0 && record.max_grade > 0 {
        round2(f64::from(record.grade) / f64::from(record.max_grade) * config.grade_weight)
    } else {
        0.0
    };

    // Completion component: share of the graduation requirement already
    // earned, capped at 100%.
    if record.graduation_credits > 0.0 {
        let rate = (record.completed_credits / record.graduation_credits).min(1.0);
        record.completion_rate = rate;
        record.completion_score = round2(rate * config.completion_weight);
    } else {
        record.completion_rate = 0.0;
        record.completion_score = 0.0;
    }

    // Bonus components, summed then capped.
    record.bonus_stem = STEM_KEYWORDS
        .iter()
        .any(|keyword| record.major.contains(keyword));
    record.bonus_cert = record.has_certificate;
    record.bonus_volunteer = record.volunteer_hours >= config.volunteer_hours_threshold;

    let mut bonus = 0.0;
    if record.bonus_stem {
        bonus += config.stem_bonus;
    }
    if record.bonus_cert {
        bonus += config.certificate_bonus;
    }
    if record.bonus_volunteer {
        bonus += config.volunteer_bonus;
    }
    record.bonus_score = bonus.min(config.bonus_ceiling);

    record.total_score = round2(record.grade_score + record.completion_score + record.bonus_score);

    audit.record(format!(
        "score {}: grade({}/{})={:.2} completion({:.1}%)={:.2} bonus={:.0} total={:.2}",
        record.name,
        record.grade,
        record.max_grade,
        record.grade_score,
        record.completion_rate * 100.0,
        record.completion_score,
        record.bonus_score,
        record.total_score
    ));
    debug!(
        name = %record.name,
        total = record.total_score,
        "applicant scored"
    );
}
