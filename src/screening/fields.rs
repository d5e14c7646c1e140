//! Tolerant field extractors over masked document text.
//!
//! Every extractor walks an ordered list of pattern alternatives, most
//! specific first, and returns the first structurally valid match.
//! A miss is not an error: the caller leaves the field at its default.
//! Values outside each field's plausible range are rejected so stray
//! numbers (years, page counts) cannot leak into a record.

use regex::Regex;
use std::sync::OnceLock;

use super::classify::{contains_any, CERTIFICATE_KEYWORDS, MILITARY_KEYWORDS};
use super::domain::{ProgramLengthTier, Region};

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("extraction pattern compiles"))
        .collect()
}

fn name_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"성\s*명\s*[：:]\s*([가-힣]{2,5})",
            r"이\s*름\s*[：:]\s*([가-힣]{2,5})",
            r"신청인\s*[：:]\s*([가-힣]{2,5})",
            r"학생명\s*[：:]\s*([가-힣]{2,5})",
            r"학\s*생\s*[：:]\s*([가-힣]{2,5})",
            r"(?m)^([가-힣]{2,5})\s+학생",
        ])
    })
}

/// Korean name following a labeled prefix, 2 to 5 hangul syllables.
pub(crate) fn extract_name(text: &str) -> Option<String> {
    for pattern in name_patterns() {
        if let Some(captures) = pattern.captures(text) {
            return Some(captures[1].trim().to_string());
        }
    }
    None
}

fn grade_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"([1-4])\s*학년",
            r"재학\s*학년\s*[：:\s]*([1-4])",
            r"학\s*년\s*[：:\s]*([1-4])",
            r"Grade\s*[：:\s]*([1-4])",
        ])
    })
}

/// Current year of study in 1..=4.
pub(crate) fn extract_grade(text: &str) -> Option<u8> {
    for pattern in grade_patterns() {
        if let Some(captures) = pattern.captures(text) {
            if let Ok(grade) = captures[1].parse::<u8>() {
                if (1..=4).contains(&grade) {
                    return Some(grade);
                }
            }
        }
    }
    None
}

fn major_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"전\s*공\s*[：:\s]+([^\n\r\t]{2,30})",
            r"학\s*과\s*[：:\s]+([^\n\r\t]{2,30})",
            r"학\s*부\s*[：:\s]+([^\n\r\t]{2,30})",
            r"소\s*속\s*[：:\s]+([^\n\r\t]{2,30})",
            r"Department\s*[：:\s]+([^\n\r\t]{2,40})",
        ])
    })
}

/// Department or major name, whitespace-collapsed, 2 to 40 characters.
pub(crate) fn extract_major(text: &str) -> Option<String> {
    for pattern in major_patterns() {
        if let Some(captures) = pattern.captures(text) {
            let collapsed = captures[1].split_whitespace().collect::<Vec<_>>().join(" ");
            let length = collapsed.chars().count();
            if (2..=40).contains(&length) {
                return Some(collapsed);
            }
        }
    }
    None
}

fn graduation_credit_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"졸업\s*기준\s*학점\s*[：:\s]*(\d+\.?\d*)",
            r"졸업\s*이수\s*학점\s*[：:\s]*(\d+\.?\d*)",
            r"총\s*졸업\s*학점\s*[：:\s]*(\d+\.?\d*)",
            r"졸업\s*학점\s*[：:\s]*(\d+\.?\d*)",
        ])
    })
}

fn completed_credit_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"취득\s*학점\s*[：:\s]*(\d+\.?\d*)",
            r"이수\s*학점\s*[：:\s]*(\d+\.?\d*)",
            r"현재\s*이수\s*[：:\s]*(\d+\.?\d*)",
            r"누적\s*학점\s*[：:\s]*(\d+\.?\d*)",
            r"합\s*계\s*[：:\s]*(\d+\.?\d*)\s*학점",
            r"취득\s*[：:\s]*(\d+\.?\d*)\s*학점",
        ])
    })
}

fn first_number(patterns: &[Regex], text: &str) -> Option<f64> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(text) {
            if let Ok(value) = captures[1].parse::<f64>() {
                return Some(value);
            }
        }
    }
    None
}

/// `(completed, graduation-requirement)` credits; either side may be
/// absent independently of the other.
pub(crate) fn extract_credits(text: &str) -> (Option<f64>, Option<f64>) {
    let graduation = first_number(graduation_credit_patterns(), text);
    let completed = first_number(completed_credit_patterns(), text);
    (completed, graduation)
}

fn gpa_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"전체\s*평점\s*[：:\s]*(\d+\.\d+)",
            r"누적\s*평점\s*[：:\s]*(\d+\.\d+)",
            r"평\s*점\s*[：:\s]*(\d+\.\d+)",
            r"평균\s*[：:\s]*(\d+\.\d+)",
            r"(?i)GPA\s*[：:\s]*(\d+\.\d+)",
        ])
    })
}

/// Cumulative grade-point average, only accepted inside the academic
/// 0.0..=4.5 scale.
pub(crate) fn extract_gpa(text: &str) -> Option<f64> {
    for pattern in gpa_patterns() {
        if let Some(captures) = pattern.captures(text) {
            if let Ok(value) = captures[1].parse::<f64>() {
                if (0.0..=4.5).contains(&value) {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Certificate or language-test evidence anywhere in the text.
pub(crate) fn has_certificate_evidence(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CERTIFICATE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

fn volunteer_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"봉사\s*시간\s*[：:\s]*(\d+\.?\d*)",
            r"총\s*봉사\s*[：:\s]*(\d+\.?\d*)\s*시간",
            r"누적\s*봉사\s*[：:\s]*(\d+\.?\d*)",
            r"활동\s*시간\s*[：:\s]*(\d+\.?\d*)",
            r"(\d+\.?\d*)\s*시간",
        ])
    })
}

/// Cumulative volunteer hours. When a pattern matches several numbers
/// the maximum is taken as the running total; values at or above
/// 10,000 hours are treated as stray figures (years, serials) and the
/// next pattern is tried instead.
pub(crate) fn extract_volunteer_hours(text: &str) -> f64 {
    for pattern in volunteer_patterns() {
        let best = pattern
            .captures_iter(text)
            .filter_map(|captures| captures[1].parse::<f64>().ok())
            .fold(f64::NEG_INFINITY, f64::max);
        if best.is_finite() && best > 0.0 && best < 10_000.0 {
            return best;
        }
    }
    0.0
}

/// Completed military service, by vocabulary match.
pub(crate) fn has_military_evidence(text: &str) -> bool {
    contains_any(text, MILITARY_KEYWORDS)
}

fn explicit_program_length_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"수업\s*연한\s*[：:\s]*([2-4])\s*년",
            r"([2-4])\s*년\s*제",
            r"학\s*제\s*[：:\s]*([2-4])\s*년",
        ])
    })
}

fn three_year_college_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"3\s*년\s*제|수업연한\s*[：:\s]*3").expect("extraction pattern compiles")
    })
}

fn university_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[가-힣]+대학교").expect("extraction pattern compiles"))
}

/// "전문대학" names a junior college, but "전문대학교" is a four-year
/// institution that happens to share the root; only the former counts.
fn mentions_junior_college(text: &str) -> bool {
    text.match_indices("전문대학").any(|(index, matched)| {
        let after = index + matched.len();
        !text[after..].starts_with('교')
    })
}

/// Program length (2/3/4 years) with the confidence tier of the signal
/// that produced it, most convincing evidence first:
/// an explicit length-of-study statement, a junior-college institution
/// name, an associate-degree title, or a four-year-university spelling.
pub(crate) fn extract_program_length(text: &str) -> Option<(u8, ProgramLengthTier)> {
    for pattern in explicit_program_length_patterns() {
        if let Some(captures) = pattern.captures(text) {
            if let Ok(years) = captures[1].parse::<u8>() {
                return Some((years, ProgramLengthTier::ExplicitYears));
            }
        }
    }

    if mentions_junior_college(text) {
        let years = if three_year_college_pattern().is_match(text) {
            3
        } else {
            2
        };
        return Some((years, ProgramLengthTier::CollegeName));
    }

    if text.contains("전문학사") {
        return Some((2, ProgramLengthTier::DegreeTitle));
    }

    if university_name_pattern().is_match(text) {
        return Some((4, ProgramLengthTier::UniversityName));
    }

    None
}

fn region_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        compile(&[
            r"(?:주소|거주지|현주소|주거지)\s*[：:]\s*([^\n\r]{4,80})",
            r"([가-힣]+(특별시|광역시|특별자치시|특별자치도|도)\b[^\n\r]{0,30})",
        ])
    })
}

/// Residence region, from a labeled address line or a bare
/// administrative-suffix phrase, alias-mapped onto the closed region set.
pub(crate) fn extract_region(text: &str) -> Option<Region> {
    for pattern in region_patterns() {
        if let Some(captures) = pattern.captures(text) {
            let address = captures[1].trim();
            for region in Region::ordered() {
                if region.aliases().iter().any(|alias| address.contains(alias)) {
                    return Some(region);
                }
            }
        }
    }
    None
}
