use serde::{Deserialize, Serialize};

/// Display label for anything no document could resolve.
pub const UNRESOLVED_LABEL: &str = "미확인";

/// Graduation-credit requirement assumed when no transcript states one.
pub const DEFAULT_GRADUATION_CREDITS: f64 = 120.0;

/// Program length assumed until the documents say otherwise.
pub const DEFAULT_MAX_GRADE: u8 = 4;

/// Document categories recognized by the keyword classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Eligibility,
    Enrollment,
    Transcript,
    Bonus,
    Unknown,
}

impl DocumentKind {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Eligibility => "eligibility",
            DocumentKind::Enrollment => "enrollment",
            DocumentKind::Transcript => "transcript",
            DocumentKind::Bonus => "bonus",
            DocumentKind::Unknown => "unknown",
        }
    }
}

/// Administrative regions an applicant's address can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Seoul,
    Incheon,
    Gyeonggi,
    Gangwon,
    Chungbuk,
    Chungnam,
    Daejeon,
    Sejong,
    Jeonbuk,
    Jeonnam,
    Gwangju,
    Gyeongbuk,
    Daegu,
    Gyeongnam,
    Ulsan,
    Busan,
    Jeju,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Region::Seoul => "서울",
            Region::Incheon => "인천",
            Region::Gyeonggi => "경기",
            Region::Gangwon => "강원",
            Region::Chungbuk => "충북",
            Region::Chungnam => "충남",
            Region::Daejeon => "대전",
            Region::Sejong => "세종",
            Region::Jeonbuk => "전북",
            Region::Jeonnam => "전남",
            Region::Gwangju => "광주",
            Region::Gyeongbuk => "경북",
            Region::Daegu => "대구",
            Region::Gyeongnam => "경남",
            Region::Ulsan => "울산",
            Region::Busan => "부산",
            Region::Jeju => "제주",
        }
    }

    /// Full administrative spellings that identify each region in address text.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Region::Seoul => &["서울특별시"],
            Region::Incheon => &["인천광역시"],
            Region::Gyeonggi => &["경기도"],
            Region::Gangwon => &["강원특별자치도", "강원도"],
            Region::Chungbuk => &["충청북도"],
            Region::Chungnam => &["충청남도"],
            Region::Daejeon => &["대전광역시"],
            Region::Sejong => &["세종특별자치시", "세종시"],
            Region::Jeonbuk => &["전북특별자치도", "전라북도"],
            Region::Jeonnam => &["전라남도"],
            Region::Gwangju => &["광주광역시"],
            Region::Gyeongbuk => &["경상북도"],
            Region::Daegu => &["대구광역시"],
            Region::Gyeongnam => &["경상남도"],
            Region::Ulsan => &["울산광역시"],
            Region::Busan => &["부산광역시"],
            Region::Jeju => &["제주특별자치도", "제주도"],
        }
    }

    pub fn ordered() -> Vec<Region> {
        vec![
            Region::Seoul,
            Region::Incheon,
            Region::Gyeonggi,
            Region::Gangwon,
            Region::Chungbuk,
            Region::Chungnam,
            Region::Daejeon,
            Region::Sejong,
            Region::Jeonbuk,
            Region::Jeonnam,
            Region::Gwangju,
            Region::Gyeongbuk,
            Region::Daegu,
            Region::Gyeongnam,
            Region::Ulsan,
            Region::Busan,
            Region::Jeju,
        ]
    }
}

/// How confidently a program length was inferred. Lower tiers win when
/// documents disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ProgramLengthTier {
    /// The document states the length of study outright.
    ExplicitYears,
    /// The institution name carries a junior-college marker.
    CollegeName,
    /// The degree title is an associate degree.
    DegreeTitle,
    /// The institution name is a four-year-university spelling.
    UniversityName,
}

/// One applicant's accumulated state across every document in the batch.
///
/// Built incrementally while the archive is walked, then finalized by the
/// scoring engine; afterwards it is treated as read-only input to ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantRecord {
    /// Folder or filename-prefix identity within the archive.
    pub key: String,
    /// Real name once recovered from document text, otherwise the key.
    pub name: String,
    /// Current year of study, 0 while unknown.
    pub grade: u8,
    /// Total years in the applicant's program (2, 3, or 4).
    pub max_grade: u8,
    pub major: String,
    pub completed_credits: f64,
    pub graduation_credits: f64,
    pub gpa: f64,
    pub has_certificate: bool,
    pub volunteer_hours: f64,
    pub is_military: bool,
    /// Set only by an eligibility-confirmation document; gates selection.
    pub is_eligible: bool,
    pub has_enrollment: bool,
    pub has_transcript: bool,
    pub has_bonus_doc: bool,
    pub region: Option<Region>,

    /// Appended-only audit trail; surfaced verbatim to reviewers.
    pub parse_notes: Vec<String>,

    // Filled by the scoring engine, never mutated afterwards.
    pub grade_score: f64,
    pub completion_rate: f64,
    pub completion_score: f64,
    pub bonus_stem: bool,
    pub bonus_cert: bool,
    pub bonus_volunteer: bool,
    pub bonus_score: f64,
    pub total_score: f64,

    /// Masked text per document kind, in first-seen order. Kept so the
    /// final name-resolution pass can scan every document again.
    #[serde(skip)]
    pub(crate) retained_texts: Vec<(DocumentKind, String)>,
    /// Confidence of the current `max_grade` inference; `None` means the
    /// default is still in effect and credit-based corroboration may
    /// adjust it.
    #[serde(skip)]
    pub(crate) program_length_tier: Option<ProgramLengthTier>,
}

impl ApplicantRecord {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            grade: 0,
            max_grade: DEFAULT_MAX_GRADE,
            major: String::new(),
            completed_credits: 0.0,
            graduation_credits: DEFAULT_GRADUATION_CREDITS,
            gpa: 0.0,
            has_certificate: false,
            volunteer_hours: 0.0,
            is_military: false,
            is_eligible: false,
            has_enrollment: false,
            has_transcript: false,
            has_bonus_doc: false,
            region: None,
            parse_notes: Vec::new(),
            grade_score: 0.0,
            completion_rate: 0.0,
            completion_score: 0.0,
            bonus_stem: false,
            bonus_cert: false,
            bonus_volunteer: false,
            bonus_score: 0.0,
            total_score: 0.0,
            retained_texts: Vec::new(),
            program_length_tier: None,
        }
    }

    /// Append masked text under its document kind, concatenating texts of
    /// repeated kinds so later passes see one blob per kind.
    pub(crate) fn retain_text(&mut self, kind: DocumentKind, text: &str) {
        if let Some((_, existing)) = self
            .retained_texts
            .iter_mut()
            .find(|(existing_kind, _)| *existing_kind == kind)
        {
            existing.push('\n');
            existing.push_str(text);
        } else {
            self.retained_texts.push((kind, text.to_string()));
        }
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.parse_notes.push(message.into());
    }
}

/// Flat warning row exposed to the caller for any record carrying notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub applicant_name: String,
    pub note: String,
}
