//! Personal-identifier masking applied to every extracted text block
//! before anything downstream stores or logs it. Irreversible.

use regex::Regex;
use std::sync::OnceLock;

struct MaskRules {
    resident_id_split: Regex,
    resident_id_plain: Regex,
    mobile_phone: Regex,
    bank_account: Regex,
}

fn rules() -> &'static MaskRules {
    static RULES: OnceLock<MaskRules> = OnceLock::new();
    RULES.get_or_init(|| MaskRules {
        resident_id_split: Regex::new(r"(\d{6})\s*[-–]\s*(\d{7})").expect("mask pattern compiles"),
        resident_id_plain: Regex::new(r"(\d{6})(\d{7})").expect("mask pattern compiles"),
        mobile_phone: Regex::new(r"(01\d)\s*[-–]\s*(\d{3,4})\s*[-–]\s*(\d{4})")
            .expect("mask pattern compiles"),
        bank_account: Regex::new(r"(\d{3,4})\s*[-–]\s*(\d{4,6})\s*[-–]\s*(\d{4,7})")
            .expect("mask pattern compiles"),
    })
}

/// Mask resident-registration numbers, mobile numbers, and account numbers,
/// keeping only the leading group readable.
pub fn mask_sensitive(text: &str) -> String {
    let rules = rules();
    let masked = rules.resident_id_split.replace_all(text, "${1}-*******");
    let masked = rules.resident_id_plain.replace_all(&masked, "${1}*******");
    let masked = rules.mobile_phone.replace_all(&masked, "${1}-****-${3}");
    let masked = rules.bank_account.replace_all(&masked, "${1}-******-${3}");
    masked.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_split_resident_registration_number() {
        let masked = mask_sensitive("주민등록번호: 991231-1234567");
        assert_eq!(masked, "주민등록번호: 991231-*******");
        assert!(!masked.contains("1234567"));
    }

    #[test]
    fn masks_unsplit_thirteen_digit_number() {
        let masked = mask_sensitive("9912311234567");
        assert_eq!(masked, "991231*******");
    }

    #[test]
    fn masks_mobile_phone_middle_group() {
        assert_eq!(mask_sensitive("010-1234-5678"), "010-****-5678");
        assert_eq!(mask_sensitive("010 - 123 - 5678"), "010-****-5678");
    }

    #[test]
    fn masks_bank_account_middle_group() {
        assert_eq!(mask_sensitive("계좌 110-456789-01234"), "계좌 110-******-01234");
    }

    #[test]
    fn leaves_ordinary_numbers_alone() {
        assert_eq!(mask_sensitive("이수학점: 98.5"), "이수학점: 98.5");
    }
}
