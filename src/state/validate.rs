/// Field checks run before a label is saved
///
/// Every rule is evaluated, so the user sees all problems at once.
use once_cell::sync::Lazy;
use regex::Regex;

use super::data::LabelDraft;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d+\-\s]+$").expect("phone pattern is valid"));

/// Empty or YYYY-MM-DD (shape only, the calendar is not checked)
pub fn is_valid_date(value: &str) -> bool {
    value.is_empty() || DATE_PATTERN.is_match(value)
}

/// Empty or only digits, '+', '-' and whitespace
pub fn is_valid_phone(value: &str) -> bool {
    value.is_empty() || PHONE_PATTERN.is_match(value)
}

/// Collect every problem with a draft; an empty list means it can be saved
pub fn validate(draft: &LabelDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.image_path.is_empty() {
        errors.push("Image path is required.".to_string());
    }
    if !is_valid_date(&draft.manufacturing_date) {
        errors.push("Manufacturing date format invalid (use YYYY-MM-DD).".to_string());
    }
    if !is_valid_date(&draft.expiry_date) {
        errors.push("Expiry date format invalid (use YYYY-MM-DD).".to_string());
    }
    if !is_valid_phone(&draft.manufacturer_phone) {
        errors.push("Manufacturer phone format invalid.".to_string());
    }
    if !is_valid_phone(&draft.importer_phone) {
        errors.push("Importer phone format invalid.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_image() -> LabelDraft {
        LabelDraft {
            image_name: "label.png".to_string(),
            image_path: "/photos/label.png".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dates() {
        assert!(is_valid_date(""));
        assert!(is_valid_date("2024-01-15"));
        assert!(is_valid_date("0000-99-99"));
        assert!(!is_valid_date("2024/01/15"));
        assert!(!is_valid_date("15-01-2024"));
        assert!(!is_valid_date("2024-1-15"));
        assert!(!is_valid_date(" 2024-01-15"));
        assert!(!is_valid_date("2024-01-15x"));
    }

    #[test]
    fn test_phones() {
        assert!(is_valid_phone(""));
        assert!(is_valid_phone("+1 555-1234"));
        assert!(is_valid_phone("0912345678"));
        assert!(is_valid_phone("+84\t28 3822"));
        assert!(!is_valid_phone("555.1234"));
        assert!(!is_valid_phone("(555) 1234"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn test_minimal_draft_is_accepted() {
        assert!(validate(&draft_with_image()).is_empty());
    }

    #[test]
    fn test_missing_image_always_rejected() {
        let draft = LabelDraft {
            product_name: "Green tea".to_string(),
            manufacturing_date: "2024-01-15".to_string(),
            manufacturer_phone: "+1 555-1234".to_string(),
            ..Default::default()
        };
        assert_eq!(validate(&draft), vec!["Image path is required.".to_string()]);
    }

    #[test]
    fn test_all_problems_reported_in_order() {
        let draft = LabelDraft {
            manufacturing_date: "2024/01/15".to_string(),
            expiry_date: "15-01-2025".to_string(),
            manufacturer_phone: "555.1234".to_string(),
            importer_phone: "n/a".to_string(),
            ..Default::default()
        };

        let errors = validate(&draft);

        assert_eq!(
            errors,
            vec![
                "Image path is required.",
                "Manufacturing date format invalid (use YYYY-MM-DD).",
                "Expiry date format invalid (use YYYY-MM-DD).",
                "Manufacturer phone format invalid.",
                "Importer phone format invalid.",
            ]
        );
    }

    #[test]
    fn test_expiry_before_manufacturing_is_not_checked() {
        let mut draft = draft_with_image();
        draft.manufacturing_date = "2025-06-01".to_string();
        draft.expiry_date = "2020-01-01".to_string();
        assert!(validate(&draft).is_empty());
    }
}
