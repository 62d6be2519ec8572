//! Accent folding and honorific stripping.
//!
//! Every match the resolver and the keyword filter perform goes through
//! [`normalize`] first, so "Hà Nội", "ha noi" and "HA NOI" all compare equal.
//! Distinct names may in rare cases fold to the same string; that collision
//! is resolved by dataset declaration order, like every other tie.

use unidecode::unidecode;

/// Honorifics preceding province names ("Tỉnh Cao Bằng", "TP. Hồ Chí Minh").
pub const PROVINCE_PREFIXES: &[&str] = &["thanh pho", "tinh", "tp.", "tp"];

/// Honorifics preceding district names ("Huyện Thạch An", "Quận 1").
pub const DISTRICT_PREFIXES: &[&str] = &["thanh pho", "thi xa", "huyen", "quan"];

/// Honorifics preceding ward names ("Xã Quang Trọng", "TT. Đông Khê").
pub const WARD_PREFIXES: &[&str] = &["thi tran", "phuong", "xa", "tt.", "tt"];

/// Strips diacritics and folds case.
///
/// Lossy, deterministic and total: any input produces a lowercase ASCII
/// rendering ("Hà Nội" -> "ha noi"). Idempotent, since the output contains
/// nothing left to fold.
pub fn normalize(text: &str) -> String {
    unidecode(text).to_lowercase()
}

/// Removes at most one leading administrative honorific from already
/// normalized text.
///
/// A prefix only counts when anchored at the start and followed by
/// whitespace; the whitespace is consumed along with it. Text without a
/// recognized honorific is returned unchanged.
///
/// ```
/// use vn_divisions::normalize::{strip_admin_prefix, PROVINCE_PREFIXES};
///
/// assert_eq!(strip_admin_prefix("tinh cao bang", PROVINCE_PREFIXES), "cao bang");
/// assert_eq!(strip_admin_prefix("cao bang", PROVINCE_PREFIXES), "cao bang");
/// ```
pub fn strip_admin_prefix<'a>(text: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = text.strip_prefix(prefix) {
            let stripped = rest.trim_start();
            // Honorific must be a whole token: "tinh x" strips, "tinhte" not.
            if stripped.len() < rest.len() {
                return stripped;
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_diacritics() {
        assert_eq!(normalize("Hà Nội"), "ha noi");
        assert_eq!(normalize("Tỉnh Cao Bằng"), "tinh cao bang");
        assert_eq!(normalize("Đà Nẵng"), "da nang");
    }

    #[test]
    fn test_normalize_case_and_accent_insensitive() {
        assert_eq!(normalize("Hà Nội"), normalize("ha noi"));
        assert_eq!(normalize("Hà Nội"), normalize("HA NOI"));
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["Hà Nội", "Phường Hoàn Kiếm", "456 haha", "", "   "] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_non_vietnamese_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 Main St."), "123 main st.");
    }

    #[test]
    fn test_strip_province_prefixes() {
        assert_eq!(strip_admin_prefix("tinh cao bang", PROVINCE_PREFIXES), "cao bang");
        assert_eq!(
            strip_admin_prefix("thanh pho ha noi", PROVINCE_PREFIXES),
            "ha noi"
        );
        assert_eq!(
            strip_admin_prefix("tp. ho chi minh", PROVINCE_PREFIXES),
            "ho chi minh"
        );
        assert_eq!(
            strip_admin_prefix("tp ho chi minh", PROVINCE_PREFIXES),
            "ho chi minh"
        );
    }

    #[test]
    fn test_strip_district_and_ward_prefixes() {
        assert_eq!(
            strip_admin_prefix("huyen thach an", DISTRICT_PREFIXES),
            "thach an"
        );
        assert_eq!(strip_admin_prefix("quan 1", DISTRICT_PREFIXES), "1");
        assert_eq!(
            strip_admin_prefix("thi xa quang trung", DISTRICT_PREFIXES),
            "quang trung"
        );
        assert_eq!(
            strip_admin_prefix("xa quang trong", WARD_PREFIXES),
            "quang trong"
        );
        assert_eq!(
            strip_admin_prefix("thi tran dong khe", WARD_PREFIXES),
            "dong khe"
        );
        assert_eq!(strip_admin_prefix("tt. dong khe", WARD_PREFIXES), "dong khe");
    }

    #[test]
    fn test_strip_is_anchored_and_whole_token() {
        // Honorific in the middle is left alone.
        assert_eq!(
            strip_admin_prefix("khu tinh cao bang", PROVINCE_PREFIXES),
            "khu tinh cao bang"
        );
        // Prefix without a following space is not an honorific.
        assert_eq!(strip_admin_prefix("tinhte", PROVINCE_PREFIXES), "tinhte");
        // Strips at most once.
        assert_eq!(
            strip_admin_prefix("tinh tinh cao bang", PROVINCE_PREFIXES),
            "tinh cao bang"
        );
    }

    #[test]
    fn test_strip_no_match_returns_input() {
        assert_eq!(strip_admin_prefix("cao bang", PROVINCE_PREFIXES), "cao bang");
        assert_eq!(strip_admin_prefix("", PROVINCE_PREFIXES), "");
    }

    #[test]
    fn test_strip_prefix_only_yields_empty() {
        assert_eq!(strip_admin_prefix("tinh ", PROVINCE_PREFIXES), "");
    }
}
