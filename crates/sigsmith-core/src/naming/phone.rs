//! Dialable phone values for `tel:` links.

use super::is_separator_space;

/// Strips whitespace, parentheses and hyphens from a human-formatted phone number.
///
/// Every other character (digits, `+`, dots, letters) is kept in its original order.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !is_separator_space(c) && !matches!(c, '(' | ')' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_formatted_number() {
        assert_eq!(normalize_phone("+1 (469) 998-2727"), "+14699982727");
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn tabs_and_newlines_removed() {
        assert_eq!(normalize_phone("555\t123\n4567"), "5551234567");
    }

    #[test]
    fn byte_order_mark_removed_next_line_kept() {
        assert_eq!(normalize_phone("\u{FEFF}+1 555\u{FEFF}0100"), "+15550100");
        assert_eq!(normalize_phone("555\u{0085}0100"), "555\u{0085}0100");
    }

    #[test]
    fn other_symbols_preserved() {
        assert_eq!(normalize_phone("+44 20.7946.0958 ext 12"), "+4420.7946.0958ext12");
        assert_eq!(normalize_phone("#*+"), "#*+");
    }

    #[test]
    fn empty_and_separator_only() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone(" ()- "), "");
    }
}
