/// Returns a newly allocated string with leading and trailing whitespace removed.
///
/// Whitespace is the `char::is_whitespace` classification, which covers spaces, tabs,
/// newlines, carriage returns, vertical tabs and form feeds. An empty or all-whitespace
/// input yields an owned empty string. Interior whitespace is preserved verbatim.
pub fn trim(text: &str) -> String {
    text.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::trim;

    #[test]
    fn strips_leading_and_trailing_whitespace() {
        assert_eq!(trim("  \t value with spaces \r\n"), "value with spaces");
    }

    #[test]
    fn all_whitespace_becomes_empty() {
        assert_eq!(trim(""), "");
        assert_eq!(trim("   \t \x0b\x0c \r\n"), "");
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        assert_eq!(trim("a \t b"), "a \t b");
    }

    #[test]
    fn trimming_is_idempotent() {
        for input in ["", "   ", "x", " x ", " a b\t", "\r\nkey = value\r\n"] {
            let once = trim(input);
            assert_eq!(trim(&once), once);
        }
    }
}
