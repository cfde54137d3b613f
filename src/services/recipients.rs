//! Recipient List Parsing
//!
//! Uploaded recipient/customer files are plain UTF-8 text, one entry per
//! line. Lines are trimmed and blank lines dropped, so a trailing newline
//! does not produce a phantom recipient.

/// Split uploaded text into one trimmed, non-empty entry per line.
pub fn parse_recipient_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        let parsed = parse_recipient_list("111\n222\n333");
        assert_eq!(parsed, vec!["111", "222", "333"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = parse_recipient_list("  111 \n\t222\n333  ");
        assert_eq!(parsed, vec!["111", "222", "333"]);
    }

    #[test]
    fn test_parse_drops_blank_lines() {
        let parsed = parse_recipient_list("111\n\n  \n222\n");
        assert_eq!(parsed, vec!["111", "222"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let parsed = parse_recipient_list("111\r\n222\r\n");
        assert_eq!(parsed, vec!["111", "222"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_recipient_list("").is_empty());
        assert!(parse_recipient_list("\n\n").is_empty());
    }
}
