//! Log line sanitizing

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::encoding::encode;

lazy_static! {
    static ref OTHER_CHARACTERS: Regex = Regex::new(r"\p{C}+").unwrap();
}

/// Longest sanitized text, in Unicode code points
pub const MAX_LOG_LENGTH: usize = 500;

/// Replaces each run of control, format, private-use or unassigned characters
pub const REPLACEMENT: &str = "¿";

/// Turns any serializable value into a short, single-line, printable string.
///
/// The value is encoded first (see [`encoding`](super::encoding)) and the
/// encoded text is then passed through [`scrub`]. Values that cannot be
/// serialized are logged by their serialization error instead, so this never
/// fails.
pub fn sanitize<T>(data: &T) -> String
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(data).unwrap_or_else(|err| Value::String(err.to_string()));

    scrub(&encode(&value))
}

/// Truncates `text` to [`MAX_LOG_LENGTH`] code points, turns newlines into `|`
/// and replaces non-printable characters with [`REPLACEMENT`].
pub fn scrub(text: &str) -> String {
    let truncated: String = text.chars().take(MAX_LOG_LENGTH).collect();
    let single_line = truncated.replace('\n', "|");

    OTHER_CHARACTERS
        .replace_all(&single_line, REPLACEMENT)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn assert_printable(line: &str) {
        assert!(line.chars().count() <= MAX_LOG_LENGTH);
        assert!(!line.contains('\n'));
        assert!(!OTHER_CHARACTERS.is_match(line), "{line:?}");
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize("hello"), "s:5:\"hello\";");
    }

    #[test]
    fn test_sanitize_list() {
        let recipients = vec!["a@example.com", "b@example.com"];

        assert_eq!(
            sanitize(&recipients),
            "a:2:{i:0;s:13:\"a@example.com\";i:1;s:13:\"b@example.com\";}"
        );
    }

    #[test]
    fn test_newlines_become_pipes() {
        assert_eq!(sanitize("one\ntwo\n"), "s:8:\"one|two|\";");
    }

    #[test]
    fn test_control_runs_become_single_marker() {
        assert_eq!(scrub("a\r\tb\u{0}c\u{200b}d\u{e000}"), "a¿b¿c¿d¿");
    }

    #[test]
    fn test_carriage_return_newline() {
        assert_eq!(scrub("line\r\nnext"), "line¿|next");
    }

    #[test]
    fn test_unicode_text_is_kept() {
        assert_eq!(scrub("Héllo wörld 日本語 ¿"), "Héllo wörld 日本語 ¿");
    }

    #[test]
    fn test_truncates_by_code_points() {
        let text = "é".repeat(800);

        let scrubbed = scrub(&text);

        assert_eq!(scrubbed.chars().count(), MAX_LOG_LENGTH);
        assert_eq!(scrubbed.len(), MAX_LOG_LENGTH * 2);
    }

    #[test]
    fn test_truncation_happens_after_encoding() {
        let body = "a".repeat(800);

        let line = sanitize(&body);

        assert_eq!(line.chars().count(), MAX_LOG_LENGTH);
        assert!(line.starts_with("s:800:\"aaa"));
        assert!(!line.ends_with("\";"));
    }

    #[test]
    fn test_long_body_with_newline() {
        let body = format!("{}\n{}", "a".repeat(100), "a".repeat(700));

        let line = sanitize(&body);

        assert_eq!(line.chars().count(), 500);
        assert_eq!(line.matches('|').count(), 1);
        assert_eq!(line.find('|'), Some("s:801:\"".len() + 100));
        assert_printable(&line);
    }

    #[test]
    fn test_newline_past_the_limit_is_cut_off() {
        let body = format!("{}\n", "a".repeat(700));

        let line = sanitize(&body);

        assert_eq!(line.chars().count(), 500);
        assert!(!line.contains('|'));
    }

    #[test]
    fn test_scrub_is_a_fixed_point_on_its_output() {
        let inputs = [
            sanitize(&"x\u{7}\n".repeat(400)),
            sanitize("plain"),
            sanitize(&vec!["to@example.com\r\n", "\u{feff}cc@example.com"]),
        ];

        for line in inputs {
            assert_printable(&line);
            assert_eq!(scrub(&line), line);
        }
    }

    #[test]
    fn test_unserializable_value_is_logged_by_its_error() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "value");

        let line = sanitize(&map);

        assert!(line.starts_with("s:"));
        assert!(line.contains("key must be a string"));
        assert_printable(&line);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scrub(""), "");
        assert_eq!(sanitize(""), "s:0:\"\";");
    }
}
