//! Query string of an SMTP URI

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// Directives carried in the query string of an SMTP URI
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Parse `&`-separated `key=value` pairs.
    ///
    /// Pairs with an empty key are skipped, a pair without `=` has an empty
    /// value and a repeated key keeps its last value.
    pub fn parse(query: &str) -> Self {
        let pairs = query
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = decode(key);

                if key.is_empty() {
                    return None;
                }

                Some((key, decode(value)))
            })
            .collect();

        Self(pairs)
    }

    /// The value of `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let params = QueryParams::parse("debug=3&mode=fast");

        assert_eq!(params, QueryParams::parse("mode=fast&debug=3"));
        assert_eq!(params.get("debug"), Some("3"));
        assert_eq!(params.get("mode"), Some("fast"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_pair_without_equals_has_empty_value() {
        let params = QueryParams::parse("debug");

        assert_eq!(params.get("debug"), Some(""));
    }

    #[test]
    fn test_empty_keys_are_skipped() {
        let params = QueryParams::parse("=1&&debug=2&");

        assert_eq!(params, QueryParams::parse("debug=2"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let params = QueryParams::parse("debug=1&debug=5");

        assert_eq!(params.get("debug"), Some("5"));
    }

    #[test]
    fn test_value_keeps_everything_after_first_equals() {
        let params = QueryParams::parse("token=a=b");

        assert_eq!(params.get("token"), Some("a=b"));
    }

    #[test]
    fn test_keys_and_values_are_percent_decoded() {
        let params = QueryParams::parse("de%62ug=%37");

        assert_eq!(params.get("debug"), Some("7"));
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(QueryParams::parse(""), QueryParams::default());
    }
}
