//! The attribute-list lexer and typed accessors.
//!
//! Whitespace around `=` and `,` is tolerated, a bare token with no `=` becomes a positional
//! entry instead of an error, and nothing here ever fails - a malformed attribute list just
//! yields fewer/emptier pairs.

use crate::utils::{parse_f64, parse_i64, strip_matching_quotes, trim_ascii_ws};
use memchr::memchr3_iter;

/// One `(key, raw_value)` pair from an attribute list, in input order.
///
/// `key` is normalized (ASCII-lowercased, `-` replaced with `_`). `raw_value` retains any
/// surrounding quote characters verbatim - callers that want them stripped use
/// [`AttributeList::get_unquoted`].
#[derive(Debug, PartialEq, Eq, Clone)]
struct Attr<'a> {
    key: String,
    raw_value: &'a str,
}

/// The parsed, ordered attribute list following a tag's `:` separator.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct AttributeList<'a> {
    attrs: Vec<Attr<'a>>,
}

/// Parse `input` (the tag value after the `:`) into an ordered attribute list.
///
/// `key=value` pairs separated by commas are the common case; a bare token with no `=` is
/// recorded with an empty key so callers can still retrieve it positionally via
/// [`AttributeList::bare_values`].
pub fn parse(input: &str) -> AttributeList<'_> {
    let mut attrs = Vec::new();
    for field in split_top_level_commas(input) {
        let field = trim_ascii_ws(field);
        if field.is_empty() {
            continue;
        }
        match split_key_value(field) {
            Some((key, raw_value)) => attrs.push(Attr {
                key: normalize_key(key),
                raw_value,
            }),
            None => attrs.push(Attr {
                key: String::new(),
                raw_value: field,
            }),
        }
    }
    AttributeList { attrs }
}

/// Split `input` on commas that are not inside a (possibly unterminated) quoted value, scanning
/// for the delimiter bytes `,`/`"`/`'` with `memchr3` rather than iterating `char`-by-`char`.
fn split_top_level_commas(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_quote: Option<u8> = None;
    for i in memchr3_iter(b',', b'"', b'\'', bytes) {
        let b = bytes[i];
        match in_quote {
            Some(q) if b == q => in_quote = None,
            Some(_) => continue,
            None => match b {
                b'"' | b'\'' => in_quote = Some(b),
                b',' => {
                    fields.push(&input[start..i]);
                    start = i + 1;
                }
                _ => unreachable!("memchr3 only yields the three needle bytes"),
            },
        }
    }
    fields.push(&input[start..]);
    fields
}

/// Split a single field into `(key, raw_value)` at its first top-level `=`, i.e. one that occurs
/// before any quote opens. Returns `None` for a bare positional value.
fn split_key_value(field: &str) -> Option<(&str, &str)> {
    let bytes = field.as_bytes();
    for i in memchr3_iter(b'=', b'"', b'\'', bytes) {
        match bytes[i] {
            b'"' | b'\'' => return None,
            b'=' => {
                let key = trim_ascii_ws(&field[..i]);
                let value = trim_ascii_ws(&field[(i + 1)..]);
                return Some((key, value));
            }
            _ => unreachable!("memchr3 only yields the three needle bytes"),
        }
    }
    None
}

fn normalize_key(key: &str) -> String {
    key.trim_end_matches(|c| c == ' ' || c == '\t')
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

impl<'a> AttributeList<'a> {
    /// The raw (quote-preserving) value of the first occurrence of `key`, if present.
    pub fn get_raw(&self, key: &str) -> Option<&'a str> {
        self.attrs
            .iter()
            .find(|a| a.key == key && !a.key.is_empty())
            .map(|a| a.raw_value)
    }

    /// The value of the first occurrence of `key` with one layer of matching surrounding quotes
    /// stripped, if present.
    pub fn get_unquoted(&self, key: &str) -> Option<&'a str> {
        self.get_raw(key).map(strip_matching_quotes)
    }

    /// Parse the (unquoted) value of `key` as a base-10 integer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        parse_i64(strip_matching_quotes(self.get_raw(key)?))
    }

    /// Parse the (unquoted) value of `key` as a decimal floating point number.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        parse_f64(strip_matching_quotes(self.get_raw(key)?))
    }

    /// Parse the value of `key` as a float and truncate to `i64`, tolerating fractional
    /// representations like `BANDWIDTH="5000000.5"`.
    pub fn get_i64_tolerant_float(&self, key: &str) -> Option<i64> {
        self.get_f64(key).map(|v| v as i64)
    }

    /// All positional (keyless / bare-token) values, in input order.
    pub fn bare_values(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.attrs
            .iter()
            .filter(|a| a.key.is_empty())
            .map(|a| a.raw_value)
    }

    /// Every `(normalized_key, raw_value)` pair, including bare positional entries (empty key).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a str)> + '_ {
        self.attrs.iter().map(|a| (a.key.as_str(), a.raw_value))
    }

    /// Whether the attribute list had no entries at all (including bare positional ones).
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_keyed_and_quoted_values() {
        let list = parse(r#"METHOD=AES-128,URI="k1",IV=0x1234"#);
        assert_eq!(Some("AES-128"), list.get_raw("method"));
        assert_eq!(Some("\"k1\""), list.get_raw("uri"));
        assert_eq!(Some("k1"), list.get_unquoted("uri"));
        assert_eq!(Some("0x1234"), list.get_raw("iv"));
    }

    #[test]
    fn normalizes_hyphenated_keys_to_lowercase_underscore() {
        let list = parse("AVERAGE-BANDWIDTH=100");
        assert_eq!(Some(100), list.get_i64("average_bandwidth"));
    }

    #[test]
    fn tolerates_whitespace_around_commas_and_equals() {
        let list = parse(" A = 1 , B = 2 ");
        assert_eq!(Some(1), list.get_i64("a"));
        assert_eq!(Some(2), list.get_i64("b"));
    }

    #[test]
    fn commas_inside_quotes_do_not_split_the_field() {
        let list = parse(r#"CODECS="avc1.4d401f,mp4a.40.2",BANDWIDTH=5000000"#);
        assert_eq!(Some("avc1.4d401f,mp4a.40.2"), list.get_unquoted("codecs"));
        assert_eq!(Some(5000000), list.get_i64("bandwidth"));
    }

    #[test]
    fn bare_value_with_no_equals_is_positional() {
        let list = parse("10/30");
        assert_eq!(vec!["10/30"], list.bare_values().collect::<Vec<_>>());
    }

    #[test]
    fn malformed_values_never_error_and_accessors_default_to_none() {
        let list = parse("A=");
        assert_eq!(None, list.get_i64("a"));
        assert_eq!(None, list.get_i64("missing"));
    }

    #[test]
    fn tolerant_float_bandwidth_truncates() {
        let list = parse(r#"BANDWIDTH="5000000.5""#);
        assert_eq!(Some(5000000), list.get_i64_tolerant_float("bandwidth"));
    }
}
