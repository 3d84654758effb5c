//! Small byte/string helpers shared across the scanner, lexer, and handlers.

/// Trim ASCII spaces and tabs from both ends of `s`.
pub fn trim_ascii_ws(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

/// Trim ASCII spaces and tabs from the left only.
pub fn trim_start_ws(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ' ' || c == '\t')
}

/// Strip one layer of matching surrounding quotes (`"..."` or `'...'`), if both the leading and
/// trailing byte are present and match. Otherwise returns the input unchanged.
pub fn strip_matching_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' || first == b'\'') && first == last {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Best-effort base-10 parse of a leading sign and digit run, stopping at the first byte that
/// isn't part of an integer. Returns `None` if no digits were found at all.
pub fn parse_leading_i64(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    let magnitude: i64 = s[digits_start..i].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Strict whole-string base-10 parse (used for attribute values, which should be entirely
/// numeric, not just prefixed by a number).
pub fn parse_i64(s: &str) -> Option<i64> {
    trim_ascii_ws(s).parse::<i64>().ok()
}

/// Best-effort leading double parse: parses as much of a decimal floating point number as
/// possible from the start of `s`, stopping at the first byte that doesn't extend it. Returns
/// `None` if no numeric prefix exists.
pub fn parse_leading_f64(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        i += 1;
    }
    let mut seen_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        seen_digit = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return None;
    }
    fast_float2::parse(&s[..i]).ok()
}

/// Strict whole-string decimal floating point parse, used for attribute values.
pub fn parse_f64(s: &str) -> Option<f64> {
    fast_float2::parse(trim_ascii_ws(s)).ok()
}

/// Interpret an (already unquoted) enumerated-string attribute value as a boolean, per HLS's
/// `YES`/`NO` convention (`#EXT-X-START:PRECISE`, `#EXT-X-SERVER-CONTROL:CAN-BLOCK-RELOAD`, ...).
/// Anything other than a case-insensitive `YES` is treated as absent rather than `false`, since
/// the attribute itself is what signals presence.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("YES") {
        Some(true)
    } else if s.eq_ignore_ascii_case("NO") {
        Some(false)
    } else {
        None
    }
}

/// Case-insensitive (ASCII) substring search, used to detect the bare `DURATION` token that
/// `#EXT-X-CUE-OUT` may carry outside of keyed attribute syntax.
pub fn contains_ascii_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}
