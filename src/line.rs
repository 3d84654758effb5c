//! The line scanner: splits an input buffer into logical lines and classifies each one.
//!
//! CR, LF, and CRLF are all accepted as line terminators and never concatenated across physical
//! lines. Each line is classified as blank, a tag (`#EXT...`), or a URI; telling an `#EXT` tag
//! apart from an unrecognized one is the dispatcher's job, not the scanner's.

/// What kind of content a scanned line held.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineKind {
    /// The line had no content once line-break characters were stripped.
    Blank,
    /// The line began with `#`.
    Tag,
    /// Any other non-blank line.
    Uri,
}

/// A single classified line, borrowing its content from the original input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Line<'a> {
    pub kind: LineKind,
    /// The line content with CR/LF/CRLF and leading/trailing ASCII whitespace already stripped.
    /// Empty for [`LineKind::Blank`].
    pub content: &'a str,
}

/// Iterator over the logical lines of `input`, forward-only and never re-reading a byte.
pub struct Lines<'a> {
    remaining: &'a str,
}

/// Construct a line iterator over `input`.
pub fn scan(input: &str) -> Lines<'_> {
    Lines { remaining: input }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let bytes = self.remaining.as_bytes();
        let mut end = 0;
        while end < bytes.len() && bytes[end] != b'\r' && bytes[end] != b'\n' {
            end += 1;
        }
        let raw_line = &self.remaining[..end];
        let after = if end < bytes.len() {
            if bytes[end] == b'\r' && end + 1 < bytes.len() && bytes[end + 1] == b'\n' {
                &self.remaining[(end + 2)..]
            } else {
                &self.remaining[(end + 1)..]
            }
        } else {
            ""
        };
        self.remaining = after;

        let trimmed_left = raw_line.trim_start_matches(|c| c == ' ' || c == '\t');
        let trimmed = trimmed_left.trim_end_matches(|c| c == ' ' || c == '\t' || c == '\r');

        if trimmed.is_empty() {
            return Some(Line {
                kind: LineKind::Blank,
                content: "",
            });
        }
        let kind = if trimmed.as_bytes()[0] == b'#' {
            LineKind::Tag
        } else {
            LineKind::Uri
        };
        Some(Line {
            kind,
            content: trimmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_blank_tag_and_uri_lines() {
        let lines: Vec<_> = scan("#EXTM3U\n\nhi.m3u8\n").collect();
        assert_eq!(
            vec![
                Line {
                    kind: LineKind::Tag,
                    content: "#EXTM3U"
                },
                Line {
                    kind: LineKind::Blank,
                    content: ""
                },
                Line {
                    kind: LineKind::Uri,
                    content: "hi.m3u8"
                },
            ],
            lines
        );
    }

    #[test]
    fn accepts_lf_crlf_and_bare_cr() {
        for input in ["a\nb\n", "a\r\nb\r\n", "a\rb\r"] {
            let lines: Vec<_> = scan(input).map(|l| l.content).collect();
            assert_eq!(vec!["a", "b"], lines, "input={input:?}");
        }
    }

    #[test]
    fn trims_trailing_and_leading_ascii_whitespace() {
        let lines: Vec<_> = scan("  #EXT-X-VERSION:3  \n").collect();
        assert_eq!(
            vec![Line {
                kind: LineKind::Tag,
                content: "#EXT-X-VERSION:3"
            }],
            lines
        );
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        let lines: Vec<_> = scan("   \n").collect();
        assert_eq!(
            vec![Line {
                kind: LineKind::Blank,
                content: ""
            }],
            lines
        );
    }

    #[test]
    fn no_trailing_newline_still_yields_final_line() {
        let lines: Vec<_> = scan("hi.m3u8").collect();
        assert_eq!(
            vec![Line {
                kind: LineKind::Uri,
                content: "hi.m3u8"
            }],
            lines
        );
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert_eq!(0, scan("").count());
    }
}
