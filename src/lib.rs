#![warn(missing_docs)]

//! # hls-m3u8-parser
//!
//! A single-pass reader for HLS ([RFC 8216]) M3U8 playlists into an owned [`Document`] tree.
//!
//! Unlike an event-driven (SAX-style) reader, [`parse`] runs the scanner, attribute lexer, tag
//! dispatcher, and stateful accumulator to completion and hands back the fully built `Document` -
//! the DOM-style counterpart to that design. The parser is deliberately lenient: HLS manifests in
//! the wild are notoriously dirty, and an intolerant parser is unusable. A malformed attribute
//! value, an unrecognized tag, or a missing trailing URI never aborts the parse; it shows up as a
//! missing or defaulted field on the returned document instead. The only failures this library
//! reports are structural ones - empty input, or input that isn't valid UTF-8 - see [`ParseError`].
//!
//! ```
//! const MANIFEST: &str = "#EXTM3U
//! #EXT-X-TARGETDURATION:6
//! #EXT-X-VERSION:3
//! #EXTINF:5.5,Intro
//! https://a/1.ts
//! #EXT-X-ENDLIST
//! ";
//! let doc = hls_m3u8_parser::parse_str(MANIFEST).unwrap();
//! assert_eq!(Some(6), doc.target_duration);
//! assert!(doc.is_endlist);
//! assert_eq!(1, doc.segments.len());
//! assert_eq!("https://a/1.ts", doc.segments[0].uri.as_deref().unwrap());
//! ```
//!
//! Sticky tags (`#EXT-X-KEY`, `#EXT-X-MAP`) apply to every following segment until overwritten, and
//! are referenced from a [`Segment`] by index into the document's owning collection rather than by
//! pointer or `Rc`, so segments never duplicate or outlive the objects they reference:
//!
//! ```
//! const MANIFEST: &str = "#EXT-X-KEY:METHOD=AES-128,URI=\"k1\"
//! #EXTINF:4,
//! a.ts
//! #EXT-X-KEY:METHOD=NONE
//! #EXTINF:4,
//! b.ts
//! ";
//! let doc = hls_m3u8_parser::parse_str(MANIFEST).unwrap();
//! let key0 = doc.segments[0].key.map(|i| &doc.keys[i]).unwrap();
//! assert_eq!(Some("AES-128"), key0.method.as_deref());
//! let key1 = doc.segments[1].key.map(|i| &doc.keys[i]).unwrap();
//! assert_eq!(Some("NONE"), key1.method.as_deref());
//! ```
//!
//! [RFC 8216]: https://datatracker.ietf.org/doc/html/rfc8216

mod attrs;
pub mod document;
pub mod error;
mod handlers;
mod line;
mod parser;
mod state;
mod tag_name;
mod utils;

pub use document::*;
pub use error::ParseError;

/// Parse a UTF-8 HLS manifest from raw bytes.
///
/// Returns [`ParseError::InvalidUtf8`] if `input` is not valid UTF-8, or [`ParseError::Empty`] if
/// `input` is empty or contains only whitespace/newlines. Every other malformed-input case is
/// absorbed into missing or defaulted fields on the returned [`Document`] - see the crate-level
/// docs for more on this error handling design.
pub fn parse(input: &[u8]) -> Result<Document, ParseError> {
    let text = std::str::from_utf8(input).map_err(|e| ParseError::InvalidUtf8(e.into()))?;
    parse_str(text)
}

/// Parse a UTF-8 HLS manifest already held as a `str`.
pub fn parse_str(input: &str) -> Result<Document, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(parser::run(input))
}
