//! Error types returned by the top-level `parse` entry points.
//!
//! The parser is best-effort and total: almost nothing about a malformed playlist produces an
//! `Err` here. The only failures are structural ones that make it meaningless to even start
//! scanning lines.

use std::fmt::{Display, Formatter};
use std::str::Utf8Error;

/// Error returned by [`crate::parse`] / [`crate::parse_str`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    /// The input was empty (or contained only whitespace/newlines), so there
    /// is nothing to parse.
    Empty,
    /// The input bytes were not valid UTF-8.
    InvalidUtf8(Utf8ErrorInfo),
}

/// A `Copy`/`Eq`-friendly stand-in for [`std::str::Utf8Error`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Utf8ErrorInfo {
    /// Byte offset of the first invalid sequence.
    pub valid_up_to: usize,
}
impl From<Utf8Error> for Utf8ErrorInfo {
    fn from(e: Utf8Error) -> Self {
        Self {
            valid_up_to: e.valid_up_to(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::InvalidUtf8(e) => {
                write!(f, "input is not valid utf-8 (valid up to byte {})", e.valid_up_to)
            }
        }
    }
}
impl std::error::Error for ParseError {}
