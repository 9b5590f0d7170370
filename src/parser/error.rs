//! Error types for the field-value parser.

use std::fmt;

use thiserror::Error;

/// What a producer was looking for when it rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific literal character.
    Symbol(char),
    /// Any `tchar`.
    TokenChar,
    /// The leading `0` or `1` of a quality value.
    DecimalStart,
    /// The opening quote of a quoted-string.
    QuotedStringStart,
    /// `qdtext` or the start of a quoted-pair.
    QuotedStringContent,
    /// A legal character after a `\` inside a quoted-string.
    EscapedChar,
    /// Input that does not match a negative lookahead.
    NoLookaheadMatch,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Symbol(symbol) => write!(f, "the character {symbol:?}"),
            Expected::TokenChar => write!(f, "a token character"),
            Expected::DecimalStart => write!(f, "'0' or '1'"),
            Expected::QuotedStringStart => write!(f, "an opening '\"'"),
            Expected::QuotedStringContent => write!(f, "quoted-string content"),
            Expected::EscapedChar => write!(f, "an escapable character"),
            Expected::NoLookaheadMatch => write!(f, "input not matching the lookahead"),
        }
    }
}

/// The reasons a parse can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A producer required a specific literal or character class.
    #[error("unexpected byte 0x{actual:02x}, expected {expected}")]
    Unexpected { actual: u8, expected: Expected },

    /// Input ended inside a production.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: Expected },

    /// Every branch of an `alternatives` failed.
    #[error("no alternative matched")]
    NoAlternative,

    /// A repetition could not reach its required minimum.
    #[error("repetition stopped after {actual} of {min} required matches")]
    RepeatBelowMin { min: usize, actual: usize },

    /// A strict repetition would have exceeded its maximum.
    #[error("repetition exceeded the maximum of {max} matches")]
    RepeatAboveMax { max: usize },

    /// The parse succeeded but bytes remain.
    #[error("trailing input after a complete value")]
    TrailingInput,

    /// A repeated clause matched without consuming input.
    #[error("repeated clause matched without consuming input")]
    ZeroLengthIteration,

    /// A numeric production exceeded its range, e.g. a qvalue above 1.000.
    #[error("numeric value out of range")]
    NumericOutOfRange,

    /// A quoted-string was opened but never closed.
    #[error("unterminated quoted-string")]
    UnterminatedQuotedString,
}

/// A parse failure: where it happened and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {position}")]
pub struct ParseError {
    /// Byte offset into the input at which the failure was detected.
    pub position: usize,
    /// The failure cause.
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(position: usize, kind: ErrorKind) -> Self {
        Self { position, kind }
    }

    /// A one-line description of the cause, without the position.
    pub fn brief(&self) -> String {
        self.kind.to_string()
    }
}

/// Render `error` against the `input` it came from as a caret-annotated
/// excerpt suitable for logs.
pub fn describe_error(error: &ParseError, input: &[u8]) -> String {
    const WINDOW: usize = 32;

    let position = error.position.min(input.len());
    let start = position.saturating_sub(WINDOW);
    let end = input.len().min(position + WINDOW);

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str("...");
    }
    for &byte in &input[start..end] {
        // Keep the excerpt printable; the exact byte is in the message.
        excerpt.push(if (0x20..0x7f).contains(&byte) { byte as char } else { '.' });
    }
    if end < input.len() {
        excerpt.push_str("...");
    }

    let caret_indent = position - start + if start > 0 { 3 } else { 0 };
    let mut caret_line = " ".repeat(caret_indent);
    caret_line.push('^');
    format!("{error}\n{excerpt}\n{caret_line}")
}
