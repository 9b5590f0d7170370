//! Leaf producers for the elementary HTTP grammar pieces.

use crate::parser::chars;
use crate::parser::error::{ErrorKind, Expected, ParseError};
use crate::parser::input::Cursor;
use crate::parser::producer::Producer;

/// See [`symbol`].
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    expected: u8,
}

/// Match exactly the character `expected` and yield nothing. The usual way
/// to consume grammar punctuation in clause position.
pub fn symbol(expected: char) -> Symbol {
    assert!(expected.is_ascii(), "symbol() only accepts ASCII characters");
    Symbol { expected: expected as u8 }
}

impl Producer for Symbol {
    type Output = ();

    fn produce(&self, input: &mut Cursor<'_>) -> Result<(), ParseError> {
        match input.peek() {
            Some(actual) if actual == self.expected => {
                input.advance(1);
                Ok(())
            }
            Some(actual) => Err(ParseError::new(
                input.position(),
                ErrorKind::Unexpected {
                    actual,
                    expected: Expected::Symbol(self.expected as char),
                },
            )),
            None => Err(ParseError::new(
                input.position(),
                ErrorKind::UnexpectedEof { expected: Expected::Symbol(self.expected as char) },
            )),
        }
    }
}

/// See [`symbol_producer`].
#[derive(Debug, Clone, Copy)]
pub struct SymbolProducer {
    expected: u8,
}

/// As [`symbol`], but yields the matched character, so it can feed
/// `to_container()` when accumulating a string.
pub fn symbol_producer(expected: char) -> SymbolProducer {
    assert!(expected.is_ascii(), "symbol_producer() only accepts ASCII characters");
    SymbolProducer { expected: expected as u8 }
}

impl Producer for SymbolProducer {
    type Output = char;

    fn produce(&self, input: &mut Cursor<'_>) -> Result<char, ParseError> {
        match input.peek() {
            Some(actual) if actual == self.expected => {
                input.advance(1);
                Ok(self.expected as char)
            }
            Some(actual) => Err(ParseError::new(
                input.position(),
                ErrorKind::Unexpected {
                    actual,
                    expected: Expected::Symbol(self.expected as char),
                },
            )),
            None => Err(ParseError::new(
                input.position(),
                ErrorKind::UnexpectedEof { expected: Expected::Symbol(self.expected as char) },
            )),
        }
    }
}

/// See [`token_producer`].
#[derive(Debug, Clone, Copy)]
pub struct TokenProducer;

/// Match a non-empty maximal run of `tchar` and yield it as a `String`.
pub fn token_producer() -> TokenProducer {
    TokenProducer
}

impl Producer for TokenProducer {
    type Output = String;

    fn produce(&self, input: &mut Cursor<'_>) -> Result<String, ParseError> {
        match input.peek() {
            None => Err(ParseError::new(
                input.position(),
                ErrorKind::UnexpectedEof { expected: Expected::TokenChar },
            )),
            Some(actual) if !chars::is_tchar(actual) => Err(ParseError::new(
                input.position(),
                ErrorKind::Unexpected { actual, expected: Expected::TokenChar },
            )),
            Some(_) => {
                let mut token = String::new();
                while let Some(byte) = input.peek() {
                    if !chars::is_tchar(byte) {
                        break;
                    }
                    token.push(byte as char);
                    input.advance(1);
                }
                Ok(token)
            }
        }
    }
}

/// See [`quoted_string_producer`].
#[derive(Debug, Clone, Copy)]
pub struct QuotedStringProducer;

/// Match a double-quoted string and yield its content with the quotes
/// stripped and `\x` escapes resolved.
pub fn quoted_string_producer() -> QuotedStringProducer {
    QuotedStringProducer
}

impl Producer for QuotedStringProducer {
    type Output = String;

    fn produce(&self, input: &mut Cursor<'_>) -> Result<String, ParseError> {
        let entry = input.mark();
        let outcome = parse_quoted_string(input);
        if outcome.is_err() {
            input.rewind(entry);
        }
        outcome
    }
}

fn parse_quoted_string(input: &mut Cursor<'_>) -> Result<String, ParseError> {
    match input.peek() {
        Some(b'"') => input.advance(1),
        Some(actual) => {
            return Err(ParseError::new(
                input.position(),
                ErrorKind::Unexpected { actual, expected: Expected::QuotedStringStart },
            ))
        }
        None => {
            return Err(ParseError::new(
                input.position(),
                ErrorKind::UnexpectedEof { expected: Expected::QuotedStringStart },
            ))
        }
    }

    let mut content = String::new();
    loop {
        match input.peek() {
            None => {
                return Err(ParseError::new(
                    input.position(),
                    ErrorKind::UnterminatedQuotedString,
                ))
            }
            Some(b'"') => {
                input.advance(1);
                return Ok(content);
            }
            Some(b'\\') => {
                input.advance(1);
                match input.peek() {
                    Some(escaped) if chars::is_quoted_pair_char(escaped) => {
                        content.push(escaped as char);
                        input.advance(1);
                    }
                    Some(actual) => {
                        return Err(ParseError::new(
                            input.position(),
                            ErrorKind::Unexpected { actual, expected: Expected::EscapedChar },
                        ))
                    }
                    None => {
                        return Err(ParseError::new(
                            input.position(),
                            ErrorKind::UnterminatedQuotedString,
                        ))
                    }
                }
            }
            Some(byte) if chars::is_qdtext(byte) => {
                content.push(byte as char);
                input.advance(1);
            }
            Some(actual) => {
                return Err(ParseError::new(
                    input.position(),
                    ErrorKind::Unexpected { actual, expected: Expected::QuotedStringContent },
                ))
            }
        }
    }
}

/// See [`ows`].
#[derive(Debug, Clone, Copy)]
pub struct Ows;

/// Consume optional whitespace, `*( SP / HTAB )`. Never fails.
pub fn ows() -> Ows {
    Ows
}

impl Producer for Ows {
    type Output = ();

    fn produce(&self, input: &mut Cursor<'_>) -> Result<(), ParseError> {
        while let Some(byte) = input.peek() {
            if !chars::is_ows(byte) {
                break;
            }
            input.advance(1);
        }
        Ok(())
    }
}
