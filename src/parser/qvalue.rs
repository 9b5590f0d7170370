//! RFC 7231 quality values.

use std::fmt;

use serde::Serialize;

use crate::parser::basics::{ows, symbol};
use crate::parser::clause::alternatives;
use crate::parser::error::{ErrorKind, Expected, ParseError};
use crate::parser::input::Cursor;
use crate::parser::producer::{produce, Producer};

/// A quality value: a fixed-point weight in thousandths, `0..=1000`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Qvalue(u16);

impl Qvalue {
    /// The lowest weight, `q=0`.
    pub const ZERO: Qvalue = Qvalue(0);
    /// The highest weight, `q=1`.
    pub const MAX: Qvalue = Qvalue(1000);

    /// Build a qvalue from an untrusted number of thousandths. Values above
    /// 1000 are rejected.
    pub fn from_millis(millis: u16) -> Option<Self> {
        (millis <= 1000).then_some(Qvalue(millis))
    }

    /// The weight in thousandths.
    pub fn millis(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Qvalue {
    /// Canonical text form: `0`, `1`, or `0.` followed by up to three
    /// digits with trailing zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "0"),
            1000 => write!(f, "1"),
            millis => {
                let mut digits = format!("{millis:03}");
                while digits.ends_with('0') {
                    digits.pop();
                }
                write!(f, "0.{digits}")
            }
        }
    }
}

/// See [`qvalue_producer`].
#[derive(Debug, Clone, Copy)]
pub struct QvalueProducer;

/// Match `( "0" [ "." *3DIGIT ] ) / ( "1" [ "." *3("0") ] )` and yield the
/// weight. Anything above `1.000` is rejected as out of range.
pub fn qvalue_producer() -> QvalueProducer {
    QvalueProducer
}

impl Producer for QvalueProducer {
    type Output = Qvalue;

    fn produce(&self, input: &mut Cursor<'_>) -> Result<Qvalue, ParseError> {
        let entry = input.mark();
        let outcome = parse_qvalue(input);
        if outcome.is_err() {
            input.rewind(entry);
        }
        outcome
    }
}

fn parse_qvalue(input: &mut Cursor<'_>) -> Result<Qvalue, ParseError> {
    match input.peek() {
        Some(b'0') => {
            input.advance(1);
            let mut millis: u16 = 0;
            if input.peek() == Some(b'.') {
                input.advance(1);
                let mut scale: u16 = 100;
                for _ in 0..3 {
                    match input.peek() {
                        Some(byte) if byte.is_ascii_digit() => {
                            millis += u16::from(byte - b'0') * scale;
                            scale /= 10;
                            input.advance(1);
                        }
                        _ => break,
                    }
                }
            }
            Ok(Qvalue(millis))
        }
        Some(b'1') => {
            input.advance(1);
            if input.peek() == Some(b'.') {
                input.advance(1);
                for _ in 0..3 {
                    match input.peek() {
                        Some(b'0') => input.advance(1),
                        Some(byte) if byte.is_ascii_digit() => {
                            return Err(ParseError::new(
                                input.position(),
                                ErrorKind::NumericOutOfRange,
                            ))
                        }
                        _ => break,
                    }
                }
            }
            Ok(Qvalue::MAX)
        }
        Some(actual) => Err(ParseError::new(
            input.position(),
            ErrorKind::Unexpected { actual, expected: Expected::DecimalStart },
        )),
        None => Err(ParseError::new(
            input.position(),
            ErrorKind::UnexpectedEof { expected: Expected::DecimalStart },
        )),
    }
}

/// Match `OWS ";" OWS ( "q" / "Q" ) "=" qvalue` and yield the weight.
pub fn weight_producer() -> impl Producer<Output = Qvalue> {
    produce::<Qvalue, _>((
        ows(),
        symbol(';'),
        ows(),
        alternatives((symbol('q'), symbol('Q'))),
        symbol('='),
        qvalue_producer().as_result(),
    ))
}
