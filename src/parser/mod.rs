//! Combinator engine for HTTP field-value grammars.
//!
//! This module provides the parsing machinery the header grammars are built
//! from: an input [`Cursor`], producers that yield typed values, clauses that
//! bind those values into a target under construction, and the combinators
//! that sequence, choose and repeat them with controlled backtracking.

mod basics;
mod chars;
mod clause;
mod error;
mod input;
mod producer;
mod qvalue;

// Re-export public items
pub use basics::{
    ows, quoted_string_producer, symbol, symbol_producer, token_producer, Ows,
    QuotedStringProducer, Symbol, SymbolProducer, TokenProducer,
};
pub use chars::{is_alpha, is_digit, is_ows, is_qdtext, is_quoted_pair_char, is_tchar, is_vchar};
pub use clause::{
    alternatives, and_clause, maybe, not_clause, repeat, sequence, strict_repeat, Alternatives,
    AndClause, BranchList, Clause, Maybe, NotClause, Repeat, Sequence, N,
};
pub use error::{describe_error, ErrorKind, Expected, ParseError};
pub use input::{Cursor, Position};
pub use producer::{produce, Appendable, AsResult, Bind, Map, Produce, Producer, Skip, ToContainer};
pub use qvalue::{qvalue_producer, weight_producer, Qvalue, QvalueProducer};

use log::trace;

/// Run `producer` over the whole of `input`.
///
/// # Arguments
///
/// * `input` - The raw bytes of a header field value
/// * `producer` - The top-level producer for the expected grammar
///
/// # Returns
///
/// The produced value, or an error if the grammar did not match. The parse
/// succeeds only if the producer consumes every byte; leftover input is
/// reported as [`ErrorKind::TrailingInput`] at the offset where consumption
/// stopped.
pub fn try_parse<P>(input: &[u8], producer: P) -> Result<P::Output, ParseError>
where
    P: Producer,
{
    let mut cursor = Cursor::new(input);
    let outcome = producer.produce(&mut cursor).and_then(|value| {
        if cursor.eof() {
            Ok(value)
        } else {
            Err(ParseError::new(cursor.position(), ErrorKind::TrailingInput))
        }
    });
    if let Err(error) = &outcome {
        trace!("field value rejected: {}", describe_error(error, input));
    }
    outcome
}
