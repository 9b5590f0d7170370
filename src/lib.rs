//! A combinator-based parser for HTTP header field values.
//!
//! This library provides a small parser-combinator engine with controlled
//! backtracking and, built on top of it, typed parsers for the common
//! header-value grammars of HTTP/1.1: `Media-Type`, `Content-Type`,
//! `Content-Encoding`, `Cache-Control`, `Accept` and `Content-Disposition`.
//!
//! # Features
//!
//! - Parse header field values from byte slices into plain owned values
//! - Grammar atoms (tokens, quoted-strings, symbols, quality values) and
//!   combinators (`sequence`, `alternatives`, `maybe`, `repeat`, lookaheads)
//!   for building custom field grammars
//! - Strict RFC 7230 list rules, including empty list elements
//! - Proper error handling with positions and caret-annotated descriptions
//! - No I/O, no shared state: safe to call from any number of threads
//!
//! # Examples
//!
//! ## Parsing a known header
//!
//! ```
//! use httpfield_rs::ContentTypeValue;
//!
//! let value = ContentTypeValue::try_parse(b"text/HTML; CharSet=utf-8").unwrap();
//!
//! assert_eq!(value.media_type.type_, "text");
//! assert_eq!(value.media_type.subtype, "html");
//! assert_eq!(value.media_type.parameters, vec![("charset".to_string(), "utf-8".to_string())]);
//! ```
//!
//! ## Building a grammar with the combinators
//!
//! ```
//! use httpfield_rs::parser::{produce, symbol, token_producer, try_parse, Producer};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Parameter {
//!     name: String,
//!     value: String,
//! }
//!
//! let producer = produce::<Parameter, _>((
//!     token_producer().set(|p: &mut Parameter, name| p.name = name),
//!     symbol('='),
//!     token_producer().set(|p: &mut Parameter, value| p.value = value),
//! ));
//!
//! let parameter = try_parse(b"charset=utf-8", producer).unwrap();
//! assert_eq!(parameter.name, "charset");
//! assert_eq!(parameter.value, "utf-8");
//! ```
//!
//! ## Error handling
//!
//! ```
//! use httpfield_rs::{describe_error, MediaTypeValue};
//!
//! let input = b"text/;charset=utf-8";
//!
//! match MediaTypeValue::try_parse(input) {
//!     Ok(value) => println!("parsed: {value:?}"),
//!     Err(error) => println!("{}", describe_error(&error, input)),
//! }
//! ```

// Export the parser engine
pub mod parser;

// Export the field grammars
pub mod fields;

// Re-export commonly used items for convenience
pub use fields::{
    AcceptItem, AcceptValue, CacheControlValue, ContentDispositionValue, ContentEncodingValue,
    ContentTypeValue, MediaTypeValue,
};
pub use parser::{describe_error, try_parse, ErrorKind, ParseError, Qvalue};
