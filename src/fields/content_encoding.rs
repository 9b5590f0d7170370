//! The `Content-Encoding` field value, RFC 7231 §3.1.2.2.

use serde::Serialize;

use crate::fields::list::non_empty_comma_separated_list_producer;
use crate::parser::{produce, token_producer, try_parse, ParseError, Producer};

/// A parsed `Content-Encoding`: one or more coding names, in the order they
/// were applied. Codings are ASCII-lowercased. An empty value is rejected.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ContentEncodingValue {
    pub values: Vec<String>,
}

impl ContentEncodingValue {
    /// Parse the value of a `Content-Encoding` field.
    pub fn try_parse(input: &[u8]) -> Result<Self, ParseError> {
        try_parse(input, content_encoding_producer())
    }
}

fn content_encoding_producer() -> impl Producer<Output = ContentEncodingValue> {
    produce::<ContentEncodingValue, _>((non_empty_comma_separated_list_producer::<
        Vec<String>,
        _,
    >(token_producer().to_lower())
    .set(|value: &mut ContentEncodingValue, values| value.values = values),))
}
