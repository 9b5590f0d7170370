//! The `Content-Type` field value, RFC 7231 §3.1.1.5.

use serde::Serialize;

use crate::fields::media_type::{media_type_producer, MediaTypeValue};
use crate::parser::{produce, try_parse, ParseError, Producer};

/// A parsed `Content-Type`: a single media type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeValue {
    pub media_type: MediaTypeValue,
}

impl ContentTypeValue {
    /// Parse the value of a `Content-Type` field.
    pub fn try_parse(input: &[u8]) -> Result<Self, ParseError> {
        try_parse(input, content_type_producer())
    }
}

fn content_type_producer() -> impl Producer<Output = ContentTypeValue> {
    produce::<ContentTypeValue, _>((media_type_producer()
        .set(|value: &mut ContentTypeValue, media_type| value.media_type = media_type),))
}
