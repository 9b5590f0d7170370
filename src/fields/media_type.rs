//! The `Media-Type` field value, RFC 7231 §3.1.1.1.

use serde::Serialize;

use crate::parser::{
    alternatives, ows, produce, quoted_string_producer, repeat, symbol, token_producer, try_parse,
    ParseError, Producer, N,
};

/// A parsed media type: `type "/" subtype *( OWS ";" OWS parameter )`.
///
/// Type, subtype and parameter names are ASCII-lowercased. Parameter values
/// given as tokens are lowercased too; quoted-string values are stored
/// unquoted, with escapes resolved, otherwise as written.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MediaTypeValue {
    #[serde(rename = "type")]
    pub type_: String,
    pub subtype: String,
    pub parameters: Vec<(String, String)>,
}

impl MediaTypeValue {
    /// Parse the value of a `Media-Type` field.
    pub fn try_parse(input: &[u8]) -> Result<Self, ParseError> {
        try_parse(input, media_type_producer())
    }
}

pub(crate) fn media_type_producer() -> impl Producer<Output = MediaTypeValue> {
    produce::<MediaTypeValue, _>((
        token_producer()
            .to_lower()
            .set(|value: &mut MediaTypeValue, kind| value.type_ = kind),
        symbol('/'),
        token_producer()
            .to_lower()
            .set(|value: &mut MediaTypeValue, subtype| value.subtype = subtype),
        produce::<Vec<(String, String)>, _>((
            repeat(0, N, (parameter_producer().to_container(),)),
        ))
        .set(|value: &mut MediaTypeValue, parameters| value.parameters = parameters),
    ))
}

/// `OWS ";" OWS token "=" ( token / quoted-string )`.
pub(crate) fn parameter_producer() -> impl Producer<Output = (String, String)> {
    produce::<(String, String), _>((
        ows(),
        symbol(';'),
        ows(),
        token_producer()
            .to_lower()
            .set(|parameter: &mut (String, String), name| parameter.0 = name),
        symbol('='),
        produce::<String, _>((alternatives((
            token_producer().to_lower().as_result(),
            quoted_string_producer().as_result(),
        )),))
        .set(|parameter: &mut (String, String), value| parameter.1 = value),
    ))
}
