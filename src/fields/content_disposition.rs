//! The `Content-Disposition` field value, RFC 6266.

use serde::Serialize;

use crate::parser::{
    alternatives, ows, produce, quoted_string_producer, repeat, symbol, token_producer, try_parse,
    ParseError, Producer, N,
};

/// A parsed `Content-Disposition`: the disposition type (lowercased) and its
/// parameters in written order.
///
/// Extended-syntax names such as `filename*` keep their trailing asterisk,
/// and their RFC 5987 `charset'language'value` triple is captured verbatim;
/// decoding the percent-encoding is the caller's concern.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ContentDispositionValue {
    pub value: String,
    pub parameters: Vec<(String, String)>,
}

impl ContentDispositionValue {
    /// Parse the value of a `Content-Disposition` field.
    pub fn try_parse(input: &[u8]) -> Result<Self, ParseError> {
        try_parse(input, content_disposition_producer())
    }
}

fn content_disposition_producer() -> impl Producer<Output = ContentDispositionValue> {
    produce::<ContentDispositionValue, _>((
        token_producer()
            .to_lower()
            .set(|value: &mut ContentDispositionValue, disposition| value.value = disposition),
        produce::<Vec<(String, String)>, _>((repeat(
            0,
            N,
            (disposition_parameter_producer().to_container(),),
        ),))
        .set(|value: &mut ContentDispositionValue, parameters| value.parameters = parameters),
    ))
}

/// `OWS ";" OWS token "=" ( token / quoted-string )`. Names are lowercased,
/// values kept as written.
fn disposition_parameter_producer() -> impl Producer<Output = (String, String)> {
    produce::<(String, String), _>((
        ows(),
        symbol(';'),
        ows(),
        token_producer()
            .to_lower()
            .set(|parameter: &mut (String, String), name| parameter.0 = name),
        symbol('='),
        produce::<String, _>((alternatives((
            token_producer().as_result(),
            quoted_string_producer().as_result(),
        )),))
        .set(|parameter: &mut (String, String), value| parameter.1 = value),
    ))
}
