//! The `Cache-Control` field value, RFC 7234 §5.2.

use serde::Serialize;

use crate::fields::list::non_empty_comma_separated_list_producer;
use crate::parser::{
    alternatives, maybe, produce, quoted_string_producer, symbol, token_producer, try_parse,
    ParseError, Producer,
};

/// A parsed `Cache-Control`: directives in their written order, names
/// ASCII-lowercased, values kept as written (unquoted when given as a
/// quoted-string). Duplicates are preserved.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CacheControlValue {
    pub directives: Vec<(String, Option<String>)>,
}

impl CacheControlValue {
    /// Parse the value of a `Cache-Control` field.
    pub fn try_parse(input: &[u8]) -> Result<Self, ParseError> {
        try_parse(input, cache_control_producer())
    }
}

fn cache_control_producer() -> impl Producer<Output = CacheControlValue> {
    produce::<CacheControlValue, _>((non_empty_comma_separated_list_producer::<
        Vec<(String, Option<String>)>,
        _,
    >(directive_producer())
    .set(|value: &mut CacheControlValue, directives| value.directives = directives),))
}

/// `token [ "=" ( token / quoted-string ) ]`.
fn directive_producer() -> impl Producer<Output = (String, Option<String>)> {
    produce::<(String, Option<String>), _>((
        token_producer()
            .to_lower()
            .set(|directive: &mut (String, Option<String>), name| directive.0 = name),
        produce::<Option<String>, _>((maybe((
            symbol('='),
            alternatives((
                token_producer().as_result(),
                quoted_string_producer().as_result(),
            )),
        )),))
        .set(|directive: &mut (String, Option<String>), value| directive.1 = value),
    ))
}
