//! The `Accept` field value, RFC 7231 §5.3.2.

use serde::Serialize;

use crate::fields::list::maybe_empty_comma_separated_list_producer;
use crate::fields::media_type::{parameter_producer, MediaTypeValue};
use crate::parser::{
    alternatives, maybe, not_clause, ows, produce, quoted_string_producer, repeat, symbol,
    token_producer, try_parse, weight_producer, ParseError, Producer, Qvalue, N,
};

/// One element of an `Accept` list: a media range, an optional weight, and
/// any accept extensions that followed the weight.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptItem {
    pub media_type: MediaTypeValue,
    pub weight: Option<Qvalue>,
    pub accept_params: Vec<(String, Option<String>)>,
}

/// A parsed `Accept` field. The list may be empty: an empty field value is
/// valid and yields no items.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptValue {
    pub items: Vec<AcceptItem>,
}

impl AcceptValue {
    /// Parse the value of an `Accept` field.
    pub fn try_parse(input: &[u8]) -> Result<Self, ParseError> {
        try_parse(input, accept_producer())
    }
}

fn accept_producer() -> impl Producer<Output = AcceptValue> {
    produce::<AcceptValue, _>((maybe_empty_comma_separated_list_producer::<
        Vec<AcceptItem>,
        _,
    >(accept_item_producer())
    .set(|value: &mut AcceptValue, items| value.items = items),))
}

/// `media-range [ weight *( accept-ext ) ]`.
fn accept_item_producer() -> impl Producer<Output = AcceptItem> {
    produce::<AcceptItem, _>((
        media_range_producer()
            .set(|item: &mut AcceptItem, media_type| item.media_type = media_type),
        maybe((
            weight_producer().set(|item: &mut AcceptItem, weight| item.weight = Some(weight)),
            produce::<Vec<(String, Option<String>)>, _>((
                repeat(0, N, (accept_ext_producer().to_container(),)),
            ))
            .set(|item: &mut AcceptItem, params| item.accept_params = params),
        )),
    ))
}

/// Like the plain media-type grammar, except the parameter run must stop in
/// front of the weight (`OWS ";" OWS ( "q" / "Q" ) "="`), which separates
/// media-range parameters from accept extensions.
fn media_range_producer() -> impl Producer<Output = MediaTypeValue> {
    produce::<MediaTypeValue, _>((
        token_producer()
            .to_lower()
            .set(|value: &mut MediaTypeValue, kind| value.type_ = kind),
        symbol('/'),
        token_producer()
            .to_lower()
            .set(|value: &mut MediaTypeValue, subtype| value.subtype = subtype),
        produce::<Vec<(String, String)>, _>((repeat(
            0,
            N,
            (
                not_clause((
                    ows(),
                    symbol(';'),
                    ows(),
                    alternatives((symbol('q'), symbol('Q'))),
                    symbol('='),
                )),
                parameter_producer().to_container(),
            ),
        ),))
        .set(|value: &mut MediaTypeValue, parameters| value.parameters = parameters),
    ))
}

/// `OWS ";" OWS token [ "=" ( token / quoted-string ) ]`. Extension values
/// are kept as written.
fn accept_ext_producer() -> impl Producer<Output = (String, Option<String>)> {
    produce::<(String, Option<String>), _>((
        ows(),
        symbol(';'),
        ows(),
        token_producer()
            .to_lower()
            .set(|ext: &mut (String, Option<String>), name| ext.0 = name),
        produce::<Option<String>, _>((maybe((
            symbol('='),
            alternatives((
                token_producer().as_result(),
                quoted_string_producer().as_result(),
            )),
        )),))
        .set(|ext: &mut (String, Option<String>), value| ext.1 = value),
    ))
}
