//! The RFC 7230 `#` and `1#` comma-separated list rules.
//!
//! Both rules tolerate empty elements and surrounding optional whitespace,
//! so `, , a ,,b,` holds exactly the elements `a` and `b`. The `1#` form
//! requires at least one real element; the `#` form also accepts input made
//! of separators only, yielding an empty container.

use crate::parser::{maybe, ows, produce, repeat, symbol, Appendable, Producer, N};

/// `1#element`: a comma-separated list with at least one real element.
pub fn non_empty_comma_separated_list_producer<C, P>(element: P) -> impl Producer<Output = C>
where
    C: Appendable<Item = P::Output> + Default + Clone,
    P: Producer,
{
    produce::<C, _>((
        repeat(0, N, (symbol(','), ows())),
        element.clone().to_container(),
        repeat(0, N, (ows(), symbol(','), ows(), maybe((element.to_container(),)))),
    ))
}

/// `#element`: as the non-empty rule, but separator-only or empty input is
/// accepted and yields an empty container.
pub fn maybe_empty_comma_separated_list_producer<C, P>(element: P) -> impl Producer<Output = C>
where
    C: Appendable<Item = P::Output> + Default + Clone,
    P: Producer,
{
    produce::<C, _>((maybe((
        repeat(0, N, (symbol(','), ows())),
        maybe((element.clone().to_container(),)),
        repeat(0, N, (ows(), symbol(','), ows(), maybe((element.to_container(),)))),
    )),))
}
