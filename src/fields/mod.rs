//! Typed values for specific HTTP header fields.
//!
//! Each value type exposes a `try_parse` constructor taking the raw bytes of
//! the field value (the header name and framing are the caller's concern)
//! and returning the structured form or a [`crate::parser::ParseError`].

mod accept;
mod cache_control;
mod content_disposition;
mod content_encoding;
mod content_type;
mod list;
mod media_type;
mod tests;

// Re-export public items
pub use accept::{AcceptItem, AcceptValue};
pub use cache_control::CacheControlValue;
pub use content_disposition::ContentDispositionValue;
pub use content_encoding::ContentEncodingValue;
pub use content_type::ContentTypeValue;
pub use list::{
    maybe_empty_comma_separated_list_producer, non_empty_comma_separated_list_producer,
};
pub use media_type::MediaTypeValue;
