//! Tests for the header field grammars.

#[cfg(test)]
mod tests {
    use crate::fields::{
        maybe_empty_comma_separated_list_producer, non_empty_comma_separated_list_producer,
        AcceptValue, CacheControlValue, ContentDispositionValue, ContentEncodingValue,
        ContentTypeValue, MediaTypeValue,
    };
    use crate::parser::{produce, symbol, token_producer, try_parse, Producer, Qvalue};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(n, v)| (n.to_string(), v.to_string())).collect()
    }

    fn opt_pairs(items: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
        items
            .iter()
            .map(|(n, v)| (n.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_media_type_rejects_incomplete_values() {
        assert!(MediaTypeValue::try_parse(b"").is_err());
        assert!(MediaTypeValue::try_parse(b"text/").is_err());
        assert!(MediaTypeValue::try_parse(b"/plain").is_err());
        assert!(MediaTypeValue::try_parse(b"text/plain; charset").is_err());
    }

    #[test]
    fn test_media_type_simple() {
        let result = MediaTypeValue::try_parse(b"text/plain").unwrap();
        assert_eq!(result.type_, "text");
        assert_eq!(result.subtype, "plain");
        assert!(result.parameters.is_empty());
    }

    #[test]
    fn test_media_type_lowercases_type_and_subtype() {
        let result = MediaTypeValue::try_parse(b"TexT/pLAIn").unwrap();
        assert_eq!(result.type_, "text");
        assert_eq!(result.subtype, "plain");
        assert!(result.parameters.is_empty());

        // Case normalization is idempotent: both spellings parse equal.
        assert_eq!(
            MediaTypeValue::try_parse(b"TexT/pLAIn").unwrap(),
            MediaTypeValue::try_parse(b"text/plain").unwrap()
        );
    }

    #[test]
    fn test_media_type_with_parameters() {
        let result = MediaTypeValue::try_parse(
            b"text/*; CharSet=utf-8 ;    Alternative-Coding=\"Bla Bla Bla\"",
        )
        .unwrap();

        assert_eq!(result.type_, "text");
        assert_eq!(result.subtype, "*");
        assert_eq!(
            result.parameters,
            pairs(&[("charset", "utf-8"), ("alternative-coding", "Bla Bla Bla")])
        );
    }

    #[test]
    fn test_media_type_value_case_rules() {
        // Token parameter values are lowercased; quoted values are kept.
        let result = MediaTypeValue::try_parse(
            b"*/*;CharSet=utf-8;Alternative-Coding=\"Bla Bla Bla\";foO=BaZ",
        )
        .unwrap();

        assert_eq!(result.type_, "*");
        assert_eq!(result.subtype, "*");
        assert_eq!(
            result.parameters,
            pairs(&[
                ("charset", "utf-8"),
                ("alternative-coding", "Bla Bla Bla"),
                ("foo", "baz"),
            ])
        );
    }

    #[test]
    fn test_content_type() {
        let result = ContentTypeValue::try_parse(b"text/plain").unwrap();
        assert_eq!(result.media_type.type_, "text");
        assert_eq!(result.media_type.subtype, "plain");
        assert!(result.media_type.parameters.is_empty());

        let result = ContentTypeValue::try_parse(
            b"MultiPart/Form-Data; CharSet=utf-8; BOUNDARY=\"Text with space!\"",
        )
        .unwrap();
        assert_eq!(result.media_type.type_, "multipart");
        assert_eq!(result.media_type.subtype, "form-data");
        assert_eq!(
            result.media_type.parameters,
            pairs(&[("charset", "utf-8"), ("boundary", "Text with space!")])
        );
    }

    #[test]
    fn test_cache_control_rejects_empty_lists() {
        assert!(CacheControlValue::try_parse(b"").is_err());
        assert!(CacheControlValue::try_parse(b",").is_err());
        assert!(CacheControlValue::try_parse(b",, , ,   ,  ").is_err());
    }

    #[test]
    fn test_cache_control_single_directive() {
        let result = CacheControlValue::try_parse(b"max-age=5").unwrap();
        assert_eq!(result.directives, opt_pairs(&[("max-age", Some("5"))]));
    }

    #[test]
    fn test_cache_control_directive_list() {
        let result = CacheControlValue::try_parse(
            b"max-age=5, no-transform, only-if-cached, min-fresh=20",
        )
        .unwrap();

        assert_eq!(
            result.directives,
            opt_pairs(&[
                ("max-age", Some("5")),
                ("no-transform", None),
                ("only-if-cached", None),
                ("min-fresh", Some("20")),
            ])
        );
    }

    #[test]
    fn test_cache_control_tolerates_empty_elements() {
        let result = CacheControlValue::try_parse(
            b", ,  , max-age=5, ,,, no-transform, only-if-cached, min-fresh=20,,,,    ",
        )
        .unwrap();

        assert_eq!(
            result.directives,
            opt_pairs(&[
                ("max-age", Some("5")),
                ("no-transform", None),
                ("only-if-cached", None),
                ("min-fresh", Some("20")),
            ])
        );
    }

    #[test]
    fn test_cache_control_preserves_value_spelling() {
        let result = CacheControlValue::try_parse(b"No-Cache=\"Set-Cookie\", Private=FieldName")
            .unwrap();

        assert_eq!(
            result.directives,
            opt_pairs(&[("no-cache", Some("Set-Cookie")), ("private", Some("FieldName"))])
        );
    }

    #[test]
    fn test_content_encoding_rejects_empty_or_trailing_garbage() {
        assert!(ContentEncodingValue::try_parse(b"").is_err());
        assert!(ContentEncodingValue::try_parse(b"compress/").is_err());
    }

    #[test]
    fn test_content_encoding_single_coding() {
        let result = ContentEncodingValue::try_parse(b"compress").unwrap();
        assert_eq!(result.values, vec!["compress"]);

        let result = ContentEncodingValue::try_parse(b"X-Compress").unwrap();
        assert_eq!(result.values, vec!["x-compress"]);
    }

    #[test]
    fn test_content_encoding_list() {
        let result = ContentEncodingValue::try_parse(b"gzip, X-Compress  ,     deflate").unwrap();
        assert_eq!(result.values, vec!["gzip", "x-compress", "deflate"]);

        assert_eq!(
            ContentEncodingValue::try_parse(b"GZIP, x-CoMpReSs").unwrap(),
            ContentEncodingValue::try_parse(b"gzip, x-compress").unwrap()
        );
    }

    #[test]
    fn test_accept_empty_value_is_valid() {
        let result = AcceptValue::try_parse(b"").unwrap();
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_accept_rejects_malformed_ranges() {
        assert!(AcceptValue::try_parse(b"text/").is_err());
        assert!(AcceptValue::try_parse(b"/plain").is_err());
    }

    #[test]
    fn test_accept_single_item() {
        let result = AcceptValue::try_parse(b"text/plain").unwrap();
        assert_eq!(result.items.len(), 1);

        let item = &result.items[0];
        assert_eq!(item.media_type.type_, "text");
        assert_eq!(item.media_type.subtype, "plain");
        assert!(item.media_type.parameters.is_empty());
        assert_eq!(item.weight, None);
        assert!(item.accept_params.is_empty());
    }

    #[test]
    fn test_accept_item_with_parameters() {
        let result = AcceptValue::try_parse(
            b"text/*; CharSet=utf-8 ;    Alternative-Coding=\"Bla Bla Bla\"",
        )
        .unwrap();
        assert_eq!(result.items.len(), 1);

        let item = &result.items[0];
        assert_eq!(item.media_type.type_, "text");
        assert_eq!(item.media_type.subtype, "*");
        assert_eq!(
            item.media_type.parameters,
            pairs(&[("charset", "utf-8"), ("alternative-coding", "Bla Bla Bla")])
        );
    }

    #[test]
    fn test_accept_multiple_items() {
        let result =
            AcceptValue::try_parse(b"text/*;CharSet=utf-8, application/json;charset=cp1251")
                .unwrap();
        assert_eq!(result.items.len(), 2);

        assert_eq!(result.items[0].media_type.type_, "text");
        assert_eq!(result.items[0].media_type.subtype, "*");
        assert_eq!(result.items[0].media_type.parameters, pairs(&[("charset", "utf-8")]));

        assert_eq!(result.items[1].media_type.type_, "application");
        assert_eq!(result.items[1].media_type.subtype, "json");
        assert_eq!(result.items[1].media_type.parameters, pairs(&[("charset", "cp1251")]));
    }

    #[test]
    fn test_accept_weight_and_extensions() {
        let result = AcceptValue::try_parse(
            b"text/plain;q=0.5;signed;signature-method=sha512, \
              text/*;CharSet=utf-8, \
              application/json;charset=cp1251",
        )
        .unwrap();
        assert_eq!(result.items.len(), 3);

        let item = &result.items[0];
        assert_eq!(item.media_type.type_, "text");
        assert_eq!(item.media_type.subtype, "plain");
        assert!(item.media_type.parameters.is_empty());
        assert_eq!(item.weight, Some(Qvalue::from_millis(500).unwrap()));
        assert_eq!(
            item.accept_params,
            opt_pairs(&[("signed", None), ("signature-method", Some("sha512"))])
        );

        let item = &result.items[1];
        assert_eq!(item.media_type.type_, "text");
        assert_eq!(item.media_type.subtype, "*");
        assert_eq!(item.media_type.parameters, pairs(&[("charset", "utf-8")]));
        assert_eq!(item.weight, None);

        let item = &result.items[2];
        assert_eq!(item.media_type.type_, "application");
        assert_eq!(item.media_type.subtype, "json");
        assert_eq!(item.media_type.parameters, pairs(&[("charset", "cp1251")]));
        assert_eq!(item.weight, None);
    }

    #[test]
    fn test_content_disposition_bare_type() {
        let result = ContentDispositionValue::try_parse(b"form-data").unwrap();
        assert_eq!(result.value, "form-data");
        assert!(result.parameters.is_empty());

        assert_eq!(
            ContentDispositionValue::try_parse(b"Form-Data").unwrap(),
            ContentDispositionValue::try_parse(b"form-data").unwrap()
        );
    }

    #[test]
    fn test_content_disposition_with_parameters() {
        let result = ContentDispositionValue::try_parse(b"form-data; name=some-name").unwrap();
        assert_eq!(result.value, "form-data");
        assert_eq!(result.parameters, pairs(&[("name", "some-name")]));

        let result = ContentDispositionValue::try_parse(
            b"form-data; name=some-name  ;  filename=\"file\"",
        )
        .unwrap();
        assert_eq!(result.value, "form-data");
        assert_eq!(result.parameters, pairs(&[("name", "some-name"), ("filename", "file")]));
    }

    #[test]
    fn test_content_disposition_extended_parameter_names() {
        let result = ContentDispositionValue::try_parse(
            b"form-data; name=some-name  ;  filename=\"file\";filename*=utf-8''another-name",
        )
        .unwrap();
        assert_eq!(result.value, "form-data");
        assert_eq!(
            result.parameters,
            pairs(&[
                ("name", "some-name"),
                ("filename", "file"),
                ("filename*", "utf-8''another-name"),
            ])
        );
    }

    #[test]
    fn test_content_disposition_keeps_raw_extended_value() {
        let result = ContentDispositionValue::try_parse(
            b"form-data; name=some-name;filename*=utf-8'en-US'Yet%20another%20name",
        )
        .unwrap();
        assert_eq!(result.value, "form-data");
        assert_eq!(
            result.parameters,
            pairs(&[("name", "some-name"), ("filename*", "utf-8'en-US'Yet%20another%20name")])
        );
    }

    fn media_pair_producer() -> impl Producer<Output = (String, String)> {
        produce::<(String, String), _>((
            token_producer()
                .to_lower()
                .set(|pair: &mut (String, String), kind| pair.0 = kind),
            symbol('/'),
            token_producer()
                .to_lower()
                .set(|pair: &mut (String, String), subtype| pair.1 = subtype),
        ))
    }

    #[test]
    fn test_non_empty_list_producer() {
        let parse = |input: &[u8]| {
            try_parse(
                input,
                non_empty_comma_separated_list_producer::<Vec<(String, String)>, _>(
                    media_pair_producer(),
                ),
            )
        };

        assert!(parse(b"").is_err());
        assert!(parse(b",").is_err());
        assert!(parse(b",,,,").is_err());
        assert!(parse(b",  ,     ,    ,  ").is_err());

        assert_eq!(parse(b"text/plain").unwrap(), pairs(&[("text", "plain")]));
        assert_eq!(parse(b", ,text/plain").unwrap(), pairs(&[("text", "plain")]));
        assert_eq!(
            parse(b", , text/plain , */*,, ,  ,   text/*,").unwrap(),
            pairs(&[("text", "plain"), ("*", "*"), ("text", "*")])
        );
    }

    #[test]
    fn test_maybe_empty_list_producer() {
        let parse = |input: &[u8]| {
            try_parse(
                input,
                maybe_empty_comma_separated_list_producer::<Vec<(String, String)>, _>(
                    media_pair_producer(),
                ),
            )
        };

        assert_eq!(parse(b"").unwrap(), vec![]);
        assert_eq!(parse(b",").unwrap(), vec![]);
        assert_eq!(parse(b",,,,").unwrap(), vec![]);
        assert_eq!(parse(b",  ,     ,    ,  ").unwrap(), vec![]);

        assert_eq!(parse(b"text/plain").unwrap(), pairs(&[("text", "plain")]));
        assert_eq!(parse(b", ,text/plain").unwrap(), pairs(&[("text", "plain")]));
        assert_eq!(
            parse(b", , text/plain , */*,, ,  ,   text/*,").unwrap(),
            pairs(&[("text", "plain"), ("*", "*"), ("text", "*")])
        );
    }

    #[test]
    fn test_parsed_values_serialize() {
        let value = ContentTypeValue::try_parse(b"text/plain; charset=utf-8").unwrap();
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "media_type": {
                    "type": "text",
                    "subtype": "plain",
                    "parameters": [["charset", "utf-8"]],
                }
            })
        );

        let value = AcceptValue::try_parse(b"text/html;q=0.7").unwrap();
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{
                    "media_type": { "type": "text", "subtype": "html", "parameters": [] },
                    "weight": 700,
                    "accept_params": [],
                }]
            })
        );
    }
}
