//! Property-based tests for document navigation and format round trips

use jsonizer::{Document, Format, JsonizerError};
use jsonizer_test_utils::assertions::numerically_equal;
use jsonizer_test_utils::strategies::{arb_array, arb_json, arb_key, arb_object_with_key, arb_scalar};
use proptest::prelude::*;
use serde_json::Value;

proptest! {
    #[test]
    fn json_roundtrip_property(value in arb_json()) {
        let doc = Document::new(value.clone());
        let text = doc.to_json_string().unwrap();
        let back = Document::parse_json(&text).unwrap();
        prop_assert!(numerically_equal(back.value(), &value));
    }

    #[test]
    fn yaml_roundtrip_property(value in arb_json()) {
        let doc = Document::new(value.clone());
        let text = doc.to_yaml_string().unwrap();
        let back = Document::parse_yaml(&text).unwrap();
        prop_assert!(numerically_equal(back.value(), &value));
    }

    #[test]
    fn pretty_and_compact_json_agree_property(value in arb_json()) {
        let doc = Document::new(value);
        let compact = Document::parse_json(&doc.to_json_string().unwrap()).unwrap();
        let pretty = Document::parse_json(&format!("{doc:#}")).unwrap();
        prop_assert_eq!(compact, pretty);
    }

    #[test]
    fn get_present_key_property((map, key) in arb_object_with_key()) {
        let expected = map[&key].clone();
        let doc = Document::new(Value::Object(map));
        let found = doc.get(&key).unwrap();
        prop_assert_eq!(found.value(), &expected);
    }

    #[test]
    fn get_absent_key_property((map, key) in arb_object_with_key(), suffix in arb_key()) {
        let absent = format!("{key}#{suffix}");
        let doc = Document::new(Value::Object(map));
        let is_key_not_found = matches!(
            doc.get(&absent),
            Err(JsonizerError::KeyNotFound { .. })
        );
        prop_assert!(is_key_not_found);
    }

    #[test]
    fn array_get_bounds_property(items in arb_array(), index in -32isize..32) {
        let len = items.len() as isize;
        let doc = Document::new(Value::Array(items.clone()));
        match doc.array_get(index) {
            Ok(view) => {
                prop_assert!(index >= 0 && index < len);
                prop_assert_eq!(view.value(), &items[index as usize]);
            }
            Err(JsonizerError::IndexOutOfRange { index: got }) => {
                prop_assert!(index < 0 || index >= len);
                prop_assert_eq!(got, index);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    #[test]
    fn scalars_never_navigate_property(
        value in arb_scalar(),
        key in arb_key(),
        index in any::<isize>()
    ) {
        let doc = Document::new(value);
        prop_assert!(doc.get(&key).is_err());
        prop_assert!(doc.array_get(index).is_err());
    }

    #[test]
    fn parse_by_format_matches_named_parser_property(value in arb_json()) {
        let doc = Document::new(value);
        for format in [Format::Json, Format::Yaml] {
            let text = doc.encode(format).unwrap();
            let named = match format {
                Format::Json => Document::parse_json(&text).unwrap(),
                Format::Yaml => Document::parse_yaml(&text).unwrap(),
                Format::Xml => unreachable!(),
            };
            prop_assert_eq!(Document::parse(format, &text).unwrap(), named);
        }
    }
}
