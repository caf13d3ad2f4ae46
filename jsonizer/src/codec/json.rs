//! JSON codec

use jsonizer_format::{Format, JsonizerError, Result};
use serde::Serialize;
use serde_json::Value;

/// Decode JSON text into a payload
pub fn decode(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| JsonizerError::decode(Format::Json, e))
}

/// Encode a payload as compact or pretty-printed JSON
pub fn encode(value: &Value, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|e| JsonizerError::encode(Format::Json, e))
}

/// Convert any serializable value into a payload
///
/// Fails when the value has no JSON representation, for example a map whose
/// keys are not strings or integers.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| JsonizerError::encode(Format::Json, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn decode_object() {
        let value = decode(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [true, null, "x"]}));
    }

    #[test]
    fn decode_rejects_malformed() {
        let err = decode(r#"{"a": }"#).unwrap_err();
        assert!(matches!(
            err,
            JsonizerError::Decode {
                format: Format::Json,
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_trailing_content() {
        assert!(decode("[1, 2] 3").is_err());
    }

    #[test]
    fn encode_compact_and_pretty() {
        let value = json!({"a": [1, 2]});
        assert_eq!(encode(&value, false).unwrap(), r#"{"a":[1,2]}"#);

        let pretty = encode(&value, true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(decode(&pretty).unwrap(), value);
    }

    #[test]
    fn to_value_rejects_non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), "pair");

        let err = to_value(&map).unwrap_err();
        assert!(matches!(
            err,
            JsonizerError::Encode {
                format: Format::Json,
                ..
            }
        ));
    }

    #[test]
    fn to_value_accepts_integer_keys() {
        let mut map = BTreeMap::new();
        map.insert(7u32, "seven");
        assert_eq!(to_value(&map).unwrap(), json!({"7": "seven"}));
    }
}
