//! Jsonizer - Dynamic documents with JSON, XML, and YAML conversions
//!
//! This crate provides the user-facing layer of Jsonizer:
//!
//! - [`Document`], an owned untyped payload, and [`DocumentView`], a borrowed
//!   view into one
//! - Key and index navigation
//! - Decoding from and encoding to JSON, XML, and YAML text
//! - Decode limits and encode options
//!
//! ```
//! use jsonizer::{Document, Format};
//!
//! let doc = Document::parse_json(r#"{"a": 1, "b": [true, null, "x"]}"#)?;
//! assert_eq!(doc.get("b")?.array_get(2)?.to_json_string()?, r#""x""#);
//!
//! let yaml = doc.encode(Format::Yaml)?;
//! assert_eq!(Document::parse_yaml(&yaml)?, doc);
//! # Ok::<(), jsonizer::JsonizerError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod document;

// Re-export commonly used types
pub use document::{Document, DocumentView};
pub use jsonizer_format::{
    Format, JsonizerError, Limits, Result, ValueKind, PARSER_RECURSION_LIMIT,
};

use serde_json::Value;
use tracing::{debug, warn};

/// Decoding options
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Limits applied to the input text and the decoded tree
    pub limits: Limits,
}

/// Encoding options
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Pretty-print JSON output (ignored by XML and YAML)
    pub pretty: bool,
    /// Name of the XML root element
    pub xml_root: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            xml_root: codec::xml::DEFAULT_ROOT.to_string(),
        }
    }
}

/// Decode `text` as `format` into a payload, enforcing `opts.limits`
pub fn decode(format: Format, text: &str, opts: &DecodeOptions) -> Result<Value> {
    opts.limits.validate()?;

    if let Err(err) = opts.limits.check_input_len(text.len()) {
        warn!(%format, bytes = text.len(), error = %err, "rejected oversized input");
        return Err(err);
    }

    let decoded = match format {
        Format::Json => codec::json::decode(text),
        Format::Xml => codec::xml::decode(text, opts.limits.max_depth),
        Format::Yaml => codec::yaml::decode(text),
    };

    let value = decoded.map_err(|err| {
        if matches!(err, JsonizerError::LimitExceeded(_)) {
            warn!(%format, error = %err, "rejected deeply nested document");
        } else {
            debug!(%format, bytes = text.len(), error = %err, "decode failed");
        }
        err
    })?;

    if let Err(err) = opts.limits.check_depth(&value) {
        warn!(%format, error = %err, "rejected deeply nested document");
        return Err(err);
    }

    debug!(
        %format,
        bytes = text.len(),
        kind = %ValueKind::of(&value),
        "decoded document"
    );
    Ok(value)
}

/// Encode a payload as `format` text
pub fn encode(format: Format, value: &Value, opts: &EncodeOptions) -> Result<String> {
    let encoded = match format {
        Format::Json => codec::json::encode(value, opts.pretty),
        Format::Xml => codec::xml::encode(value, &opts.xml_root),
        Format::Yaml => codec::yaml::encode(value),
    };

    let text = encoded.map_err(|err| {
        debug!(%format, kind = %ValueKind::of(value), error = %err, "encode failed");
        err
    })?;

    debug!(
        %format,
        bytes = text.len(),
        kind = %ValueKind::of(value),
        "encoded document"
    );
    Ok(text)
}

/// Decode `text` as `from` and re-encode it as `to`
pub fn convert(from: Format, to: Format, text: &str) -> Result<String> {
    let value = decode(from, text, &DecodeOptions::default())?;
    encode(to, &value, &EncodeOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_options_default() {
        let opts = EncodeOptions::default();
        assert!(!opts.pretty);
        assert_eq!(opts.xml_root, "root");
    }

    #[test]
    fn test_decode_dispatches_by_format() {
        let opts = DecodeOptions::default();
        assert_eq!(
            decode(Format::Json, r#"{"a": 1}"#, &opts).unwrap(),
            json!({"a": 1})
        );
        assert_eq!(decode(Format::Yaml, "a: 1\n", &opts).unwrap(), json!({"a": 1}));
        assert_eq!(
            decode(Format::Xml, "<root><a>1</a></root>", &opts).unwrap()["a"]["$text"],
            "1"
        );
    }

    #[test]
    fn test_decode_rejects_oversized_input() {
        let opts = DecodeOptions {
            limits: Limits {
                max_input_bytes: 8,
                ..Limits::default()
            },
        };
        let err = decode(Format::Json, r#"{"key": "long value"}"#, &opts).unwrap_err();
        assert!(matches!(err, JsonizerError::LimitExceeded(_)));
    }

    #[test]
    fn test_decode_rejects_deep_nesting() {
        let opts = DecodeOptions {
            limits: Limits {
                max_depth: 2,
                ..Limits::default()
            },
        };
        assert!(decode(Format::Json, "[[1]]", &opts).is_ok());

        let err = decode(Format::Yaml, "a:\n  b:\n    c: 1\n", &opts).unwrap_err();
        assert!(matches!(err, JsonizerError::LimitExceeded(_)));
    }

    #[test]
    fn test_decode_rejects_deep_xml_before_building_it() {
        let opts = DecodeOptions {
            limits: Limits {
                max_depth: 2,
                ..Limits::default()
            },
        };
        assert!(decode(Format::Xml, "<root><a>1</a></root>", &opts).is_ok());

        let err = decode(Format::Xml, "<root><a><b>1</b></a></root>", &opts).unwrap_err();
        assert!(matches!(err, JsonizerError::LimitExceeded(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_limits() {
        let opts = DecodeOptions {
            limits: Limits {
                max_depth: usize::MAX,
                ..Limits::default()
            },
        };
        let err = decode(Format::Json, "1", &opts).unwrap_err();
        assert!(matches!(err, JsonizerError::InvalidLimits(_)));
    }

    #[test]
    fn test_encode_pretty_json() {
        let opts = EncodeOptions {
            pretty: true,
            ..EncodeOptions::default()
        };
        let text = encode(Format::Json, &json!({"a": [1]}), &opts).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_convert_json_to_yaml() {
        let yaml = convert(Format::Json, Format::Yaml, r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(
            decode(Format::Yaml, &yaml, &DecodeOptions::default()).unwrap(),
            json!({"a": [1, 2]})
        );
    }

    #[test]
    fn test_convert_propagates_decode_error() {
        let err = convert(Format::Yaml, Format::Json, "key: [1, 2").unwrap_err();
        assert!(matches!(
            err,
            JsonizerError::Decode {
                format: Format::Yaml,
                ..
            }
        ));
    }
}
