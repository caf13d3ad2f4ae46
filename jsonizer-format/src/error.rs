//! Error types for Jsonizer

use crate::Format;
use thiserror::Error;

/// Jsonizer error types
#[derive(Debug, Error)]
pub enum JsonizerError {
    /// Input text is not well-formed for the requested format.
    #[error("{format} decode error: {message}")]
    Decode {
        /// Format the input was being decoded as
        format: Format,
        /// Message reported by the underlying codec
        message: String,
    },
    /// Payload cannot be represented in the requested format.
    #[error("{format} encode error: {message}")]
    Encode {
        /// Format the payload was being encoded as
        format: Format,
        /// Message reported by the underlying codec
        message: String,
    },
    /// Payload is not an object, or the object has no such key.
    #[error("Key not found: '{key}'")]
    KeyNotFound {
        /// Key that was looked up
        key: String,
    },
    /// Payload is not an array, or the index is outside its bounds.
    #[error("Index out of range or not an array: {index}")]
    IndexOutOfRange {
        /// Index that was looked up
        index: isize,
    },
    /// A configured decode limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    /// A configured limit is above its hard maximum.
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),
    /// Format name or file extension was not recognised.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}

impl JsonizerError {
    /// Build a decode error from any codec error
    pub fn decode(format: Format, err: impl std::fmt::Display) -> Self {
        JsonizerError::Decode {
            format,
            message: err.to_string(),
        }
    }

    /// Build an encode error from any codec error
    pub fn encode(format: Format, err: impl std::fmt::Display) -> Self {
        JsonizerError::Encode {
            format,
            message: err.to_string(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, JsonizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display_names_format() {
        let err = JsonizerError::decode(Format::Yaml, "unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "YAML decode error: unexpected end of stream"
        );
    }

    #[test]
    fn test_navigation_error_display() {
        let key = JsonizerError::KeyNotFound {
            key: "missing".to_string(),
        };
        assert_eq!(key.to_string(), "Key not found: 'missing'");

        let index = JsonizerError::IndexOutOfRange { index: -1 };
        assert_eq!(index.to_string(), "Index out of range or not an array: -1");
    }
}
