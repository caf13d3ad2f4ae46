//! Jsonizer Format - Core primitives for the Jsonizer document wrapper
//!
//! This crate provides the pieces shared by every codec with no codec
//! dependencies of its own. It includes:
//!
//! - Error types
//! - Text format identifiers
//! - Value kind tags
//! - Decode limits

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used types
pub use error::{JsonizerError, Result};
pub use limits::{Limits, PARSER_RECURSION_LIMIT};
pub use types::ValueKind;

use std::fmt;
use std::str::FromStr;

/// Text formats a document can be decoded from and encoded to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON (RFC 8259)
    Json,
    /// XML 1.0
    Xml,
    /// YAML 1.2
    Yaml,
}

impl Format {
    /// All supported formats
    pub const ALL: [Format; 3] = [Format::Json, Format::Xml, Format::Yaml];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
        }
    }

    /// Preferred file extension (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
        }
    }

    /// Resolve a file extension, with or without a leading dot
    pub fn from_extension(ext: &str) -> Result<Self> {
        ext.trim_start_matches('.').parse()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            Format::Xml => f.write_str("XML"),
            Format::Yaml => f.write_str("YAML"),
        }
    }
}

impl FromStr for Format {
    type Err = JsonizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(JsonizerError::UnknownFormat(s.to_string())),
        }
    }
}
