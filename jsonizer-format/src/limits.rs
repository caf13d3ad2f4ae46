//! Decode limits and configuration

use crate::error::{JsonizerError, Result};
use serde_json::Value;

/// Deepest container nesting every parser accepts
///
/// `serde_json` fails on its 128th nested level and `serde_yaml` on its
/// 129th, both with a decode error, so depth limits above this could never
/// be reached.
pub const PARSER_RECURSION_LIMIT: usize = 127;

/// Limits applied while decoding untrusted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input length in bytes (default: 64 MiB, hard: 256 MiB)
    pub max_input_bytes: usize,
    /// Maximum container nesting depth of the decoded tree (default: 127, hard: 127)
    ///
    /// The hard maximum is [`PARSER_RECURSION_LIMIT`], the ceiling the JSON
    /// and YAML parsers impose on their own.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: 64 * 1024 * 1024,
            max_depth: PARSER_RECURSION_LIMIT,
        }
    }
}

impl Limits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_input_bytes: 256 * 1024 * 1024,
            max_depth: PARSER_RECURSION_LIMIT,
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_input_bytes > hard.max_input_bytes {
            return Err(JsonizerError::InvalidLimits(format!(
                "max_input_bytes {} exceeds hard limit {}",
                self.max_input_bytes, hard.max_input_bytes
            )));
        }

        if self.max_depth > hard.max_depth {
            return Err(JsonizerError::InvalidLimits(format!(
                "max_depth {} exceeds hard limit {}",
                self.max_depth, hard.max_depth
            )));
        }

        Ok(())
    }

    /// Reject input text longer than `max_input_bytes`
    pub fn check_input_len(&self, len: usize) -> Result<()> {
        if len > self.max_input_bytes {
            return Err(JsonizerError::LimitExceeded(format!(
                "input is {} bytes (max: {})",
                len, self.max_input_bytes
            )));
        }
        Ok(())
    }

    /// Reject decoded trees nested deeper than `max_depth`
    pub fn check_depth(&self, value: &Value) -> Result<()> {
        let depth = nesting_depth(value);
        if depth > self.max_depth {
            return Err(JsonizerError::LimitExceeded(format!(
                "nesting depth {} (max: {})",
                depth, self.max_depth
            )));
        }
        Ok(())
    }
}

/// Number of nested containers on the deepest path of `value`.
///
/// Scalars have depth 0, `[]` and `{}` have depth 1, `[[1]]` has depth 2.
pub fn nesting_depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack: Vec<(&Value, usize)> = vec![(value, 0)];

    while let Some((current, depth)) = stack.pop() {
        match current {
            Value::Array(items) => {
                max = max.max(depth + 1);
                stack.extend(items.iter().map(|v| (v, depth + 1)));
            }
            Value::Object(map) => {
                max = max.max(depth + 1);
                stack.extend(map.values().map(|v| (v, depth + 1)));
            }
            _ => {}
        }
    }

    max
}
