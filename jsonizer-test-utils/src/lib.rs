//! Jsonizer Test Utilities
//!
//! This crate provides shared testing utilities and helpers for the Jsonizer project.

use serde_json::{Map, Value};

pub mod strategies;

/// Builder for creating test documents with common patterns
pub struct DocumentBuilder {
    fields: Map<String, Value>,
}

impl DocumentBuilder {
    /// Create a new document builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a field with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Add a field with a float value
    pub fn float(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Add a field with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Null);
        self
    }

    /// Add a field with an object value
    pub fn object(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a field with an array value
    pub fn array(mut self, key: &str, value: Vec<Value>) -> Self {
        self.fields.insert(key.to_string(), Value::Array(value));
        self
    }

    /// Build the document payload
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate test payloads with various patterns
pub struct TestDataGenerator;

impl TestDataGenerator {
    /// A payload mixing every value kind at the top level
    pub fn mixed_document() -> Value {
        DocumentBuilder::new()
            .int("a", 1)
            .array(
                "b",
                vec![Value::Bool(true), Value::Null, Value::String("x".into())],
            )
            .float("ratio", 0.25)
            .string("name", "jsonizer")
            .null("nothing")
            .object(
                "meta",
                DocumentBuilder::new().bool("active", true).build(),
            )
            .build()
    }

    /// A payload nested `depth` objects deep, with a string leaf
    pub fn deeply_nested(depth: usize) -> Value {
        let mut nested = Value::String("leaf".to_string());
        for i in (0..depth).rev() {
            let mut level = Map::new();
            level.insert(format!("level_{}", i), nested);
            nested = Value::Object(level);
        }
        nested
    }

    /// Payloads with Unicode edge cases
    pub fn unicode_edge_documents() -> Vec<Value> {
        vec![
            DocumentBuilder::new()
                .string("ascii", "Hello, World!")
                .build(),
            DocumentBuilder::new()
                .string("unicode", "Hello, 世界! 🌍")
                .build(),
            DocumentBuilder::new()
                .string("emoji", "🚀🎉💯🔥⭐")
                .build(),
            DocumentBuilder::new()
                .string("mixed", "ASCII + 中文 + 🎯 + العربية")
                .build(),
        ]
    }

    /// Payloads with boundary values
    pub fn boundary_value_documents() -> Vec<Value> {
        vec![
            DocumentBuilder::new().int("value", i64::MAX).build(),
            DocumentBuilder::new().int("value", i64::MIN).build(),
            DocumentBuilder::new().string("value", "").build(),
            DocumentBuilder::new().array("value", vec![]).build(),
            DocumentBuilder::new()
                .object("value", Value::Object(Map::new()))
                .build(),
            Value::Array(vec![]),
            Value::Null,
        ]
    }

    /// A list of `count` flat records, for benchmarks and large-input tests
    pub fn large_record_list(count: usize) -> Value {
        let records = (0..count)
            .map(|i| {
                let level = match i % 4 {
                    0 => "DEBUG",
                    1 => "INFO",
                    2 => "WARN",
                    _ => "ERROR",
                };

                DocumentBuilder::new()
                    .int("id", i as i64)
                    .int("timestamp", 1609459200 + i as i64)
                    .string("level", level)
                    .string("user", &format!("user_{}", i % 100))
                    .string("message", &format!("Test message number {}", i))
                    .build()
            })
            .collect();

        Value::Array(records)
    }
}

/// Install a test-friendly tracing subscriber, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Utility functions for test assertions
pub mod assertions {
    use serde_json::Value;

    /// Assert that two JSON values are semantically equal (ignoring formatting)
    pub fn assert_json_equal(actual: &Value, expected: &Value, context: &str) {
        if actual != expected {
            panic!(
                "JSON assertion failed in {}:\nExpected: {}\nActual: {}",
                context, expected, actual
            );
        }
    }

    /// Assert that two JSON values are equal, treating integers and floats
    /// with the same numeric value as equal
    pub fn assert_json_equivalent(actual: &Value, expected: &Value, context: &str) {
        if !numerically_equal(actual, expected) {
            panic!(
                "JSON equivalence failed in {}:\nExpected: {}\nActual: {}",
                context, expected, actual
            );
        }
    }

    /// Structural equality with numeric normalisation
    pub fn numerically_equal(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => x == y,
            },
            (Value::Array(xs), Value::Array(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| numerically_equal(x, y))
            }
            (Value::Object(xs), Value::Object(ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .all(|(k, x)| ys.get(k).is_some_and(|y| numerically_equal(x, y)))
            }
            _ => a == b,
        }
    }
}
