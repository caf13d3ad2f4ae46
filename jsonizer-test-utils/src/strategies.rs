//! Proptest strategies for untyped payloads
//!
//! Generated values are chosen to survive JSON and YAML round trips exactly:
//! floats are multiples of 0.25 and strings avoid characters that need YAML
//! escaping.

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Object keys: short lowercase identifiers, which are also valid XML names
pub fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

/// Scalar payloads: null, booleans, integers, exactly representable floats, strings
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-4_000_000i32..4_000_000).prop_map(|n| Value::from(f64::from(n) / 4.0)),
        "[a-zA-Z][a-zA-Z ]{0,15}".prop_map(Value::String),
    ]
}

/// Arbitrary payloads nested up to four levels deep
pub fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Non-empty objects together with one key they contain
pub fn arb_object_with_key() -> impl Strategy<Value = (Map<String, Value>, String)> {
    prop::collection::btree_map(arb_key(), arb_json(), 1..8).prop_flat_map(|entries| {
        let keys: Vec<String> = entries.keys().cloned().collect();
        let map: Map<String, Value> = entries.into_iter().collect();
        (Just(map), prop::sample::select(keys))
    })
}

/// Arrays of arbitrary payloads
pub fn arb_array() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_json(), 0..16)
}
