//! YAML codec
//!
//! Text is first read into a `serde_yaml::Value` so that merge keys (`<<`)
//! can be applied and custom tags (`!tag value`) stripped before the tree is
//! converted to a payload.

use jsonizer_format::{Format, JsonizerError, Result};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;

/// Decode YAML text into a payload
///
/// Tags are dropped and the tagged value kept. Non-string mapping keys are
/// written as their scalar text (`1`, `true`, `null`). Non-finite floats
/// (`.nan`, `.inf`) have no JSON representation and decode as `null`.
pub fn decode(text: &str) -> Result<Value> {
    let mut yaml: Yaml =
        serde_yaml::from_str(text).map_err(|e| JsonizerError::decode(Format::Yaml, e))?;
    yaml.apply_merge().map_err(|e| JsonizerError::decode(Format::Yaml, e))?;
    into_payload(yaml)
}

// Recursion is bounded by the parser's own nesting limit.
fn into_payload(yaml: Yaml) -> Result<Value> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(into_payload)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_string(key)?, into_payload(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => into_payload(tagged.value)?,
    })
}

fn key_string(key: Yaml) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => key_string(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => Err(JsonizerError::decode(
            Format::Yaml,
            "mapping keys must be scalars",
        )),
    }
}

/// Encode a payload as YAML
pub fn encode(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| JsonizerError::encode(Format::Yaml, e))
}
