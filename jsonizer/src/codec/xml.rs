//! XML codec
//!
//! Decoding walks `quick-xml` reader events with an explicit element stack,
//! so nesting depth is bounded by `max_depth` rather than by the call stack.
//! Encoding uses the serde integration of `quick-xml`.
//!
//! Mapping from XML to a payload:
//!
//! - the root element's name is discarded and its content becomes the payload
//! - child elements become object keys; repeated siblings merge into an array
//!   in document order
//! - attributes become `@name` keys holding strings
//! - element text (and CDATA) becomes a `$text` key holding a string
//! - an element with no attributes, children, or text decodes as `null`
//!
//! Mapping from a payload to XML, under a root element named by the caller:
//!
//! - object keys become child elements, `@name` keys become attributes and a
//!   `$text` key becomes element text
//! - arrays inside objects become repeated elements named after their key
//! - a top-level array becomes repeated `item` children of the root
//! - scalars become element text and `null` becomes an empty element

use jsonizer_format::{Format, JsonizerError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use serde_json::{Map, Value};

/// Default name of the root element written by [`encode`]
pub const DEFAULT_ROOT: &str = "root";

/// An element whose end tag has not been read yet
struct OpenElement {
    fields: Map<String, Value>,
    text: String,
}

impl OpenElement {
    fn new(start: &BytesStart<'_>) -> Result<Self> {
        let mut fields = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| JsonizerError::decode(Format::Xml, e))?;
            let name = utf8(attr.key.as_ref())?;
            let value = attr
                .unescape_value()
                .map_err(|e| JsonizerError::decode(Format::Xml, e))?;
            fields.insert(format!("@{}", name), Value::String(value.into_owned()));
        }
        Ok(Self {
            fields,
            text: String::new(),
        })
    }

    fn add_child(&mut self, name: String, value: Value) {
        // Element values are never arrays, so an existing array came from repetition.
        match self.fields.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.fields.insert(name, value);
            }
        }
    }

    fn finish(mut self) -> Value {
        if !self.text.is_empty() {
            self.fields
                .insert("$text".to_string(), Value::String(self.text));
        }
        if self.fields.is_empty() {
            Value::Null
        } else {
            Value::Object(self.fields)
        }
    }
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| JsonizerError::decode(Format::Xml, e))
}

fn malformed(message: &str) -> JsonizerError {
    JsonizerError::decode(Format::Xml, message)
}

/// Decode XML text into a payload
///
/// Fails with [`JsonizerError::LimitExceeded`] as soon as elements nest
/// deeper than `max_depth`.
pub fn decode(text: &str, max_depth: usize) -> Result<Value> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<(String, OpenElement)> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| JsonizerError::decode(Format::Xml, e))?;

        match event {
            Event::Start(_) | Event::Empty(_) if root.is_some() => {
                return Err(malformed("multiple root elements"));
            }
            Event::Start(start) => {
                if stack.len() >= max_depth {
                    return Err(JsonizerError::LimitExceeded(format!(
                        "element nesting deeper than {}",
                        max_depth
                    )));
                }
                let name = utf8(start.name().as_ref())?.to_string();
                stack.push((name, OpenElement::new(&start)?));
            }
            Event::Empty(start) => {
                let name = utf8(start.name().as_ref())?.to_string();
                let value = OpenElement::new(&start)?.finish();
                match stack.last_mut() {
                    Some((_, parent)) => parent.add_child(name, value),
                    None => root = Some(value),
                }
            }
            Event::End(_) => {
                let (name, element) = stack
                    .pop()
                    .ok_or_else(|| malformed("unmatched end tag"))?;
                let value = element.finish();
                match stack.last_mut() {
                    Some((_, parent)) => parent.add_child(name, value),
                    None => root = Some(value),
                }
            }
            Event::Text(content) => {
                let content = content
                    .unescape()
                    .map_err(|e| JsonizerError::decode(Format::Xml, e))?;
                match stack.last_mut() {
                    Some((_, element)) => element.text.push_str(&content),
                    None => return Err(malformed("text outside the root element")),
                }
            }
            Event::CData(content) => {
                let content = content.into_inner();
                let content = utf8(&content)?;
                match stack.last_mut() {
                    Some((_, element)) => element.text.push_str(content),
                    None => return Err(malformed("CDATA outside the root element")),
                }
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some((name, _)) = stack.last() {
        return Err(JsonizerError::decode(
            Format::Xml,
            format!("unexpected end of input inside <{}>", name),
        ));
    }

    root.ok_or_else(|| malformed("no root element"))
}

/// Wraps a top-level array so its items serialize as `<item>` children
#[derive(Serialize)]
struct TopLevelItems<'a> {
    item: &'a [Value],
}

/// Encode a payload as XML under a root element named `root`
///
/// Fails if `root` or any object key is not a valid XML name.
pub fn encode(value: &Value, root: &str) -> Result<String> {
    let encoded = match value {
        Value::Array(items) => {
            quick_xml::se::to_string_with_root(root, &TopLevelItems { item: items })
        }
        other => quick_xml::se::to_string_with_root(root, other),
    };
    encoded.map_err(|e| JsonizerError::encode(Format::Xml, e))
}
