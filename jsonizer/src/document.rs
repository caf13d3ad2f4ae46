//! Dynamic document wrapper and borrowed views

use crate::codec;
use crate::{DecodeOptions, EncodeOptions};
use jsonizer_format::{Format, JsonizerError, Result, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// An owned untyped payload with navigation and format conversions
///
/// A document is immutable once built. Lookups return a [`DocumentView`]
/// borrowing from the document's storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    value: Value,
}

impl Document {
    /// Wrap a payload as-is
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Build a document from any serializable value
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        codec::json::to_value(value).map(Self::new)
    }

    /// Decode `text` as `format` with default limits
    pub fn parse(format: Format, text: &str) -> Result<Self> {
        Self::parse_with(format, text, &DecodeOptions::default())
    }

    /// Decode `text` as `format` under the given options
    pub fn parse_with(format: Format, text: &str, opts: &DecodeOptions) -> Result<Self> {
        crate::decode(format, text, opts).map(Self::new)
    }

    /// Decode JSON text
    pub fn parse_json(text: &str) -> Result<Self> {
        Self::parse(Format::Json, text)
    }

    /// Decode XML text
    pub fn parse_xml(text: &str) -> Result<Self> {
        Self::parse(Format::Xml, text)
    }

    /// Decode YAML text
    pub fn parse_yaml(text: &str) -> Result<Self> {
        Self::parse(Format::Yaml, text)
    }

    /// Borrow the payload
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the payload out of the document
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Kind of the payload
    pub fn kind(&self) -> ValueKind {
        ValueKind::of(&self.value)
    }

    /// Borrow the whole document as a view
    pub fn view(&self) -> DocumentView<'_> {
        DocumentView::new(&self.value)
    }

    /// Look up `key` in an object payload
    pub fn get(&self, key: &str) -> Result<DocumentView<'_>> {
        self.view().get(key)
    }

    /// Look up `index` in an array payload
    pub fn array_get(&self, index: isize) -> Result<DocumentView<'_>> {
        self.view().array_get(index)
    }

    /// Encode as compact JSON
    pub fn to_json_string(&self) -> Result<String> {
        self.view().to_json_string()
    }

    /// Encode as XML under the default root element
    pub fn to_xml_string(&self) -> Result<String> {
        self.view().to_xml_string()
    }

    /// Encode as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        self.view().to_yaml_string()
    }

    /// Encode as `format` with default options
    pub fn encode(&self, format: Format) -> Result<String> {
        self.view().encode(format)
    }

    /// Encode as `format` under the given options
    pub fn encode_with(&self, format: Format, opts: &EncodeOptions) -> Result<String> {
        self.view().encode_with(format, opts)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.value
    }
}

impl From<DocumentView<'_>> for Document {
    fn from(view: DocumentView<'_>) -> Self {
        view.to_document()
    }
}

impl FromStr for Document {
    type Err = JsonizerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_json(s)
    }
}

/// Compact JSON; the alternate flag (`{:#}`) pretty-prints.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// A read-only view into part of a document's payload
///
/// Views are `Copy` and navigation consumes the view by value, so lookups
/// chain without holding temporaries:
///
/// ```
/// use jsonizer::Document;
///
/// let doc = Document::parse_json(r#"{"b": [true, null, "x"]}"#)?;
/// let x = doc.get("b")?.array_get(2)?;
/// assert_eq!(x.to_json_string()?, r#""x""#);
/// # Ok::<(), jsonizer::JsonizerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentView<'a> {
    value: &'a Value,
}

impl<'a> DocumentView<'a> {
    /// View a borrowed payload
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Borrow the payload for the lifetime of the underlying storage
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Kind of the payload
    pub fn kind(&self) -> ValueKind {
        ValueKind::of(self.value)
    }

    /// Clone the viewed payload into an independent document
    pub fn to_document(&self) -> Document {
        Document::new(self.value.clone())
    }

    /// Look up `key` in an object payload
    ///
    /// Returns [`JsonizerError::KeyNotFound`] both when the payload is not an
    /// object and when the object lacks `key`.
    pub fn get(self, key: &str) -> Result<DocumentView<'a>> {
        let found = match self.value {
            Value::Object(map) => map.get(key),
            _ => None,
        };

        found.map(DocumentView::new).ok_or_else(|| {
            trace!(key, kind = %self.kind(), "key lookup missed");
            JsonizerError::KeyNotFound {
                key: key.to_string(),
            }
        })
    }

    /// Look up `index` in an array payload
    ///
    /// Returns [`JsonizerError::IndexOutOfRange`] when the payload is not an
    /// array, or when `index` is negative or past the end.
    pub fn array_get(self, index: isize) -> Result<DocumentView<'a>> {
        let found = match self.value {
            Value::Array(items) => usize::try_from(index).ok().and_then(|i| items.get(i)),
            _ => None,
        };

        found.map(DocumentView::new).ok_or_else(|| {
            trace!(index, kind = %self.kind(), "index lookup missed");
            JsonizerError::IndexOutOfRange { index }
        })
    }

    /// Encode as compact JSON
    pub fn to_json_string(&self) -> Result<String> {
        self.encode(Format::Json)
    }

    /// Encode as XML under the default root element
    pub fn to_xml_string(&self) -> Result<String> {
        self.encode(Format::Xml)
    }

    /// Encode as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        self.encode(Format::Yaml)
    }

    /// Encode as `format` with default options
    pub fn encode(&self, format: Format) -> Result<String> {
        self.encode_with(format, &EncodeOptions::default())
    }

    /// Encode as `format` under the given options
    pub fn encode_with(&self, format: Format, opts: &EncodeOptions) -> Result<String> {
        crate::encode(format, self.value, opts)
    }
}

impl<'a> From<&'a Document> for DocumentView<'a> {
    fn from(doc: &'a Document) -> Self {
        doc.view()
    }
}

impl fmt::Display for DocumentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value, f)
    }
}
