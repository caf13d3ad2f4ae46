//! Text codecs
//!
//! Each submodule converts between one text format and the untyped payload
//! (`serde_json::Value`) held by a document. Codecs translate errors into
//! [`JsonizerError`](jsonizer_format::JsonizerError). Input size, the final
//! depth check, and logging are applied by the dispatching functions in the
//! crate root; the XML codec also checks nesting depth while reading, since
//! its reader has no recursion limit of its own.
//!
//! # XML Caveats
//!
//! XML has no native notion of arrays, numbers, or booleans. Decoding maps
//! child elements to object keys, repeated siblings to arrays, attributes to
//! `@name` keys, and text to a `$text` key, with every scalar decoded as a
//! string; an empty element decodes as `null`. Encoding applies the inverse
//! mapping under a named root element, and a top-level array is written as
//! repeated `<item>` children of that root. Round trips through XML are
//! best-effort only. See [`xml`] for the full mapping.

pub mod json;
pub mod xml;
pub mod yaml;
