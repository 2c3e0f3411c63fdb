//! Format capabilities: the decode/encode contract and the shipped formats.
//!
//! The core never touches concrete syntax; it depends only on the [`Format`]
//! trait. Each supported serialization format implements the trait once, and
//! the caller selects which one a pipeline run uses. Two formats ship with
//! the crate: [`Json`] and [`Yaml`].
//!
//! ## Key ordering
//!
//! Encoded key order belongs to the format, not to the core. Both shipped
//! formats sort object keys lexicographically while encoding, which makes
//! output reproducible regardless of the key order in the source text.
//! Scalar quoting and escaping are likewise entirely the format's concern.
//!
//! ## Examples
//!
//! ```rust
//! use durapend::{Format, Json};
//!
//! let value = Json.decode(r#"{"b": 1, "a": 2}"#).unwrap();
//! let encoded = Json.encode(&value).unwrap();
//! assert_eq!(encoded, "{\n  \"a\": 2,\n  \"b\": 1\n}");
//! ```

use crate::error::{Error, Result};
use crate::Value;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// The decode/encode contract one serialization format must honor.
///
/// `decode` fails with [`Error::Decode`] on malformed input; that error is
/// surfaced unchanged by [`append`](crate::append). `encode` is expected to
/// succeed for any tree produced by this crate's own decode path, so an
/// [`Error::Encode`] indicates a programming error rather than bad user
/// input.
pub trait Format {
    /// Decodes input text into a [`Value`] tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the input is not a well-formed
    /// document in this format.
    fn decode(&self, input: &str) -> Result<Value>;

    /// Encodes a [`Value`] tree back into text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the tree cannot be represented in
    /// this format; not expected for trees built by [`Format::decode`].
    fn encode(&self, value: &Value) -> Result<String>;
}

/// JSON format capability backed by `serde_json`.
///
/// Encoding pretty-prints with two-space indentation and lexicographically
/// sorted object keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json;

impl Format for Json {
    fn decode(&self, input: &str) -> Result<Value> {
        serde_json::from_str(input).map_err(Error::decode)
    }

    fn encode(&self, value: &Value) -> Result<String> {
        serde_json::to_string_pretty(&SortedKeys(value)).map_err(Error::encode)
    }
}

/// YAML format capability backed by `serde_yaml`.
///
/// Encoding emits block style with lexicographically sorted object keys and
/// a trailing newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Yaml;

impl Format for Yaml {
    fn decode(&self, input: &str) -> Result<Value> {
        serde_yaml::from_str(input).map_err(Error::decode)
    }

    fn encode(&self, value: &Value) -> Result<String> {
        serde_yaml::to_string(&SortedKeys(value)).map_err(Error::encode)
    }
}

/// Serializes a [`Value`] with object keys in lexicographic order, at every
/// nesting level, without mutating the tree. Array element order is kept.
struct SortedKeys<'a>(&'a Value);

impl Serialize for SortedKeys<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Object(object) => {
                let mut keys: Vec<&String> = object.keys().collect();
                keys.sort_unstable();
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for key in keys {
                    if let Some(value) = object.get(key) {
                        map.serialize_entry(key, &SortedKeys(value))?;
                    }
                }
                map.end()
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&SortedKeys(item))?;
                }
                seq.end()
            }
            scalar => scalar.serialize(serializer),
        }
    }
}
