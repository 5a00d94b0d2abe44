//! # Document Model
//!
//! A [`Document`] is a JSON object: a mapping from string keys to arbitrary
//! JSON values. Only the top level is constrained; nested values are kept
//! as they are and only ever inspected through their [`TypeTag`].

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DocumentError;
use crate::tag::TypeTag;

/// A JSON object whose keys iterate in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse JSON text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] for malformed JSON and
    /// [`DocumentError::NotAnObject`] when the top level is not an object.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Wrap an already parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAnObject`] when `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DocumentError::NotAnObject {
                found: TypeTag::of(&other),
            }),
        }
    }

    /// Keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Key/value pairs in source order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the document has its own entry named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Coarse type of the value under `key`, `undefined` when absent.
    pub fn tag_of(&self, key: &str) -> TypeTag {
        TypeTag::of_opt(self.0.get(key))
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for Document {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
