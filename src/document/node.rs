//! JSON value representation used throughout jsonsift.
//!
//! This module provides the core data structure for representing decoded JSON
//! documents. Objects are backed by an `IndexMap` so that key insertion order
//! is preserved across extraction and re-serialization, which keeps output
//! stable and diff-friendly when `sort_keys` is disabled.
//!
//! # Example
//!
//! ```
//! use jsonsift::document::node::{JsonNumber, JsonValue};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("id".to_string(), JsonValue::Number(JsonNumber::Integer(3)));
//! map.insert("name".to_string(), JsonValue::String("bob".to_string()));
//! let doc = JsonValue::Object(map);
//!
//! assert!(doc.is_object());
//! assert!(doc.is_container());
//! ```

use indexmap::IndexMap;

/// A JSON number, kept as either an integer or a float.
///
/// The distinction matters for output: `3` must serialize as `3`, not `3.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A decoded JSON value.
///
/// This enum covers the six JSON types. Containers hold `JsonValue` instances
/// directly; the query engine borrows the tree for extraction and takes a
/// mutable borrow for exclusion.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A JSON object with insertion-ordered key-value pairs
    Object(IndexMap<String, JsonValue>),
    /// A JSON array of ordered values
    Array(Vec<JsonValue>),
    /// A JSON string
    String(String),
    /// A JSON number (integer or float)
    Number(JsonNumber),
    /// A JSON boolean
    Boolean(bool),
    /// A JSON null
    Null,
}

impl JsonValue {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonsift::document::node::JsonValue;
    /// use indexmap::IndexMap;
    ///
    /// assert!(JsonValue::Object(IndexMap::new()).is_object());
    /// assert!(!JsonValue::Null.is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this value is a container (object or array).
    ///
    /// Path segments can only be resolved against containers; applying a
    /// segment to anything else is a type mismatch.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }

    /// Returns a short name for the value's JSON type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
            JsonValue::String(_) => "string",
            JsonValue::Number(_) => "number",
            JsonValue::Boolean(_) => "boolean",
            JsonValue::Null => "null",
        }
    }
}
