//! JSON text decoding.
//!
//! Decoding goes through `serde_json` (compiled with `preserve_order` so
//! object key order survives the round trip) and the resulting
//! `serde_json::Value` is converted into the crate's own [`JsonValue`] model.

use crate::document::node::{JsonNumber, JsonValue};
use indexmap::IndexMap;

/// Parses a JSON string into a [`JsonValue`].
///
/// # Example
///
/// ```
/// use jsonsift::document::parser::parse_json;
///
/// let doc = parse_json(r#"{"id": 3}"#).unwrap();
/// assert!(doc.is_object());
/// ```
pub fn parse_json(input: &str) -> Result<JsonValue, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(convert_value(&value))
}

/// Converts a `serde_json::Value` into the crate's [`JsonValue`] model.
///
/// Numbers that fit in an `i64` become integers; everything else becomes a
/// float. Object key order is preserved.
pub fn convert_value(value: &serde_json::Value) -> JsonValue {
    match value {
        serde_json::Value::Null => JsonValue::Null,
        serde_json::Value::Bool(b) => JsonValue::Boolean(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(JsonNumber::Integer(i))
            } else {
                JsonValue::Number(JsonNumber::Float(n.as_f64().unwrap_or(0.0)))
            }
        }
        serde_json::Value::String(s) => JsonValue::String(s.clone()),
        serde_json::Value::Array(items) => {
            JsonValue::Array(items.iter().map(convert_value).collect())
        }
        serde_json::Value::Object(map) => {
            let mut fields = IndexMap::with_capacity(map.len());
            for (key, child) in map {
                fields.insert(key.clone(), convert_value(child));
            }
            JsonValue::Object(fields)
        }
    }
}
