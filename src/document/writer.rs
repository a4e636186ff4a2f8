//! JSON serialization with ensure-ASCII escaping.
//!
//! The writer always escapes non-ASCII characters as `\uXXXX` sequences
//! (surrogate pairs above the basic plane) so output stays stable and
//! diff-friendly regardless of locale. Compact output uses `", "` and `": "`
//! separators; an indent width greater than zero switches to multi-line
//! output with that many spaces per nesting level.

use crate::document::node::{JsonNumber, JsonValue};

/// Default width for elided diagnostic renderings.
pub const ELIDE_WIDTH: usize = 48;

/// Serializes a value to a JSON string.
///
/// `indent` of zero produces compact single-line output; otherwise each
/// nesting level is indented by `indent` spaces. `sort_keys` orders object
/// keys lexicographically instead of by insertion order.
///
/// # Example
///
/// ```
/// use jsonsift::document::parser::parse_json;
/// use jsonsift::document::writer::to_json_string;
///
/// let doc = parse_json(r#"{"b": 2, "a": 1}"#).unwrap();
/// assert_eq!(to_json_string(&doc, 0, true), r#"{"a": 1, "b": 2}"#);
/// assert_eq!(to_json_string(&doc, 0, false), r#"{"b": 2, "a": 1}"#);
/// ```
pub fn to_json_string(value: &JsonValue, indent: usize, sort_keys: bool) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent, sort_keys, 0);
    out
}

/// Serializes a value compactly and elides the middle when it exceeds
/// `max_len`, keeping a fixed-width prefix and suffix around a `...` marker.
///
/// Used for diagnostics: error messages embed a short rendering of the node
/// a failing segment was applied to.
pub fn to_elided_string(value: &JsonValue, max_len: usize) -> String {
    let text = to_json_string(value, 0, false);
    if max_len == 0 || text.len() <= max_len {
        return text;
    }
    // Output is pure ASCII, so byte slicing is safe here.
    let len = text.len();
    let third = max_len / 3 + len % 3;
    let head = max_len.saturating_sub(third);
    let tail = len.saturating_sub(third);
    format!("{}...{}", &text[..head], &text[tail..])
}

fn write_value(out: &mut String, value: &JsonValue, indent: usize, sort_keys: bool, depth: usize) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Boolean(true) => out.push_str("true"),
        JsonValue::Boolean(false) => out.push_str("false"),
        JsonValue::Number(n) => write_number(out, n),
        JsonValue::String(s) => write_string(out, s),
        JsonValue::Array(items) => write_array(out, items, indent, sort_keys, depth),
        JsonValue::Object(map) => write_object(out, map, indent, sort_keys, depth),
    }
}

fn write_number(out: &mut String, number: &JsonNumber) {
    match number {
        JsonNumber::Integer(i) => out.push_str(&i.to_string()),
        JsonNumber::Float(f) => {
            if f.is_nan() {
                out.push_str("NaN");
            } else if f.is_infinite() {
                out.push_str(if *f > 0.0 { "Infinity" } else { "-Infinity" });
            } else if f.fract() == 0.0 && f.abs() < 1e16 {
                out.push_str(&format!("{:.1}", f));
            } else {
                out.push_str(&f.to_string());
            }
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c if c.is_ascii() => out.push(c),
            c => {
                let code = c as u32;
                if code <= 0xffff {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    // Encode astral characters as a UTF-16 surrogate pair.
                    let reduced = code - 0x10000;
                    let high = 0xd800 + (reduced >> 10);
                    let low = 0xdc00 + (reduced & 0x3ff);
                    out.push_str(&format!("\\u{:04x}\\u{:04x}", high, low));
                }
            }
        }
    }
    out.push('"');
}

fn write_array(
    out: &mut String,
    items: &[JsonValue],
    indent: usize,
    sort_keys: bool,
    depth: usize,
) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
            if indent == 0 {
                out.push(' ');
            }
        }
        if indent > 0 {
            out.push('\n');
            out.push_str(&" ".repeat(indent * (depth + 1)));
        }
        write_value(out, item, indent, sort_keys, depth + 1);
    }
    if indent > 0 {
        out.push('\n');
        out.push_str(&" ".repeat(indent * depth));
    }
    out.push(']');
}

fn write_object(
    out: &mut String,
    map: &indexmap::IndexMap<String, JsonValue>,
    indent: usize,
    sort_keys: bool,
    depth: usize,
) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    let mut keys: Vec<&String> = map.keys().collect();
    if sort_keys {
        keys.sort();
    }
    out.push('{');
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(',');
            if indent == 0 {
                out.push(' ');
            }
        }
        if indent > 0 {
            out.push('\n');
            out.push_str(&" ".repeat(indent * (depth + 1)));
        }
        write_string(out, key);
        out.push_str(": ");
        if let Some(child) = map.get(*key) {
            write_value(out, child, indent, sort_keys, depth + 1);
        }
    }
    if indent > 0 {
        out.push('\n');
        out.push_str(&" ".repeat(indent * depth));
    }
    out.push('}');
}
