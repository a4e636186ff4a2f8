//! Conversion of raw extraction tuples into caller-facing results.
//!
//! Three output shapes are supported: independently serialized JSON (the
//! default), flattened `name=value` pairs keyed by the sanitized path, and
//! raw values left undecoded for the caller to render.

use super::engine::QueryOptions;
use super::walker::Extraction;
use crate::document::node::JsonValue;
use crate::document::writer::to_json_string;

/// One assembled result: either serialized text or a raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Serialized(String),
    Raw(JsonValue),
}

impl ResultValue {
    /// Renders this result for display. Raw strings print bare rather than
    /// quoted; other raw values fall back to JSON serialization.
    pub fn to_display_string(&self, options: &QueryOptions) -> String {
        match self {
            ResultValue::Serialized(text) => text.clone(),
            ResultValue::Raw(JsonValue::String(s)) => s.clone(),
            ResultValue::Raw(value) => {
                to_json_string(value, options.indent, options.sort_keys)
            }
        }
    }
}

/// Assembles extraction results into the caller-requested output shape.
pub fn assemble(results: &[Extraction<'_>], options: &QueryOptions) -> Vec<ResultValue> {
    results
        .iter()
        .map(|extraction| {
            if options.pairs {
                // Pairs are always serialized, even under raw, so the
                // right-hand side stays shell-assignable.
                ResultValue::Serialized(format!(
                    "{}={}",
                    sanitize_name(&extraction.path),
                    to_json_string(extraction.value, options.indent, options.sort_keys)
                ))
            } else if options.raw {
                ResultValue::Raw(extraction.value.clone())
            } else {
                ResultValue::Serialized(to_json_string(
                    extraction.value,
                    options.indent,
                    options.sort_keys,
                ))
            }
        })
        .collect()
}

/// Wraps the whole document as the single result, used when no extraction
/// paths were requested.
pub fn render_document(doc: &JsonValue, options: &QueryOptions) -> ResultValue {
    if options.raw {
        ResultValue::Raw(doc.clone())
    } else {
        ResultValue::Serialized(to_json_string(doc, options.indent, options.sort_keys))
    }
}

/// Replaces every run of non-word characters with a single underscore, so a
/// path like `lols/a` becomes a usable variable name `lols_a`.
fn sanitize_name(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_run = false;
    for ch in path.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_json;
    use crate::query::resolver::Key;

    fn opts() -> QueryOptions {
        QueryOptions::default()
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("lols/a"), "lols_a");
        assert_eq!(sanitize_name("a/b:c/0"), "a_b_c_0");
        assert_eq!(sanitize_name("x..//y"), "x_y");
    }

    #[test]
    fn test_assemble_default_serializes_each_value() {
        let value = parse_json(r#"{"a": 1}"#).unwrap();
        let results = vec![Extraction {
            path: "lols".to_string(),
            key: Key::Name("lols".to_string()),
            value: &value,
        }];
        let out = assemble(&results, &opts());
        assert_eq!(
            out,
            vec![ResultValue::Serialized(r#"{"a": 1}"#.to_string())]
        );
    }

    #[test]
    fn test_assemble_pairs() {
        let value = parse_json("1").unwrap();
        let results = vec![Extraction {
            path: "lols/a".to_string(),
            key: Key::Name("a".to_string()),
            value: &value,
        }];
        let out = assemble(&results, &QueryOptions {
            pairs: true,
            ..QueryOptions::default()
        });
        assert_eq!(out, vec![ResultValue::Serialized("lols_a=1".to_string())]);
    }

    #[test]
    fn test_assemble_raw_returns_native_value() {
        let value = parse_json(r#""plain""#).unwrap();
        let results = vec![Extraction {
            path: "name".to_string(),
            key: Key::Name("name".to_string()),
            value: &value,
        }];
        let options = QueryOptions {
            raw: true,
            ..QueryOptions::default()
        };
        let out = assemble(&results, &options);
        assert_eq!(out, vec![ResultValue::Raw(value.clone())]);
        // Raw strings display bare, without quotes.
        assert_eq!(out[0].to_display_string(&options), "plain");
    }

    #[test]
    fn test_pairs_win_over_raw() {
        let value = parse_json("2").unwrap();
        let results = vec![Extraction {
            path: "lols/b".to_string(),
            key: Key::Name("b".to_string()),
            value: &value,
        }];
        let out = assemble(&results, &QueryOptions {
            pairs: true,
            raw: true,
            ..QueryOptions::default()
        });
        assert_eq!(out, vec![ResultValue::Serialized("lols_b=2".to_string())]);
    }

    #[test]
    fn test_render_document() {
        let doc = parse_json(r#"{"b": 2, "a": 1}"#).unwrap();
        assert_eq!(
            render_document(&doc, &opts()),
            ResultValue::Serialized(r#"{"a": 1, "b": 2}"#.to_string())
        );
        let raw = render_document(
            &doc,
            &QueryOptions {
                raw: true,
                ..QueryOptions::default()
            },
        );
        assert_eq!(raw, ResultValue::Raw(doc));
    }
}
