//! Integration tests for the query engine's documented behavior.

use jsonsift::query::{QueryEngine, QueryError, QueryOptions, QueryRequest, ResultValue};

const SAMPLE: &str = r#"{"id": 3, "name": "bob", "lols": {"a": 1, "b": 2}}"#;

fn engine() -> QueryEngine {
    QueryEngine::new(QueryOptions::default())
}

fn serialized(outcome: &[ResultValue]) -> Vec<String> {
    outcome
        .iter()
        .map(|r| match r {
            ResultValue::Serialized(s) => s.clone(),
            ResultValue::Raw(v) => panic!("expected serialized result, got {:?}", v),
        })
        .collect()
}

/// Extracting several paths returns one serialized result per match, in
/// request order.
#[test]
fn test_extract_multiple_paths() {
    let request = QueryRequest {
        extract: vec!["id".to_string(), "lols".to_string(), "lols/b".to_string()],
        ..QueryRequest::default()
    };
    let outcome = engine().run_str(SAMPLE, &request).unwrap();
    assert_eq!(
        serialized(&outcome.results),
        vec!["3", r#"{"a": 1, "b": 2}"#, "2"]
    );
}

/// Wildcard extraction with pairs output flattens to name=value lines.
#[test]
fn test_extract_wildcard_pairs() {
    let eng = QueryEngine::new(QueryOptions {
        pairs: true,
        ..QueryOptions::default()
    });
    let request = QueryRequest {
        extract: vec!["lols/*".to_string()],
        ..QueryRequest::default()
    };
    let outcome = eng.run_str(SAMPLE, &request).unwrap();
    assert_eq!(serialized(&outcome.results), vec!["lols_a=1", "lols_b=2"]);
}

/// A range with a negative upper bound excludes from the end: "1:-1" on a
/// three-element array selects only the middle element.
#[test]
fn test_range_with_negative_upper_bound() {
    let request = QueryRequest {
        extract: vec!["1:-1".to_string()],
        ..QueryRequest::default()
    };
    let outcome = engine().run_str(r#"["x", "y", "z"]"#, &request).unwrap();
    assert_eq!(serialized(&outcome.results), vec![r#""y""#]);
}

/// Exclusion mutates the document before extraction runs.
#[test]
fn test_exclude_then_extract() {
    let request = QueryRequest {
        exclude: vec!["lols/a".to_string()],
        extract: vec!["lols".to_string()],
        ..QueryRequest::default()
    };
    let outcome = engine().run_str(SAMPLE, &request).unwrap();
    assert_eq!(serialized(&outcome.results), vec![r#"{"b": 2}"#]);
}

/// A missing path fails in strict mode and yields nothing in quiet mode.
#[test]
fn test_missing_path_strict_vs_quiet() {
    let request = QueryRequest {
        extract: vec!["missing".to_string()],
        ..QueryRequest::default()
    };

    let err = engine().run_str(SAMPLE, &request).unwrap_err();
    assert!(matches!(err, QueryError::PathNotFound { .. }));

    let quiet = QueryEngine::new(QueryOptions {
        quiet: true,
        ..QueryOptions::default()
    });
    let outcome = quiet.run_str(SAMPLE, &request).unwrap();
    assert!(outcome.results.is_empty());
}

/// Wildcard and the full range select identical key sets.
#[test]
fn test_wildcard_equals_full_range() {
    let doc = r#"[10, 20, 30, 40]"#;
    let star = QueryRequest {
        extract: vec!["*".to_string()],
        ..QueryRequest::default()
    };
    let colon = QueryRequest {
        extract: vec![":".to_string()],
        ..QueryRequest::default()
    };
    let by_star = engine().run_str(doc, &star).unwrap();
    let by_colon = engine().run_str(doc, &colon).unwrap();
    assert_eq!(by_star.results, by_colon.results);
    assert_eq!(by_star.results.len(), 4);
}

/// Excluding a path is only effective once: a second strict exclusion of
/// the same path fails, while quiet mode turns it into a no-op.
#[test]
fn test_exclude_idempotence() {
    let mut doc = jsonsift::document::parser::parse_json(SAMPLE).unwrap();
    let eng = engine();
    eng.exclude(&mut doc, "lols/a").unwrap();
    let err = eng.exclude(&mut doc, "lols/a").unwrap_err();
    assert!(matches!(err, QueryError::PathNotFound { .. }));

    let quiet = QueryEngine::new(QueryOptions {
        quiet: true,
        ..QueryOptions::default()
    });
    let before = doc.clone();
    quiet.exclude(&mut doc, "lols/a").unwrap();
    assert_eq!(doc, before);
}

/// With no operations at all, the call round-trips the document.
#[test]
fn test_round_trip_preserves_structure() {
    let outcome = engine().run_str(SAMPLE, &QueryRequest::default()).unwrap();
    let rendered = serialized(&outcome.results);
    assert_eq!(rendered.len(), 1);
    let reparsed = jsonsift::document::parser::parse_json(&rendered[0]).unwrap();
    let original = jsonsift::document::parser::parse_json(SAMPLE).unwrap();
    assert_eq!(reparsed, original);
}

/// Regex key matching is prefix-anchored, not full-match.
#[test]
fn test_regex_prefix_matching() {
    let request = QueryRequest {
        extract: vec!["ba".to_string()],
        ..QueryRequest::default()
    };
    let outcome = engine()
        .run_str(r#"{"bar": 1, "rebar": 2}"#, &request)
        .unwrap();
    assert_eq!(serialized(&outcome.results), vec!["1"]);
}

/// Existence checks report through the outcome flag without touching the
/// output or the document.
#[test]
fn test_exists_flag() {
    let present = QueryRequest {
        exists: vec!["lols/b".to_string()],
        ..QueryRequest::default()
    };
    let absent = QueryRequest {
        exists: vec!["lols/b".to_string(), "nope".to_string()],
        ..QueryRequest::default()
    };
    assert!(engine().run_str(SAMPLE, &present).unwrap().all_exist);
    assert!(!engine().run_str(SAMPLE, &absent).unwrap().all_exist);
}

/// Strict errors abort the call with no partial results for that path.
#[test]
fn test_strict_failure_yields_no_partial_results() {
    let request = QueryRequest {
        extract: vec!["lols/a".to_string(), "missing".to_string()],
        ..QueryRequest::default()
    };
    assert!(engine().run_str(SAMPLE, &request).is_err());
}

/// Malformed queries abort even in quiet mode.
#[test]
fn test_malformed_query_aborts_in_quiet_mode() {
    let quiet = QueryEngine::new(QueryOptions {
        quiet: true,
        ..QueryOptions::default()
    });
    let bad_range = QueryRequest {
        extract: vec!["1:2:3".to_string()],
        ..QueryRequest::default()
    };
    assert!(matches!(
        quiet.run_str("[1, 2, 3]", &bad_range),
        Err(QueryError::InvalidRange { .. })
    ));

    let bad_regex = QueryRequest {
        extract: vec!["[unclosed".to_string()],
        ..QueryRequest::default()
    };
    assert!(matches!(
        quiet.run_str(r#"{"a": 1}"#, &bad_regex),
        Err(QueryError::InvalidRegex { .. })
    ));

    let scalar = QueryRequest {
        extract: vec!["name/x".to_string()],
        ..QueryRequest::default()
    };
    assert!(matches!(
        quiet.run_str(SAMPLE, &scalar),
        Err(QueryError::TypeMismatch { .. })
    ));
}

/// Indented output matches the requested width.
#[test]
fn test_indented_output() {
    let eng = QueryEngine::new(QueryOptions {
        indent: 2,
        ..QueryOptions::default()
    });
    let request = QueryRequest {
        extract: vec!["lols".to_string()],
        ..QueryRequest::default()
    };
    let outcome = eng.run_str(SAMPLE, &request).unwrap();
    assert_eq!(
        serialized(&outcome.results),
        vec!["{\n  \"a\": 1,\n  \"b\": 2\n}"]
    );
}

/// Raw extraction hands back native values.
#[test]
fn test_raw_extraction() {
    let eng = QueryEngine::new(QueryOptions {
        raw: true,
        ..QueryOptions::default()
    });
    let request = QueryRequest {
        extract: vec!["name".to_string()],
        ..QueryRequest::default()
    };
    let outcome = eng.run_str(SAMPLE, &request).unwrap();
    match &outcome.results[0] {
        ResultValue::Raw(value) => {
            assert_eq!(value, &jsonsift::document::node::JsonValue::String("bob".to_string()));
        }
        other => panic!("expected raw result, got {:?}", other),
    }
    assert_eq!(outcome.results[0].to_display_string(eng.options()), "bob");
}

/// A custom separator changes how paths split without affecting semantics.
#[test]
fn test_custom_separator() {
    let eng = QueryEngine::new(QueryOptions {
        separator: '.',
        ..QueryOptions::default()
    });
    let request = QueryRequest {
        extract: vec!["lols.b".to_string()],
        ..QueryRequest::default()
    };
    let outcome = eng.run_str(SAMPLE, &request).unwrap();
    assert_eq!(serialized(&outcome.results), vec!["2"]);
}

/// sort_keys=false keeps the document's own key order in output.
#[test]
fn test_no_sort_preserves_insertion_order() {
    let eng = QueryEngine::new(QueryOptions {
        sort_keys: false,
        ..QueryOptions::default()
    });
    let outcome = eng
        .run_str(r#"{"zebra": 1, "apple": 2}"#, &QueryRequest::default())
        .unwrap();
    assert_eq!(
        serialized(&outcome.results),
        vec![r#"{"zebra": 1, "apple": 2}"#]
    );
}
