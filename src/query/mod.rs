//! Path-based JSON query engine: extraction, exclusion and existence checks.
//!
//! A query maps the JSON document to a directory-like structure addressed by
//! separator-delimited paths (default separator `/`). What a segment means
//! depends on the node it reaches.
//!
//! # Path Syntax
//!
//! Arrays, by index:
//! - `foo/0`, `foo/2`, `foo/-1` (last item)
//!
//! Arrays, by range:
//! - `foo/:` or `foo/*` - all items
//! - `foo/2:`, `foo/:2`, `foo/1:5`
//! - `foo/-2:` - last two items
//! - `foo/:-2` - all but the last two
//! - `foo/1:-3` - from the second item up to the third-from-last
//!
//! Objects, by regular expression (prefix-matched against each key):
//! - `foo/b..?r` matches `foo/bar` and `foo/beer`
//! - `foo/bar/.*[pP]assw(or)?d` - anything under `foo/bar` that looks like
//!   a password
//!
//! The root separator is optional: `foo/bar` equals `/foo/bar`.
//!
//! # Example
//!
//! ```
//! use jsonsift::query::{QueryEngine, QueryOptions, QueryRequest};
//!
//! let engine = QueryEngine::new(QueryOptions::default());
//! let request = QueryRequest {
//!     extract: vec!["lols/*".to_string()],
//!     ..QueryRequest::default()
//! };
//! let outcome = engine
//!     .run_str(r#"{"lols": {"a": 1, "b": 2}}"#, &request)
//!     .unwrap();
//! assert_eq!(outcome.results.len(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod output;
pub mod path;
pub mod resolver;
pub mod walker;

pub use engine::{QueryEngine, QueryOptions, QueryOutcome, QueryRequest};
pub use error::QueryError;
pub use output::ResultValue;
pub use path::Path;
pub use resolver::{resolve_keys, Key};
pub use walker::{exclude, exists, extract, Extraction};
