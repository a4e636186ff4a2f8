//! Query orchestration: one call, one document, one set of operations.
//!
//! The engine applies a [`QueryRequest`] to a document in a fixed order:
//! existence checks first (read-only), then exclusions (sequential, each
//! later path observing earlier mutations), then either extraction or
//! whole-document rendering. It holds no state between calls.

use tracing::debug;

use super::error::QueryError;
use super::output::{self, ResultValue};
use super::path::Path;
use super::walker::{self, Extraction};
use crate::document::node::JsonValue;
use crate::document::parser::parse_json;

/// Options recognized by every engine call.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Spaces per indentation level; 0 disables pretty-printing.
    pub indent: usize,
    /// Render extraction results as `name=value` pairs.
    pub pairs: bool,
    /// Sort object keys on output instead of keeping insertion order.
    pub sort_keys: bool,
    /// Swallow not-found errors instead of aborting.
    pub quiet: bool,
    /// Path segment separator.
    pub separator: char,
    /// Return native values instead of serialized JSON.
    pub raw: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            indent: 0,
            pairs: false,
            sort_keys: true,
            quiet: false,
            separator: '/',
            raw: false,
        }
    }
}

/// The operations to apply in one call: paths tagged by operation kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRequest {
    /// Paths whose values are extracted and returned.
    pub extract: Vec<String>,
    /// Paths whose entries are deleted from the document.
    pub exclude: Vec<String>,
    /// Paths that must all exist for `all_exist` to hold.
    pub exists: Vec<String>,
}

/// The outcome of one engine call.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    /// Assembled results, one entry per extracted value (or a single entry
    /// wrapping the whole document when no extraction was requested).
    pub results: Vec<ResultValue>,
    /// False when any requested existence path was absent.
    pub all_exist: bool,
}

/// Applies query operations to JSON documents.
///
/// # Example
///
/// ```
/// use jsonsift::query::{QueryEngine, QueryOptions, QueryRequest};
///
/// let engine = QueryEngine::new(QueryOptions::default());
/// let request = QueryRequest {
///     extract: vec!["lols/b".to_string()],
///     ..QueryRequest::default()
/// };
/// let outcome = engine
///     .run_str(r#"{"id": 3, "lols": {"a": 1, "b": 2}}"#, &request)
///     .unwrap();
/// assert_eq!(outcome.results.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine {
    options: QueryOptions,
}

impl QueryEngine {
    pub fn new(options: QueryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Extracts every value matching `path` from the document.
    pub fn extract<'a>(
        &self,
        doc: &'a JsonValue,
        path: &str,
    ) -> Result<Vec<Extraction<'a>>, QueryError> {
        let parsed = Path::parse(path, self.options.separator)?;
        walker::extract(
            doc,
            parsed.segments(),
            "",
            self.options.separator,
            self.options.quiet,
        )
    }

    /// Deletes every entry matching `path` from the document, in place.
    pub fn exclude(&self, doc: &mut JsonValue, path: &str) -> Result<(), QueryError> {
        let parsed = Path::parse(path, self.options.separator)?;
        walker::exclude(
            doc,
            parsed.segments(),
            "",
            self.options.separator,
            self.options.quiet,
        )
    }

    /// Returns true when every path exists in the document. Never mutates.
    pub fn exists(&self, doc: &JsonValue, paths: &[String]) -> bool {
        walker::exists(doc, paths, self.options.separator)
    }

    /// Decodes `text` and applies the request to the resulting document.
    pub fn run_str(&self, text: &str, request: &QueryRequest) -> Result<QueryOutcome, QueryError> {
        let mut doc = parse_json(text)?;
        self.run(&mut doc, request)
    }

    /// Applies the request to an already-decoded document.
    ///
    /// Exclusions mutate `doc` in the order given; extraction paths are
    /// evaluated independently against the post-exclusion document and their
    /// results concatenated. With no extraction paths, the single result is
    /// the (possibly mutated) whole document.
    pub fn run(
        &self,
        doc: &mut JsonValue,
        request: &QueryRequest,
    ) -> Result<QueryOutcome, QueryError> {
        let all_exist = self.exists(doc, &request.exists);
        for path in &request.exclude {
            debug!(path = %path, "applying exclusion");
            self.exclude(doc, path)?;
        }
        let results = if request.extract.is_empty() {
            vec![output::render_document(doc, &self.options)]
        } else {
            let mut assembled = Vec::new();
            for path in &request.extract {
                debug!(path = %path, "applying extraction");
                let found = self.extract(doc, path)?;
                assembled.extend(output::assemble(&found, &self.options));
            }
            assembled
        };
        Ok(QueryOutcome { results, all_exist })
    }
}
