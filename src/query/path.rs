//! Query path splitting.
//!
//! A path is a flat string of segments joined by a single separator
//! character (`/` by default). Splitting happens up front; what a segment
//! *means* is decided later, when the walker applies it to a concrete node,
//! because the same text is an index against an array and a regex against an
//! object. No escaping is supported, so a separator character cannot appear
//! inside a segment.

use super::error::QueryError;

/// A parsed query path: an ordered list of raw segment strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Splits `raw` on `separator` into a [`Path`].
    ///
    /// A leading or trailing separator is ignored (`/foo/bar` equals
    /// `foo/bar`). Empty paths and empty interior segments are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonsift::query::Path;
    ///
    /// let path = Path::parse("/lols/b", '/').unwrap();
    /// assert_eq!(path.segments(), ["lols", "b"]);
    ///
    /// assert!(Path::parse("", '/').is_err());
    /// assert!(Path::parse("a//b", '/').is_err());
    /// ```
    pub fn parse(raw: &str, separator: char) -> Result<Path, QueryError> {
        let trimmed = raw.trim_matches(separator);
        if trimmed.is_empty() {
            return Err(QueryError::EmptySegment {
                path: raw.to_string(),
            });
        }
        let segments: Vec<String> = trimmed.split(separator).map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(QueryError::EmptySegment {
                path: raw.to_string(),
            });
        }
        Ok(Path { segments })
    }

    /// Returns the raw segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}
