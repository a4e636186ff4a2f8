//! Error types for path parsing and traversal.

use std::fmt;

/// Errors that can occur while resolving a query path against a document.
///
/// In strict mode every variant aborts the call for the failing path. In
/// quiet mode resolver misses (`PathNotFound`, `InvalidIndex`) are swallowed
/// and contribute no results, while malformed-query errors (`InvalidRange`,
/// `InvalidRegex`, `EmptySegment`, `Decode`) and `TypeMismatch` still abort.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// No key matched the segment in the current container.
    PathNotFound { segment: String, node: String },
    /// An array index was out of bounds or not a number.
    InvalidIndex { segment: String, len: usize },
    /// A range segment was malformed (wrong part count or non-integer bounds).
    InvalidRange { segment: String },
    /// A mapping segment failed to compile as a regular expression.
    InvalidRegex { segment: String, message: String },
    /// A segment was applied to a scalar value.
    TypeMismatch { segment: String, node: String },
    /// The path was empty or contained an empty segment.
    EmptySegment { path: String },
    /// The input text was not valid JSON.
    Decode { message: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::PathNotFound { segment, node } => {
                write!(f, "Path '{}' in object '{}' not found", segment, node)
            }
            QueryError::InvalidIndex { segment, len } => {
                write!(f, "Invalid index '{}' in array of length {}", segment, len)
            }
            QueryError::InvalidRange { segment } => {
                write!(f, "Invalid path part: '{}'", segment)
            }
            QueryError::InvalidRegex { segment, message } => {
                write!(
                    f,
                    "Unable to compile path part '{}' to regex: {}",
                    segment, message
                )
            }
            QueryError::TypeMismatch { segment, node } => {
                write!(
                    f,
                    "Unable to search for path '{}' in non-container value '{}'",
                    segment, node
                )
            }
            QueryError::EmptySegment { path } => {
                write!(f, "Empty segment in path '{}'", path)
            }
            QueryError::Decode { message } => {
                write!(f, "Failed to parse JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Decode {
            message: err.to_string(),
        }
    }
}
