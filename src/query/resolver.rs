//! Segment resolution against concrete nodes.
//!
//! Given one raw path segment and the container it is being applied to, the
//! resolver computes the concrete set of keys to descend into. Arrays accept
//! single indices (negative counts from the end), `a:b` ranges and the `*`
//! wildcard; objects treat the segment as a regular expression that is
//! prefix-matched against every key. Resolution always happens against the
//! runtime shape of the node - nothing is precomputed before traversal
//! reaches it, since each array's length may differ across wildcard branches.

use regex::Regex;
use tracing::debug;

use super::error::QueryError;
use crate::document::node::JsonValue;
use crate::document::writer::{to_elided_string, ELIDE_WIDTH};

/// A concrete key resolved from a segment: an array index or an object key.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Resolves a segment against `node`, returning the keys to descend into.
///
/// In strict mode an empty key set is an error (`PathNotFound`) and
/// out-of-bounds indices fail with `InvalidIndex`. In quiet mode indices are
/// clamped instead and misses resolve to an empty key set. Malformed ranges
/// and unparseable regexes fail in both modes, as does applying a segment to
/// a scalar.
pub fn resolve_keys(
    node: &JsonValue,
    segment: &str,
    strict: bool,
) -> Result<Vec<Key>, QueryError> {
    let keys = match node {
        JsonValue::Array(items) => resolve_array_keys(segment, items.len(), strict)?,
        JsonValue::Object(map) => {
            // The bare wildcard selects every key; it is not a valid regex,
            // so it gets the same special treatment it has for arrays.
            if segment == "*" {
                map.keys().map(|key| Key::Name(key.clone())).collect()
            } else {
                let re = Regex::new(segment).map_err(|e| QueryError::InvalidRegex {
                    segment: segment.to_string(),
                    message: e.to_string(),
                })?;
                map.keys()
                    .filter(|key| matches_prefix(&re, key))
                    .map(|key| Key::Name(key.clone()))
                    .collect()
            }
        }
        scalar => {
            return Err(QueryError::TypeMismatch {
                segment: segment.to_string(),
                node: to_elided_string(scalar, ELIDE_WIDTH),
            })
        }
    };
    if keys.is_empty() {
        debug!(segment, node = node.type_name(), "segment matched no keys");
        if strict {
            return Err(QueryError::PathNotFound {
                segment: segment.to_string(),
                node: to_elided_string(node, ELIDE_WIDTH),
            });
        }
    }
    Ok(keys)
}

/// Anchored-at-start match, equivalent to a prefix match rather than a full
/// match: segment `ba` matches key `bar`.
fn matches_prefix(re: &Regex, key: &str) -> bool {
    re.find(key).map(|m| m.start() == 0).unwrap_or(false)
}

fn resolve_array_keys(segment: &str, len: usize, strict: bool) -> Result<Vec<Key>, QueryError> {
    let n = len as i64;
    // The wildcard is shorthand for the full range.
    let segment = if segment == "*" { ":" } else { segment };
    if !segment.contains(':') {
        return resolve_index(segment, n, strict);
    }

    let trimmed = segment.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 2 {
        return Err(QueryError::InvalidRange {
            segment: segment.to_string(),
        });
    }
    let parse_bound = |text: &str| -> Result<i64, QueryError> {
        text.parse::<i64>().map_err(|_| QueryError::InvalidRange {
            segment: segment.to_string(),
        })
    };
    let a = if parts[0].is_empty() {
        0
    } else {
        parse_bound(parts[0])?
    };
    let b = if parts[1].is_empty() {
        n - 1
    } else {
        parse_bound(parts[1])?
    };
    // Negative bounds count from the end. A negative upper bound is already
    // exclusive ("all but the last X"); a non-negative one is inclusive and
    // needs the +1 adjustment.
    let a = if a < 0 { n - a.abs() } else { a };
    let b = if b < 0 { n - b.abs() } else { b + 1 };
    let start = a.clamp(0, n) as usize;
    let end = b.clamp(0, n) as usize;
    if start >= end {
        return Ok(Vec::new());
    }
    Ok((start..end).map(Key::Index).collect())
}

fn resolve_index(segment: &str, n: i64, strict: bool) -> Result<Vec<Key>, QueryError> {
    let index = match segment.trim().parse::<i64>() {
        Ok(i) => i,
        Err(_) => {
            if strict {
                return Err(QueryError::InvalidIndex {
                    segment: segment.to_string(),
                    len: n as usize,
                });
            }
            return Ok(Vec::new());
        }
    };
    if strict {
        if index >= n || index.abs() > n {
            return Err(QueryError::InvalidIndex {
                segment: segment.to_string(),
                len: n as usize,
            });
        }
        let resolved = if index < 0 { n + index } else { index };
        return Ok(vec![Key::Index(resolved as usize)]);
    }
    // Quiet mode clamps instead of failing. Note the non-negative clamp is
    // min(i, n), which can land one past the end; the walker then finds
    // nothing there and the path simply yields no result.
    let resolved = if index < 0 {
        let clamped = index.max(-n);
        if clamped < 0 {
            n + clamped
        } else {
            clamped
        }
    } else {
        index.min(n)
    };
    Ok(vec![Key::Index(resolved as usize)])
}
