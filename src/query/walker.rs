//! Recursive tree traversal: extraction, exclusion and existence checks.
//!
//! Extraction and exclusion share one shape: resolve the head segment
//! against the current node, then for each resolved key either perform the
//! terminal action (emit the value, or delete the entry) or recurse into the
//! child with the remaining segments. Extraction never mutates; exclusion
//! mutates in place and never descends below a deleted node.

use tracing::debug;

use super::error::QueryError;
use super::path::Path;
use super::resolver::{resolve_keys, Key};
use crate::document::node::JsonValue;
use crate::document::writer::{to_elided_string, ELIDE_WIDTH};

/// One extracted value, along with the fully qualified path that reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<'a> {
    /// Separator-joined path from the document root to this value.
    pub path: String,
    /// The final key the value was found under.
    pub key: Key,
    /// The value itself, borrowed from the document.
    pub value: &'a JsonValue,
}

/// Extracts every value matching `segments`, in key-iteration order.
///
/// Array keys ascend numerically within a resolved range; object keys follow
/// the map's insertion order. In quiet mode resolver misses contribute no
/// results instead of failing.
pub fn extract<'a>(
    node: &'a JsonValue,
    segments: &[String],
    prefix: &str,
    separator: char,
    quiet: bool,
) -> Result<Vec<Extraction<'a>>, QueryError> {
    let Some((head, rest)) = segments.split_first() else {
        return Ok(Vec::new());
    };
    let keys = resolve_keys(node, head, !quiet)?;
    let mut results = Vec::new();
    for key in keys {
        let Some(child) = lookup(node, &key) else {
            // Only reachable through the quiet-mode index clamp, which can
            // resolve to one past the end of an array.
            if quiet {
                continue;
            }
            return Err(QueryError::PathNotFound {
                segment: key.to_string(),
                node: to_elided_string(node, ELIDE_WIDTH),
            });
        };
        let subpath = join_path(prefix, &key, separator);
        if rest.is_empty() {
            debug!(path = %subpath, "extracted value");
            results.push(Extraction {
                path: subpath,
                key,
                value: child,
            });
        } else {
            results.extend(extract(child, rest, &subpath, separator, quiet)?);
        }
    }
    Ok(results)
}

/// Deletes every entry matching `segments` from the document, in place.
///
/// Within one resolved key set, array deletions are applied from the highest
/// index down so earlier removals cannot shift the targets of later ones.
pub fn exclude(
    node: &mut JsonValue,
    segments: &[String],
    prefix: &str,
    separator: char,
    quiet: bool,
) -> Result<(), QueryError> {
    let Some((head, rest)) = segments.split_first() else {
        return Ok(());
    };
    let keys = resolve_keys(node, head, !quiet)?;
    if rest.is_empty() {
        return remove_keys(node, keys, prefix, separator, quiet);
    }
    for key in keys {
        if lookup(node, &key).is_none() {
            if quiet {
                continue;
            }
            return Err(QueryError::PathNotFound {
                segment: key.to_string(),
                node: to_elided_string(node, ELIDE_WIDTH),
            });
        }
        let subpath = join_path(prefix, &key, separator);
        if let Some(child) = lookup_mut(node, &key) {
            exclude(child, rest, &subpath, separator, quiet)?;
        }
    }
    Ok(())
}

/// Returns true when every path in `paths` resolves strictly against `doc`.
///
/// Checking stops at the first path that fails; the document is never
/// mutated. An empty path list trivially succeeds.
pub fn exists(doc: &JsonValue, paths: &[String], separator: char) -> bool {
    for raw in paths {
        let found = Path::parse(raw, separator)
            .and_then(|path| extract(doc, path.segments(), "", separator, false));
        match found {
            Ok(_) => {}
            Err(err) => {
                debug!(path = %raw, error = %err, "existence check failed");
                return false;
            }
        }
    }
    true
}

fn join_path(prefix: &str, key: &Key, separator: char) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, separator, key)
    }
}

fn lookup<'a>(node: &'a JsonValue, key: &Key) -> Option<&'a JsonValue> {
    match (node, key) {
        (JsonValue::Array(items), Key::Index(i)) => items.get(*i),
        (JsonValue::Object(map), Key::Name(name)) => map.get(name),
        _ => None,
    }
}

fn lookup_mut<'a>(node: &'a mut JsonValue, key: &Key) -> Option<&'a mut JsonValue> {
    match (node, key) {
        (JsonValue::Array(items), Key::Index(i)) => items.get_mut(*i),
        (JsonValue::Object(map), Key::Name(name)) => map.get_mut(name),
        _ => None,
    }
}

fn remove_keys(
    node: &mut JsonValue,
    keys: Vec<Key>,
    prefix: &str,
    separator: char,
    quiet: bool,
) -> Result<(), QueryError> {
    match node {
        JsonValue::Array(items) => {
            let mut indices: Vec<usize> = keys
                .into_iter()
                .filter_map(|key| match key {
                    Key::Index(i) => Some(i),
                    Key::Name(_) => None,
                })
                .collect();
            // Highest index first, so removals do not shift later targets.
            indices.sort_unstable_by(|a, b| b.cmp(a));
            for index in indices {
                if index < items.len() {
                    debug!(path = %join_path(prefix, &Key::Index(index), separator), "excluded value");
                    items.remove(index);
                } else if !quiet {
                    return Err(QueryError::InvalidIndex {
                        segment: index.to_string(),
                        len: items.len(),
                    });
                }
            }
        }
        JsonValue::Object(map) => {
            for key in keys {
                if let Key::Name(name) = key {
                    debug!(path = %join_path(prefix, &Key::Name(name.clone()), separator), "excluded value");
                    // shift_remove keeps the order of the remaining keys.
                    map.shift_remove(&name);
                }
            }
        }
        // The resolver rejects scalars before we get here.
        _ => {}
    }
    Ok(())
}
