//! JSON input loading.
//!
//! This module reads JSON documents from files, stdin or inline strings and
//! decodes them into [`JsonValue`] trees. Files ending in `.gz` are
//! decompressed transparently.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::document::node::JsonValue;
use crate::document::parser::parse_json;

/// Loads and parses a JSON file from the filesystem.
///
/// Files with a `.gz` extension are gunzipped before parsing.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not
/// valid JSON.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?
    };

    load_json_str(&content)
}

/// Reads and parses JSON from standard input until EOF.
pub fn load_json_from_stdin() -> Result<JsonValue> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    if content.trim().is_empty() {
        anyhow::bail!("No JSON given to parse");
    }
    load_json_str(&content)
}

/// Parses JSON from an in-memory string (the `--json` CLI parameter).
pub fn load_json_str(content: &str) -> Result<JsonValue> {
    parse_json(content).context("Failed to parse JSON")
}

/// Reads and decompresses a gzipped file to a string.
fn read_gzipped_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to decompress {}", path.display()))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_json_str() {
        let doc = load_json_str(r#"{"a": 1}"#).unwrap();
        assert!(doc.is_object());
    }

    #[test]
    fn test_load_json_str_invalid() {
        assert!(load_json_str("nope{").is_err());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"items": [1, 2]}"#).unwrap();
        let doc = load_json_file(file.path()).unwrap();
        assert!(doc.is_object());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_json_file("/no/such/file.json").is_err());
    }

    #[test]
    fn test_load_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"zipped": true}"#).unwrap();
        let bytes = encoder.finish().unwrap();
        file.write_all(&bytes).unwrap();

        let doc = load_json_file(file.path()).unwrap();
        assert!(doc.is_object());
    }
}
