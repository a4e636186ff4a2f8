//! Result output writing.
//!
//! Results go to stdout by default, or to a file when the CLI was given an
//! output path. File output supports truncate and append modes.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes result lines to a file, truncating or appending.
pub fn write_results_to_file<P: AsRef<Path>>(
    path: P,
    results: &[String],
    append: bool,
) -> Result<()> {
    let path_ref = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path_ref)
        .with_context(|| format!("Failed to open {}", path_ref.display()))?;
    for line in results {
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write {}", path_ref.display()))?;
    }
    Ok(())
}

/// Writes result lines to stdout.
pub fn write_results_to_stdout(results: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for line in results {
        writeln!(handle, "{}", line).context("Failed to write to stdout")?;
    }
    Ok(())
}
