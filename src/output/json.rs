//! JSON manifest output

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ManifestError, Result};
use crate::scan::ScanResult;

/// Render records as a pretty-printed JSON array (2-space indent, no
/// trailing newline). File lists are sorted; record order is kept.
///
/// Non-ASCII characters are written as raw UTF-8, not as `\uXXXX` escapes,
/// so the bytes differ from an ASCII-only encoder's output for such names
/// even though the decoded JSON is the same.
pub fn to_manifest_json(result: &ScanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write the manifest to `path`, replacing any existing file.
pub fn write_manifest(path: &Path, result: &ScanResult) -> Result<()> {
    let json = to_manifest_json(result)?;
    fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(output = %path.display(), records = result.len(), "manifest written");
    Ok(())
}

/// Print the manifest to stdout.
pub fn print_manifest(result: &ScanResult) -> Result<()> {
    let json = to_manifest_json(result)?;
    println!("{}", json);
    Ok(())
}
