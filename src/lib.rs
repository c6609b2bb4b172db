//! dirmanifest - inventory a directory tree as a JSON manifest of files by
//! extension

pub mod error;
pub mod output;
pub mod program;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ManifestError, Result};
pub use output::{print_manifest, to_manifest_json, write_manifest};
pub use scan::{DEFAULT_EXCLUDED_DIRS, DirectoryRecord, ScanConfig, ScanResult, Scanner, scan};
