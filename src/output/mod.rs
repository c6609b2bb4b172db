//! Manifest output
//!
//! Serializes a `ScanResult` as a JSON array of
//! `{"directory": ..., "files": [...]}` objects, to a string, a file or
//! stdout.

mod json;

pub use json::{print_manifest, to_manifest_json, write_manifest};
