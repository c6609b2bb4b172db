//! Error type shared by the scanner, the serializer and the entry point

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort building or writing a manifest.
///
/// Nothing here is recovered from: each variant propagates to the caller
/// and, in the binary, ends the process.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The working directory was needed to resolve a relative root.
    #[error("cannot resolve '{path}': {source}")]
    CurrentDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Enumerating the tree failed (permission denied, I/O error, ...).
    #[error("{0}")]
    Walk(#[from] ignore::Error),

    #[error("cannot serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No `--ext` was given and the program name does not carry one.
    #[error("no target extension in program name '{program}' (use --ext)")]
    MissingExtension { program: String },
}

pub type Result<T> = std::result::Result<T, ManifestError>;
