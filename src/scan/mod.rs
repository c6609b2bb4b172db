//! Directory scanning
//!
//! Walks a tree from a root and groups the files matching a target
//! extension by the directory they live in.
//!
//! - `ScanConfig`: target extension and excluded directory names
//! - `Scanner`: runs the walk and produces a `ScanResult`
//! - `DirectoryRecord`: one directory and its matching file names

mod config;
mod filter;
mod record;
mod scanner;

pub use config::{DEFAULT_EXCLUDED_DIRS, ScanConfig};
pub use filter::{is_pruned_dir, matches_extension};
pub use record::{DirectoryRecord, ScanResult};
pub use scanner::{Scanner, relative_directory, scan};
