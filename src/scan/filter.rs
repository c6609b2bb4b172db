//! Name-based filters applied during the walk

use std::collections::HashSet;

/// Check if a file name ends with `extension`, ignoring case on both sides.
///
/// This is a plain suffix test: `txt` matches `notes.mytxt` too, and an
/// empty extension matches everything.
pub fn matches_extension(name: &str, extension: &str) -> bool {
    name.to_lowercase().ends_with(&extension.to_lowercase())
}

/// Check if a subdirectory should be pruned before descending into it.
pub fn is_pruned_dir(name: &str, excluded: &HashSet<String>) -> bool {
    excluded.contains(name) || name.starts_with('.')
}
