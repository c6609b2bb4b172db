//! Scanner - walks the tree and collects matching files per directory

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, info, trace};

use crate::error::{ManifestError, Result};

use super::config::ScanConfig;
use super::filter::{is_pruned_dir, matches_extension};
use super::record::{DirectoryRecord, ScanResult};

/// Scan `root` for files ending in `extension`, pruning `excluded` and
/// hidden directories.
pub fn scan(root: &Path, extension: &str, excluded: &HashSet<String>) -> Result<ScanResult> {
    let config = ScanConfig {
        extension: extension.to_string(),
        excluded: excluded.clone(),
    };
    Scanner::new(config).scan(root)
}

/// Sequential directory scanner.
///
/// Siblings are visited in file-name order, so scanning an unchanged tree
/// twice gives the same result.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk `root` and return one record per directory with at least one
    /// matching file, parents before children.
    ///
    /// A missing root yields an empty result. Errors met while reading the
    /// tree abort the scan.
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        let root = resolve_root(root)?;
        if !root.is_dir() {
            debug!(root = %root.display(), "root is not a directory, nothing to scan");
            return Ok(Vec::new());
        }

        let excluded = self.config.excluded.clone();
        let walker = WalkBuilder::new(&root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !is_dir_entry(entry) {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if is_pruned_dir(&name, &excluded) {
                    debug!(dir = %entry.path().display(), "pruning directory");
                    return false;
                }
                true
            })
            .build();

        self.collect_records(&root, walker)
    }

    /// Group walk entries into records. The first walk error aborts
    /// collection and is returned as is.
    fn collect_records<I>(&self, root: &Path, entries: I) -> Result<ScanResult>
    where
        I: IntoIterator<Item = std::result::Result<DirEntry, ignore::Error>>,
    {
        // Slot per visited directory; `None` marks a directory whose own name
        // is excluded, which is walked but never reported.
        let mut slots: Vec<Option<DirectoryRecord>> = Vec::new();
        let mut slot_of: HashMap<PathBuf, usize> = HashMap::new();

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if entry.depth() == 0 || is_dir_entry(&entry) {
                let name = path
                    .file_name()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();
                let record = if self.config.excluded.contains(&name) {
                    debug!(dir = %path.display(), "directory name is excluded, not reporting it");
                    None
                } else {
                    Some(DirectoryRecord::new(relative_directory(root, path)))
                };
                slot_of.insert(path.to_path_buf(), slots.len());
                slots.push(record);
                continue;
            }

            // Symlink to a directory: a subdirectory that is never descended
            if path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !matches_extension(&name, &self.config.extension) {
                continue;
            }

            let slot = path.parent().and_then(|parent| slot_of.get(parent));
            if let Some(Some(record)) = slot.map(|&i| &mut slots[i]) {
                trace!(file = %path.display(), "matched");
                record.add_file(name.into_owned());
            }
        }

        let result: ScanResult = slots
            .into_iter()
            .flatten()
            .filter(|record| !record.is_empty())
            .collect();

        info!(
            root = %root.display(),
            records = result.len(),
            files = result.iter().map(DirectoryRecord::len).sum::<usize>(),
            "scan finished"
        );

        Ok(result)
    }
}

/// Path of `dir` relative to `root` with `/` separators; `""` for the root.
pub fn relative_directory(root: &Path, dir: &Path) -> String {
    let Ok(relative) = dir.strip_prefix(root) else {
        return String::new();
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_dir_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Make `root` absolute against the working directory and fold `.`/`..`
/// lexically. Symlinks are left alone.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|source| ManifestError::CurrentDir {
            path: root.to_path_buf(),
            source,
        })?;
        cwd.join(root)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
