//! Configuration types for scanning

use std::collections::HashSet;

/// Directory names skipped by default: version control, caches, IDE state
/// and virtual environments.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "__pycache__", ".idea", "venv"];

/// What to look for and which directories to leave alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Case-insensitive filename suffix, e.g. `pdf` or `.pdf`.
    pub extension: String,
    /// Directory base names pruned from the walk. Names starting with `.`
    /// are pruned whether or not they appear here.
    pub excluded: HashSet<String>,
}

impl ScanConfig {
    /// Config for `extension` with the default exclusion set.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            excluded: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the exclusion set.
    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    /// Add one name to the exclusion set.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_excludes() {
        let config = ScanConfig::new("pdf");
        assert_eq!(config.extension, "pdf");
        for name in DEFAULT_EXCLUDED_DIRS {
            assert!(config.excluded.contains(*name), "missing {}", name);
        }
        assert_eq!(config.excluded.len(), DEFAULT_EXCLUDED_DIRS.len());
    }

    #[test]
    fn test_with_excluded_replaces_set() {
        let config = ScanConfig::new("txt").with_excluded(["build"]);
        assert_eq!(config.excluded.len(), 1);
        assert!(config.excluded.contains("build"));
        assert!(!config.excluded.contains("venv"));
    }

    #[test]
    fn test_exclude_adds_to_set() {
        let config = ScanConfig::new("txt").exclude("target");
        assert!(config.excluded.contains("target"));
        assert!(config.excluded.contains(".git"));
    }
}
