//! Per-directory records and their JSON shape

use serde::{Serialize, Serializer};

/// Records in the order their directories were visited (parent before
/// children).
pub type ScanResult = Vec<DirectoryRecord>;

/// One visited directory and the matching files found directly in it.
///
/// `files` keeps traversal order; it is sorted only when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryRecord {
    directory: String,
    files: Vec<String>,
}

impl DirectoryRecord {
    /// Empty record for `directory`, a `/`-separated path relative to the
    /// scan root (`""` for the root itself).
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>) {
        self.files.push(name.into());
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// File names in ascending order, as written to the manifest.
    pub fn sorted_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.files.iter().map(String::as_str).collect();
        files.sort_unstable();
        files
    }
}

/// Wire shape of a record: `{"directory": ..., "files": [...]}`.
#[derive(Serialize)]
struct ManifestEntry<'a> {
    directory: &'a str,
    files: Vec<&'a str>,
}

impl Serialize for DirectoryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ManifestEntry {
            directory: &self.directory,
            files: self.sorted_files(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_keeps_insertion_order() {
        let mut record = DirectoryRecord::new("docs");
        assert!(record.is_empty());
        record.add_file("b.pdf");
        record.add_file("a.pdf");
        assert_eq!(record.len(), 2);
        assert_eq!(record.files(), ["b.pdf", "a.pdf"]);
        assert_eq!(record.directory(), "docs");
    }

    #[test]
    fn test_sorted_files_is_idempotent() {
        let mut record = DirectoryRecord::new("");
        for name in ["z.txt", "B.txt", "a.txt", "Ä.txt"] {
            record.add_file(name);
        }
        let once = record.sorted_files();
        assert_eq!(once, ["B.txt", "a.txt", "z.txt", "Ä.txt"]);

        let mut twice = once.clone();
        twice.sort_unstable();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serialize_sorts_files() {
        let mut record = DirectoryRecord::new("a/b");
        record.add_file("y.txt");
        record.add_file("x.txt");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"directory": "a/b", "files": ["x.txt", "y.txt"]})
        );
        // Serializing does not reorder the record itself
        assert_eq!(record.files(), ["y.txt", "x.txt"]);
    }

    #[test]
    fn test_serialize_field_order() {
        let mut record = DirectoryRecord::new("");
        record.add_file("r.txt");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"directory":"","files":["r.txt"]}"#);
    }
}
