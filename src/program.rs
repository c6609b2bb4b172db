//! Naming conventions tied to the program's own file name
//!
//! A copy of the binary named `inventory.pdf` (or `inventory.pdf.exe` on
//! Windows) inventories `pdf` files and writes `inventory.pdf.json`.

use std::env::consts::EXE_SUFFIX;
use std::path::Path;

use crate::error::{ManifestError, Result};

/// Program name without directories or the platform executable suffix.
pub fn program_name(argv0: &str) -> String {
    let file_name = Path::new(argv0)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| argv0.to_string());
    match file_name.strip_suffix(EXE_SUFFIX) {
        Some(stem) if !EXE_SUFFIX.is_empty() && !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// Target extension carried by a program name: the last `.` segment,
/// provided there are at least two.
pub fn extension_from_program_name(program: &str) -> Result<&str> {
    match program.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Ok(ext),
        _ => Err(ManifestError::MissingExtension {
            program: program.to_string(),
        }),
    }
}

/// Default output file name for a program name.
pub fn manifest_file_name(program: &str) -> String {
    format!("{}.json", program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_strips_directories() {
        let name = program_name(&format!("/usr/local/bin/inventory.pdf{}", EXE_SUFFIX));
        assert_eq!(name, "inventory.pdf");
    }

    #[test]
    fn test_extension_from_program_name() {
        assert_eq!(extension_from_program_name("inventory.pdf").unwrap(), "pdf");
        assert_eq!(
            extension_from_program_name("directory_contents_json.TXT").unwrap(),
            "TXT"
        );
        assert_eq!(extension_from_program_name("a.b.c").unwrap(), "c");
    }

    #[test]
    fn test_extension_missing() {
        let err = extension_from_program_name("dirmanifest").unwrap_err();
        assert!(matches!(err, ManifestError::MissingExtension { ref program } if program == "dirmanifest"));
        assert!(extension_from_program_name("trailing.").is_err());
    }

    #[test]
    fn test_manifest_file_name() {
        assert_eq!(manifest_file_name("inventory.pdf"), "inventory.pdf.json");
        assert_eq!(manifest_file_name("dirmanifest"), "dirmanifest.json");
    }
}
