//! Extension and output name derived from the binary's own name
//!
//! Kept in its own test binary: it copies and executes the built binary,
//! which must not race with other tests spawning processes.


use assert_cmd::Command;
use harness::{TestTree, binary, parse_manifest};
use serde_json::json;
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn test_extension_from_program_name() {
    let tree = TestTree::new();
    tree.add_file("reports/q1.pdf");
    tree.add_file("reports/q1.txt");

    let bin_dir = TempDir::new().expect("Failed to create bin dir");
    let renamed = bin_dir.path().join("inventory.pdf");
    std::fs::copy(binary(), &renamed).expect("Failed to copy binary");

    Command::new(&renamed)
        .current_dir(tree.path())
        .env_remove("RUST_LOG")
        .assert()
        .success();

    assert_eq!(
        parse_manifest(&tree.read("inventory.pdf.json")),
        json!([{"directory": "reports", "files": ["q1.pdf"]}])
    );
}
