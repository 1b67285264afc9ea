//! End-to-end tests for `screegen update-version`.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::write_manifest_tree;

/// Path to the screegen binary
fn screegen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_screegen")
}

fn run_update(root: &std::path::Path, version: &str) -> std::process::Output {
    Command::new(screegen_bin())
        .args(["update-version", version, "--root", root.to_str().unwrap()])
        .output()
        .expect("Failed to execute command")
}

// ============================================================================
// Happy Path Tests
// ============================================================================

#[test]
fn test_updates_all_manifests() {
    let temp = TempDir::new().unwrap();
    write_manifest_tree(temp.path());

    let output = run_update(temp.path(), "1.2.3");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let root: toml::Table =
        toml::from_str(&fs::read_to_string(temp.path().join("Cargo.toml")).unwrap()).unwrap();
    assert_eq!(root["package"]["version"].as_str(), Some("1.2.3"));
    // Non-internal dependencies are untouched
    assert_eq!(root["dependencies"]["anyhow"].as_str(), Some("1.0"));

    let example: toml::Table =
        toml::from_str(&fs::read_to_string(temp.path().join("demos/example/Cargo.toml")).unwrap())
            .unwrap();
    assert_eq!(example["package"]["version"].as_str(), Some("1.2.3"));
    assert_eq!(
        example["dependencies"]["screegen"]["version"].as_str(),
        Some("1.2.3")
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Cargo.toml"));
    assert!(stdout.contains("version: 0.1.0 → 1.2.3"));
    assert!(stdout.contains("Updated 3 file(s)"));
}

#[test]
fn test_template_manifest_gets_caret_prefix() {
    let temp = TempDir::new().unwrap();
    write_manifest_tree(temp.path());

    let output = run_update(temp.path(), "1.2.3");
    assert_eq!(output.status.code(), Some(0));

    let template: toml::Table =
        toml::from_str(&fs::read_to_string(temp.path().join("templates/Cargo.toml.template")).unwrap())
            .unwrap();
    assert_eq!(
        template["dependencies"]["screegen"].as_str(),
        Some("^1.2.3")
    );
    assert_eq!(template["package"]["version"].as_str(), Some("1.2.3"));
}

#[test]
fn test_prerelease_and_build_metadata_accepted() {
    let temp = TempDir::new().unwrap();
    write_manifest_tree(temp.path());

    let output = run_update(temp.path(), "2.0.0-beta.1+build.5");
    assert_eq!(output.status.code(), Some(0));

    let root: toml::Table =
        toml::from_str(&fs::read_to_string(temp.path().join("Cargo.toml")).unwrap()).unwrap();
    assert_eq!(
        root["package"]["version"].as_str(),
        Some("2.0.0-beta.1+build.5")
    );
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_invalid_version_exits_nonzero_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_manifest_tree(temp.path());
    let before = fs::read_to_string(temp.path().join("Cargo.toml")).unwrap();

    let output = run_update(temp.path(), "abc");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid version format"));

    // No file was touched
    assert_eq!(
        fs::read_to_string(temp.path().join("Cargo.toml")).unwrap(),
        before
    );
}

#[test]
fn test_missing_argument_exits_nonzero() {
    let output = Command::new(screegen_bin())
        .args(["update-version"])
        .output()
        .expect("Failed to execute command");
    assert_ne!(output.status.code(), Some(0));
}

// ============================================================================
// Failure Handling Tests
// ============================================================================

#[test]
fn test_missing_manifest_warns_and_continues() {
    let temp = TempDir::new().unwrap();
    write_manifest_tree(temp.path());
    fs::remove_file(temp.path().join("demos/example/Cargo.toml")).unwrap();

    let output = run_update(temp.path(), "1.2.3");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning: file not found: demos/example/Cargo.toml"));
    assert!(stdout.contains("Updated 2 file(s)"));
}

#[test]
fn test_malformed_manifest_is_fatal() {
    let temp = TempDir::new().unwrap();
    write_manifest_tree(temp.path());
    fs::write(temp.path().join("Cargo.toml"), "not [valid toml").unwrap();

    let output = run_update(temp.path(), "1.2.3");
    assert_ne!(output.status.code(), Some(0));
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_structure() {
    let temp = TempDir::new().unwrap();
    write_manifest_tree(temp.path());

    let output = Command::new(screegen_bin())
        .args([
            "update-version",
            "1.2.3",
            "--root",
            temp.path().to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(result["updated"].as_array().unwrap().len(), 3);
    assert_eq!(result["missing"].as_array().unwrap().len(), 0);
}
