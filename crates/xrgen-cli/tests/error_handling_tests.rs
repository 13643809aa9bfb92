//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The smallest template that passes preflight: a source file plus the
/// Android platform folder.
fn seed_minimal_template(samples_root: &Path) {
    let android = samples_root.join("XrAppBase/Projects/Android");
    fs::create_dir_all(&android).unwrap();
    fs::write(
        samples_root.join("XrAppBase/main.cpp"),
        "class XrAppBaseApp {};\n",
    )
    .unwrap();
    fs::write(android.join("build.py"), "# build\n").unwrap();
}

#[test]
fn test_existing_destination_is_rejected() {
    let tmp = TempDir::new().unwrap();
    seed_minimal_template(tmp.path());

    // Pre-existing destination with a file that must survive the failure.
    let dest = tmp.path().join("XrDemo");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("keep.txt"), "precious").unwrap();

    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.args(["new", "Demo", "--samples-root"])
        .arg(tmp.path())
        .args(["--yes", "--no-color"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert_eq!(
        fs::read_to_string(dest.join("keep.txt")).unwrap(),
        "precious"
    );
}

#[test]
fn test_missing_template_is_not_found() {
    let tmp = TempDir::new().unwrap();
    // Samples root exists but holds no XrAppBase.

    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.args(["new", "Demo", "--samples-root"])
        .arg(tmp.path())
        .args(["--yes", "--no-color"]);

    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));

    assert!(!tmp.path().join("XrDemo").exists());
}

#[test]
fn test_empty_name_is_invalid() {
    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.args(["new", "", "--yes", "--no-color"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid application name"));
}

#[test]
fn test_name_with_path_separator_is_invalid() {
    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.args(["new", "Demo/Evil", "--yes", "--no-color"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid application name"))
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn test_declined_confirmation_cancels() {
    let tmp = TempDir::new().unwrap();
    seed_minimal_template(tmp.path());

    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.args(["new", "Demo", "--samples-root"])
        .arg(tmp.path())
        .arg("--no-color")
        .write_stdin("n\n");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));

    assert!(!tmp.path().join("XrDemo").exists());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.args(["--quiet", "--verbose", "inspect", "Demo"]);

    cmd.assert().code(2);
}

#[test]
fn test_unknown_subcommand_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.arg("bogus");

    cmd.assert().code(2);
}

#[test]
fn test_unreadable_config_file_exits_with_config_code() {
    let mut cmd = Command::cargo_bin("xrgen").unwrap();
    cmd.args([
        "--config",
        "/definitely/missing/xrgen.toml",
        "inspect",
        "Demo",
    ]);

    cmd.assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}
