//! Argument parsing, help and version output.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::launcher;

#[test]
fn test_cli_help_flag_lists_commands() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_cli_hides_url_overrides_from_help() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--archive-url").not())
        .stdout(predicate::str::contains("--branch"));
}

#[test]
fn test_version_command_shows_version() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "launcher ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_subcommand_fails() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_explicit_missing_settings_file_fails() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .args(["--settings", "nope.yaml", "config", "path"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: cannot read"));
}

#[test]
fn test_settings_file_and_flags_shape_paths() {
    let root = TempDir::new().unwrap();
    std::fs::write(root.path().join("launcher.yaml"), "repo_name: other-app\n").unwrap();
    launcher(&root)
        .args(["config", "path", "--branch", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other-app-main"))
        .stdout(predicate::str::contains("config.json"));
}

#[cfg(unix)]
#[test]
fn test_missing_node_points_to_download_page() {
    let root = TempDir::new().unwrap();
    let empty_path = root.path().join("bin");
    std::fs::create_dir(&empty_path).unwrap();
    launcher(&root)
        .arg("update")
        .env("PATH", &empty_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Node.js is not installed"))
        .stderr(predicate::str::contains("https://nodejs.org/en/download/"));
}
