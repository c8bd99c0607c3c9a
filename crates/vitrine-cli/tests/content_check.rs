use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_content_check_accepts_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.toml");
    fs::write(&path, "announcement = \"hello\"\n").unwrap();

    cargo_bin_cmd!("vitrine")
        .args(["content", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"))
        .stdout(predicate::str::contains("3 snippets"));
}

#[test]
fn test_content_check_rejects_bad_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.toml");
    fs::write(&path, "snippets = [broken").unwrap();

    cargo_bin_cmd!("vitrine")
        .args(["content", "check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("page.toml"));
}

#[test]
fn test_content_check_rejects_empty_snippets() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.toml");
    fs::write(&path, "snippets = []\n").unwrap();

    cargo_bin_cmd!("vitrine")
        .args(["content", "check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("snippets"));
}

#[test]
fn test_content_check_missing_file() {
    cargo_bin_cmd!("vitrine")
        .args(["content", "check", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}
