//! Integration tests for config loading, validation, and `--update`.
//!
//! Every test points `--config` at a file inside a temp directory so the
//! system-wide config location is never touched.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn waggle() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("waggle"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a valid config into `dir` and return its path string.
fn write_config(dir: &TempDir, account: &str) -> String {
    let path = dir.path().join("agent.json");
    let pid_file = dir.path().join("agent.pid");
    let content = serde_json::json!({
        "account": account,
        "access_token": "tok-123",
        "services": ["nginx"],
        "stack": "production",
        "pid_file": pid_file,
    });
    std::fs::write(&path, content.to_string()).expect("write config");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_config_file_exits_2() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.json");
    waggle()
        .args(["status", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read config file"));
}

#[test]
fn test_malformed_config_exits_2() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("agent.json");
    std::fs::write(&path, "{ not json").expect("write config");
    waggle()
        .args(["status", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_empty_required_field_exits_2() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("agent.json");
    let content = serde_json::json!({
        "account": "",
        "access_token": "tok-123",
        "services": [],
        "stack": "production",
    });
    std::fs::write(&path, content.to_string()).expect("write config");
    waggle()
        .args(["status", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required field 'account'"));
}

#[test]
fn test_empty_services_list_exits_2() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("agent.json");
    let content = serde_json::json!({
        "account": "acme",
        "access_token": "tok-123",
        "services": [],
        "stack": "production",
    });
    std::fs::write(&path, content.to_string()).expect("write config");
    waggle()
        .args(["status", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required field 'services'"));
}

#[test]
fn test_cli_override_satisfies_missing_field() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("agent.json");
    let pid_file = dir.path().join("agent.pid");
    let content = serde_json::json!({
        "account": "",
        "access_token": "tok-123",
        "services": ["nginx"],
        "stack": "production",
        "pid_file": pid_file,
    });
    std::fs::write(&path, content.to_string()).expect("write config");
    // With the account supplied on the command line the config is valid
    // and status runs (exit 1: nothing recorded).
    waggle()
        .args(["status", "--account", "acme", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not running"));
}

#[test]
fn test_update_persists_cli_override() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "old-account");
    waggle()
        .args(["status", "--account", "new-account", "--update", "--config", &path])
        .assert()
        .code(1);

    let saved = std::fs::read_to_string(&path).expect("read config back");
    assert!(saved.contains("new-account"), "got {saved}");
    assert!(!saved.contains("old-account"), "got {saved}");
}

#[test]
fn test_without_update_override_is_not_persisted() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "old-account");
    waggle()
        .args(["status", "--account", "new-account", "--config", &path])
        .assert()
        .code(1);

    let saved = std::fs::read_to_string(&path).expect("read config back");
    assert!(saved.contains("old-account"), "got {saved}");
}
