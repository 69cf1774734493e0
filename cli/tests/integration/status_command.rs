//! Integration tests for `waggle status` against real PID files.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A pid far above any plausible live process.
const NO_SUCH_PID: u32 = 999_999_999;

fn waggle() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("waggle"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a config pointing at a pid file inside `dir`; returns both paths.
fn setup(dir: &TempDir) -> (String, PathBuf) {
    let config_path = dir.path().join("agent.json");
    let pid_path = dir.path().join("agent.pid");
    let content = serde_json::json!({
        "account": "acme",
        "access_token": "tok-123",
        "services": ["nginx", "mysql"],
        "stack": "production",
        "pid_file": pid_path,
    });
    std::fs::write(&config_path, content.to_string()).expect("write config");
    (config_path.to_string_lossy().into_owned(), pid_path)
}

#[test]
fn test_status_without_record_reports_not_running() {
    let dir = TempDir::new().expect("temp dir");
    let (config, _pid_path) = setup(&dir);
    waggle()
        .args(["status", "--config", &config])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not running"));
}

#[test]
fn test_status_with_live_pid_reports_running() {
    let dir = TempDir::new().expect("temp dir");
    let (config, pid_path) = setup(&dir);
    // The test runner itself is a conveniently long-lived live process.
    std::fs::write(&pid_path, format!("{}\n", std::process::id())).expect("write pid");
    waggle()
        .args(["status", "--config", &config])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("running"));
}

#[test]
fn test_status_with_stale_pid_reports_stale() {
    let dir = TempDir::new().expect("temp dir");
    let (config, pid_path) = setup(&dir);
    std::fs::write(&pid_path, format!("{NO_SUCH_PID}\n")).expect("write pid");
    waggle()
        .args(["status", "--config", &config])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("stale"));
}

#[test]
fn test_status_does_not_modify_a_stale_record() {
    let dir = TempDir::new().expect("temp dir");
    let (config, pid_path) = setup(&dir);
    std::fs::write(&pid_path, format!("{NO_SUCH_PID}\n")).expect("write pid");
    waggle()
        .args(["status", "--config", &config])
        .assert()
        .code(1);
    let content = std::fs::read_to_string(&pid_path).expect("pid file still present");
    assert_eq!(content.trim(), NO_SUCH_PID.to_string());
}

#[test]
fn test_status_with_corrupt_record_reports_error() {
    let dir = TempDir::new().expect("temp dir");
    let (config, pid_path) = setup(&dir);
    std::fs::write(&pid_path, "not-a-pid\n").expect("write pid");
    waggle()
        .args(["status", "--config", &config])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not contain a process id"));
}
