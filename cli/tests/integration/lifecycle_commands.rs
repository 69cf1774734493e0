//! Integration tests for `waggle start`, `stop`, and `restart` failure and
//! cleanup paths. Paths that would actually detach a background agent are
//! covered by unit tests against the lifecycle service instead.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NO_SUCH_PID: u32 = 999_999_999;

fn waggle() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("waggle"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn setup(dir: &TempDir) -> (String, PathBuf) {
    let config_path = dir.path().join("agent.json");
    let pid_path = dir.path().join("agent.pid");
    let content = serde_json::json!({
        "account": "acme",
        "access_token": "tok-123",
        "services": ["nginx"],
        "stack": "production",
        "pid_file": pid_path,
    });
    std::fs::write(&config_path, content.to_string()).expect("write config");
    (config_path.to_string_lossy().into_owned(), pid_path)
}

#[test]
fn test_stop_without_record_fails() {
    let dir = TempDir::new().expect("temp dir");
    let (config, _pid_path) = setup(&dir);
    waggle()
        .args(["stop", "--config", &config])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not running"));
}

#[test]
fn test_stop_with_stale_record_succeeds_and_clears_it() {
    let dir = TempDir::new().expect("temp dir");
    let (config, pid_path) = setup(&dir);
    std::fs::write(&pid_path, format!("{NO_SUCH_PID}\n")).expect("write pid");
    // The recorded process is long gone, so stop treats it as already
    // terminated and removes the record.
    waggle()
        .args(["stop", "--config", &config])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("stopped"));
    assert!(!pid_path.exists());
}

#[test]
fn test_start_refuses_when_instance_is_live() {
    let dir = TempDir::new().expect("temp dir");
    let (config, pid_path) = setup(&dir);
    std::fs::write(&pid_path, format!("{}\n", std::process::id())).expect("write pid");
    waggle()
        .args(["start", "--config", &config])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already running"));
}

#[test]
fn test_start_refusal_leaves_record_untouched() {
    let dir = TempDir::new().expect("temp dir");
    let (config, pid_path) = setup(&dir);
    let own_pid = std::process::id();
    std::fs::write(&pid_path, format!("{own_pid}\n")).expect("write pid");
    waggle()
        .args(["start", "--config", &config])
        .assert()
        .code(1);
    let content = std::fs::read_to_string(&pid_path).expect("pid file still present");
    assert_eq!(content.trim(), own_pid.to_string());
}

#[test]
fn test_restart_without_record_fails() {
    let dir = TempDir::new().expect("temp dir");
    let (config, _pid_path) = setup(&dir);
    waggle()
        .args(["restart", "--config", &config])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not running"));
}
