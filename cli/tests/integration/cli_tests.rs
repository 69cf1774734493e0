//! Integration tests for the waggle CLI surface.
//!
//! These verify argument parsing and the commands that need no config file.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn waggle() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("waggle"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_help_flag_shows_help() {
    waggle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    waggle()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waggle"));
}

#[test]
fn test_version_command_needs_no_config() {
    // `version` must work even when no config file exists anywhere.
    waggle()
        .args(["version", "--config", "/nonexistent/agent.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("waggle 0.1.0"));
}

// --- Command hierarchy tests ---

#[test]
fn test_help_shows_lifecycle_commands() {
    waggle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("restart"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_unknown_command_fails_with_usage_error() {
    waggle().arg("bogus").assert().code(2);
}

#[test]
fn test_no_color_env_value_never_breaks_parsing() {
    // The convention is "any non-empty value disables color"; values like
    // "1" or "yes" must not be fed to the --no-color flag parser.
    for value in ["1", "yes", "true"] {
        waggle()
            .arg("--help")
            .env("NO_COLOR", value)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }
}

#[test]
fn test_debug_flag_is_global() {
    waggle()
        .args(["status", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--debug"));
}
