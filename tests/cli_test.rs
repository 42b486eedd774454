//! Integration tests for the CLI binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary command with HOME pointed at a scratch directory so discovery
/// never touches the real user configuration.
fn toolchest(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("toolchest"));
    cmd.env("HOME", temp.path());
    cmd.env_remove("XDG_CONFIG_HOME");
    cmd.env_remove("XDG_DATA_HOME");
    cmd.env_remove("COMPLETE");
    cmd
}

#[test]
fn cli_shows_help() {
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Install developer tools"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn cli_shows_version() {
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_no_args_shows_help_and_fails() {
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.arg("definitely-not-registered");
    cmd.assert().failure();
}

#[test]
fn cli_list_succeeds() {
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.arg("list");
    cmd.assert().success();
}

#[test]
fn cli_list_json_emits_valid_json() {
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.args(["list", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let categories = parsed.as_array().unwrap();
    // The main category is always registered.
    assert!(categories
        .iter()
        .any(|c| c["prog_name"] == "main"));
}

#[test]
fn cli_completion_mode_registers_all_plugins() {
    // With the completion fast path active, eligibility probing is skipped
    // entirely, so every built-in category shows up no matter the machine.
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.env("COMPLETE", "1");
    cmd.args(["list", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let categories = parsed.as_array().unwrap();
    let ide = categories
        .iter()
        .find(|c| c["prog_name"] == "ide")
        .unwrap();
    let frameworks: Vec<_> = ide["frameworks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["prog_name"].as_str().unwrap().to_string())
        .collect();
    assert!(frameworks.contains(&"intellij-idea".to_string()));
    assert!(frameworks.contains(&"eclipse".to_string()));
}

#[test]
fn cli_generates_bash_completions() {
    let temp = TempDir::new().unwrap();
    let mut cmd = toolchest(&temp);
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("toolchest"));
}
