//! Integration tests for top-level CLI behavior.

mod common;

use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    dirsift!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("walk"))
        .stdout(predicate::str::contains("tree"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag() {
    dirsift!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirsift"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    dirsift!().assert().failure();
}

#[test]
fn unknown_format_is_usage_error() {
    dirsift!()
        .args(["walk", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}
