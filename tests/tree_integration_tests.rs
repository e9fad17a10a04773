//! Integration tests for the `tree` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn tree_text_output() {
    let fixture = TestFixture::with_entries(&["x/y.txt", "x/z/w.txt", "x/.hidden"]);

    dirsift!()
        .current_dir(fixture.path())
        .args(["tree", "--no-config", "x"])
        .assert()
        .success()
        .stdout("x/\n  y.txt\n  z/\n    w.txt\n");
}

#[test]
fn tree_json_output() {
    let fixture = TestFixture::with_entries(&["x/y.txt", "x/z/w.txt"]);

    let output = dirsift!()
        .current_dir(fixture.path())
        .args(["tree", "--no-config", "x", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"x": {"y.txt": null, "z": {"w.txt": null}}})
    );
}

#[test]
fn tree_applies_configured_branches() {
    let fixture = TestFixture::with_entries(&[
        "proj/src/main.rs",
        "proj/target/debug/app",
        "proj/Cargo.lock",
        "proj/Cargo.toml",
    ]);
    fixture.create_config(
        r#"
[[tree.branches]]

[[tree.branches]]
folders = { exclude = ["target"] }
files = { exclude = ["Cargo.lock"] }
"#,
    );

    dirsift!()
        .current_dir(fixture.path())
        .args(["tree", "proj"])
        .assert()
        .success()
        .stdout("proj/\n  Cargo.toml\n  src/\n    main.rs\n");
}

#[test]
fn tree_rejects_overlapping_rules() {
    let fixture = TestFixture::with_entries(&["proj/a.txt"]);
    fixture.create_config(
        r#"
[[tree.branches]]
folders = { include = ["proj"], exclude = ["proj"] }
"#,
    );

    dirsift!()
        .current_dir(fixture.path())
        .args(["tree", "proj"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("both included and excluded"));
}

#[test]
fn tree_missing_root_fails() {
    let fixture = TestFixture::new();

    dirsift!()
        .current_dir(fixture.path())
        .args(["tree", "--no-config", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("RootNotFound"));
}
