use std::path::PathBuf;

use serde_json::{Value, json};

use super::*;
use crate::error::{DirsiftError, RootFailure};
use crate::walk::PathSet;

fn traversal(paths: &[&str], failures: Vec<RootFailure>) -> Traversal {
    Traversal {
        paths: paths.iter().map(PathBuf::from).collect::<PathSet>(),
        failures,
    }
}

#[test]
fn walk_output_has_sorted_paths_and_summary() {
    let output = JsonFormatter
        .format_walk(&traversal(&["b.txt", "a.txt"], Vec::new()))
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["paths"], json!(["a.txt", "b.txt"]));
    assert_eq!(value["summary"]["paths"], 2);
    assert_eq!(value["summary"]["failed_roots"], 0);
    assert!(value.get("failures").is_none());
}

#[test]
fn walk_output_lists_failures() {
    let failure = RootFailure::new(
        PathBuf::from("gone"),
        DirsiftError::RootNotFound {
            path: PathBuf::from("gone"),
        },
    );
    let output = JsonFormatter
        .format_walk(&traversal(&["a.txt"], vec![failure]))
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["failed_roots"], 1);
    assert_eq!(value["failures"][0]["root"], "gone");
    assert_eq!(value["failures"][0]["error_type"], "RootNotFound");
}

#[test]
fn tree_output_is_nested_object() {
    let fixture = crate::walk::test_fixtures::TreeFixture::with_entries(&["x/y.txt", "x/z/w.txt"]);
    let tree = crate::tree::TreeBuilder::new()
        .build(&fixture.join("x"), None)
        .unwrap();

    let output = JsonFormatter.format_tree(&tree).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value, json!({"x": {"y.txt": null, "z": {"w.txt": null}}}));
}
