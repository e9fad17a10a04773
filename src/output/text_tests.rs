use std::path::PathBuf;

use super::*;
use crate::walk::PathSet;
use crate::walk::test_fixtures::TreeFixture;

#[test]
fn walk_lists_one_path_per_line() {
    let traversal = Traversal {
        paths: ["b/c.txt", "a.txt"].iter().map(PathBuf::from).collect::<PathSet>(),
        failures: Vec::new(),
    };

    let output = TextFormatter.format_walk(&traversal).unwrap();

    assert_eq!(output, format!("a.txt\n{}\n", PathBuf::from("b/c.txt").display()));
}

#[test]
fn empty_walk_is_empty_text() {
    let output = TextFormatter.format_walk(&Traversal::default()).unwrap();

    assert!(output.is_empty());
}

#[test]
fn tree_is_indented_with_directory_slashes() {
    let fixture = TreeFixture::with_entries(&["x/y.txt", "x/z/w.txt"]);
    let tree = crate::tree::TreeBuilder::new()
        .build(&fixture.join("x"), None)
        .unwrap();

    let output = TextFormatter.format_tree(&tree).unwrap();

    assert_eq!(output, "x/\n  y.txt\n  z/\n    w.txt\n");
}
