use std::fmt::Write;

use crate::error::Result;
use crate::tree::TreeNode;
use crate::walk::Traversal;

use super::OutputFormatter;

const INDENT: &str = "  ";

/// One path per line; trees are indented two spaces per level with a
/// trailing `/` on directories.
///
/// Root failures are not part of the text body; the caller reports them on
/// stderr.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_walk(&self, traversal: &Traversal) -> Result<String> {
        let mut output = String::new();
        for path in traversal.paths.iter() {
            let _ = writeln!(output, "{}", path.display());
        }
        Ok(output)
    }

    fn format_tree(&self, tree: &TreeNode) -> Result<String> {
        let mut output = String::new();
        write_node(&mut output, tree, 0);
        Ok(output)
    }
}

fn write_node(output: &mut String, node: &TreeNode, depth: usize) {
    let indent = INDENT.repeat(depth);
    for (name, child) in node.iter() {
        match child {
            Some(dir) => {
                let _ = writeln!(output, "{indent}{name}/");
                write_node(output, dir, depth + 1);
            }
            None => {
                let _ = writeln!(output, "{indent}{name}");
            }
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
