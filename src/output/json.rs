use serde::Serialize;

use crate::error::Result;
use crate::tree::TreeNode;
use crate::walk::Traversal;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct WalkOutput<'a> {
    summary: Summary,
    paths: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<FailureEntry<'a>>,
}

#[derive(Serialize)]
struct Summary {
    paths: usize,
    failed_roots: usize,
}

#[derive(Serialize)]
struct FailureEntry<'a> {
    root: String,
    error_type: &'a str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format_walk(&self, traversal: &Traversal) -> Result<String> {
        let output = WalkOutput {
            summary: Summary {
                paths: traversal.paths.len(),
                failed_roots: traversal.failures.len(),
            },
            paths: traversal
                .paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            failures: traversal
                .failures
                .iter()
                .map(|f| FailureEntry {
                    root: f.root.display().to_string(),
                    error_type: f.error.error_type(),
                    message: f.error.to_string(),
                })
                .collect(),
        };

        let mut rendered = serde_json::to_string_pretty(&output)?;
        rendered.push('\n');
        Ok(rendered)
    }

    fn format_tree(&self, tree: &TreeNode) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(tree)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
