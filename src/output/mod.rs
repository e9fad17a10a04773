mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use json::JsonFormatter;
pub use progress::WalkProgress;
pub use text::TextFormatter;

use std::path::Path;

use crate::error::Result;
use crate::tree::TreeNode;
use crate::walk::Traversal;

/// Renders traversal results for the terminal or for files.
pub trait OutputFormatter {
    /// Format a flat traversal result.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format_walk(&self, traversal: &Traversal) -> Result<String>;

    /// Format a built tree.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format_tree(&self, tree: &TreeNode) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Write `content` to `path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
