use std::path::{Component, Path};

use walkdir::WalkDir;

use super::{Branches, TreeNode};
use crate::error::{DirsiftError, Result};
use crate::walk::{CancelToken, is_hidden_name};

/// Builds a [`TreeNode`] for one root directory.
///
/// The walk is single-threaded and sorted by file name, so the resulting
/// mapping order is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    cancel: CancelToken,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Walk `root` and return a mapping keyed by the root's own name.
    ///
    /// Directories rejected by `branches` are pruned with their subtree.
    /// When the root name itself is rejected the result is empty.
    ///
    /// # Errors
    /// Returns [`DirsiftError::RootNotFound`] if `root` is not a directory,
    /// and fails on the first walk error.
    pub fn build(&self, root: &Path, branches: Option<&Branches>) -> Result<TreeNode> {
        if !root.is_dir() {
            return Err(DirsiftError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let root_name = root_name(root)?;
        let mut tree = TreeNode::default();
        let root_segments = vec![root_name];
        if branches.is_some_and(|b| !b.admits_folder_path(&root_segments)) {
            tracing::debug!(root = %root.display(), "root rejected by branch rules");
            return Ok(tree);
        }
        tree.ensure_dir(&root_segments);

        let mut entries = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();
        let mut files = 0usize;

        while let Some(entry) = entries.next() {
            self.cancel.check()?;
            let entry = entry.map_err(|err| DirsiftError::from_walk(root, err))?;
            let file_type = entry.file_type();
            let name = entry.file_name().to_string_lossy().into_owned();

            if is_hidden_name(&name) {
                if file_type.is_dir() {
                    entries.skip_current_dir();
                }
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let mut segments = root_segments.clone();
            segments.extend(relative.components().filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            }));

            if file_type.is_dir() {
                if branches.is_some_and(|b| !b.admits_folder_path(&segments)) {
                    entries.skip_current_dir();
                    continue;
                }
                tree.ensure_dir(&segments);
            } else if file_type.is_file() {
                let level = segments.len() - 1;
                if branches.is_some_and(|b| !b.admits_file(level, &name)) {
                    continue;
                }
                tree.ensure_dir(&segments[..level]).insert_file(name);
                files += 1;
            }
        }

        tracing::info!(root = %root.display(), files, "tree built");
        Ok(tree)
    }
}

/// The root's own name, resolving `.` and `..` style paths first.
fn root_name(root: &Path) -> Result<String> {
    if let Some(name) = root.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let canonical = dunce::canonicalize(root)?;
    Ok(canonical.file_name().map_or_else(
        || canonical.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    ))
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
