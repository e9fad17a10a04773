//! Nested, ordered view of a directory hierarchy.

mod branches;
mod builder;

pub use branches::{BranchRule, Branches, NameRule};
pub use builder::TreeBuilder;

use indexmap::IndexMap;
use serde::Serialize;

/// One directory level of a built tree.
///
/// Maps entry names to `Some(node)` for directories and `None` for files, in
/// walk order (sorted by file name). Serializes to a JSON object with `null`
/// leaves: `{"x": {"y.txt": null, "z": {"w.txt": null}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TreeNode {
    entries: IndexMap<String, Option<TreeNode>>,
}

impl TreeNode {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The directory node named `name`, if present.
    #[must_use]
    pub fn dir(&self, name: &str) -> Option<&Self> {
        self.entries.get(name).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn is_file(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(None))
    }

    /// Entries in order; `None` marks a file.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Self>)> {
        self.entries
            .iter()
            .map(|(name, node)| (name.as_str(), node.as_ref()))
    }

    /// Walk `segments` from this node, creating directory entries as needed.
    ///
    /// A file already stored under one of the names is replaced by a
    /// directory.
    fn ensure_dir(&mut self, segments: &[String]) -> &mut Self {
        let mut node = self;
        for segment in segments {
            let slot = node.entries.entry(segment.clone()).or_insert(None);
            node = slot.get_or_insert_with(Self::default);
        }
        node
    }

    fn insert_file(&mut self, name: String) {
        self.entries.entry(name).or_insert(None);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
