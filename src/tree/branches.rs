use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{DirsiftError, Result};

/// Exact-name include/exclude rule for one kind of entry at one level.
///
/// An excluded name is always rejected; when `include` is non-empty, only the
/// listed names are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRule {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub include: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exclude: BTreeSet<String>,
}

impl NameRule {
    #[must_use]
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn admits(&self, name: &str) -> bool {
        if self.exclude.contains(name) {
            return false;
        }
        self.include.is_empty() || self.include.contains(name)
    }

    fn check(&self, level: usize, kind: &str) -> Result<()> {
        if let Some(name) = self.include.intersection(&self.exclude).next() {
            return Err(DirsiftError::InvalidFilterConfig(format!(
                "branch level {level}: {kind} name '{name}' is both included and excluded"
            )));
        }
        Ok(())
    }
}

/// Rules for the folders and files found at one tree level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<NameRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<NameRule>,
}

/// Per-level tree filters, indexed by path segment.
///
/// Segment 0 is the root directory's own name, segment 1 its children, and
/// so on. Levels past the end of the list are unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Branches {
    levels: Vec<BranchRule>,
}

impl Branches {
    /// Validate and wrap the per-level rules.
    ///
    /// # Errors
    /// Returns [`DirsiftError::InvalidFilterConfig`] if any rule both
    /// includes and excludes the same name.
    pub fn new(levels: Vec<BranchRule>) -> Result<Self> {
        for (level, rule) in levels.iter().enumerate() {
            if let Some(folders) = &rule.folders {
                folders.check(level, "folder")?;
            }
            if let Some(files) = &rule.files {
                files.check(level, "file")?;
            }
        }
        Ok(Self { levels })
    }

    #[must_use]
    pub fn levels(&self) -> &[BranchRule] {
        &self.levels
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// True if every segment of a directory path passes its level's folder
    /// rule.
    #[must_use]
    pub fn admits_folder_path(&self, segments: &[String]) -> bool {
        segments.iter().enumerate().all(|(level, name)| {
            self.levels
                .get(level)
                .and_then(|rule| rule.folders.as_ref())
                .is_none_or(|rule| rule.admits(name))
        })
    }

    /// True if a file named `name` at segment `level` passes the file rule.
    #[must_use]
    pub fn admits_file(&self, level: usize, name: &str) -> bool {
        self.levels
            .get(level)
            .and_then(|rule| rule.files.as_ref())
            .is_none_or(|rule| rule.admits(name))
    }
}

#[cfg(test)]
#[path = "branches_tests.rs"]
mod tests;
