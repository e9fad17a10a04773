use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{FilterOptions, FilterSet};
use crate::tree::{BranchRule, Branches};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub tree: TreeConfig,
}

/// `[filter]`: structural filters for `walk`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Substrings; a path's final component must contain one of them.
    #[serde(default)]
    pub include: Vec<String>,

    /// Substrings; a path whose final component contains one is dropped.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub min_level: usize,

    /// Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_level: Option<usize>,

    /// Emit directories at `max_level` that hold files instead of files.
    #[serde(default)]
    pub non_empty_folders: bool,
}

impl FilterConfig {
    #[must_use]
    pub fn to_options(&self) -> FilterOptions {
        FilterOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            min_level: self.min_level,
            max_level: self.max_level,
            non_empty_folders: self.non_empty_folders,
        }
    }
}

/// `[walk]`: traversal defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Emit `root/relative` instead of `relative`.
    #[serde(default)]
    pub full_paths: bool,

    /// Visit directories before their contents (default: true).
    #[serde(default = "default_true")]
    pub top_down: bool,

    #[serde(default)]
    pub parallel: bool,

    /// Worker pool size for parallel walks; one per CPU when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            full_paths: false,
            top_down: true,
            parallel: false,
            workers: None,
        }
    }
}

/// `[tree]`: per-level branch rules for `tree`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TreeConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<BranchRule>,
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Build the validated filter set, or `None` when `[filter]` restricts
    /// nothing.
    ///
    /// # Errors
    /// Returns [`crate::DirsiftError::InvalidFilterConfig`] for an
    /// inconsistent level window.
    pub fn filter_set(&self) -> Result<Option<FilterSet>> {
        let options = self.filter.to_options();
        if options.is_unrestricted() {
            return Ok(None);
        }
        FilterSet::new(options).map(Some)
    }

    /// Build the validated branch rules, or `None` when none are configured.
    ///
    /// # Errors
    /// Returns [`crate::DirsiftError::InvalidFilterConfig`] if a rule both
    /// includes and excludes a name.
    pub fn branches(&self) -> Result<Option<Branches>> {
        if self.tree.branches.is_empty() {
            return Ok(None);
        }
        Branches::new(self.tree.branches.clone()).map(Some)
    }

    /// Check every section that has semantic constraints.
    ///
    /// # Errors
    /// Returns the first constraint violation found.
    pub fn validate(&self) -> Result<()> {
        self.filter_set()?;
        self.branches()?;
        if self.walk.workers == Some(0) {
            return Err(crate::DirsiftError::InvalidFilterConfig(
                "walk.workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
