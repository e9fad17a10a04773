use std::collections::BTreeSet;
use std::path::{Component, Path};

use crate::error::{DirsiftError, Result};

/// Raw filter settings, before validation.
///
/// Built by the CLI and the config layer, then turned into a [`FilterSet`]
/// with [`FilterSet::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub min_level: usize,
    /// `None` means unbounded.
    pub max_level: Option<usize>,
    pub non_empty_folders: bool,
}

impl FilterOptions {
    /// True when no option narrows the result, so traversal can skip filtering.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.include.is_empty()
            && self.exclude.is_empty()
            && self.min_level == 0
            && self.max_level.is_none()
            && !self.non_empty_folders
    }
}

/// Immutable, validated include/exclude/depth rules.
///
/// Include and exclude terms are plain substrings matched against the final
/// component of a relative path. Levels count path components below the root:
/// the root itself is level 0, `a` is level 1, `a/b.txt` is level 2.
///
/// The `non_empty_folders` flag is carried here but never consulted by
/// [`FilterSet::validate`]: it switches the traversal engine to emitting
/// directories at exactly `max_level` instead of files (see
/// [`crate::walk::EmitMode`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
    min_level: usize,
    max_level: Option<usize>,
    non_empty_folders: bool,
}

impl FilterSet {
    /// Validate `options` and build a filter set.
    ///
    /// # Errors
    /// Returns [`DirsiftError::InvalidFilterConfig`] if `min_level` exceeds
    /// `max_level`, or if non-empty-folders mode is requested without a
    /// `max_level` (the emission level would be undefined).
    pub fn new(options: FilterOptions) -> Result<Self> {
        if let Some(max) = options.max_level
            && options.min_level > max
        {
            return Err(DirsiftError::InvalidFilterConfig(format!(
                "min_level {} exceeds max_level {max}",
                options.min_level
            )));
        }

        if options.non_empty_folders && options.max_level.is_none() {
            return Err(DirsiftError::InvalidFilterConfig(
                "non-empty-folders mode requires a finite max_level".to_string(),
            ));
        }

        Ok(Self {
            include: options.include.into_iter().collect(),
            exclude: options.exclude.into_iter().collect(),
            min_level: options.min_level,
            max_level: options.max_level,
            non_empty_folders: options.non_empty_folders,
        })
    }

    /// Depth of `relative_path`: the number of normal components.
    ///
    /// An empty path (the root itself) is level 0.
    #[must_use]
    pub fn get_level(relative_path: &Path) -> usize {
        relative_path
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count()
    }

    /// Decide whether `relative_path` is accepted by the depth window and the
    /// include/exclude terms.
    #[must_use]
    pub fn validate(&self, relative_path: &Path) -> bool {
        let level = Self::get_level(relative_path);
        if !self.level_in_range(level) {
            return false;
        }

        let name = final_component(relative_path);
        if self.is_excluded(&name) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|term| name.contains(term.as_str()))
    }

    /// Directory descent gate: only directories deeper than `max_level` are
    /// left unwalked. Exclude and include terms never stop descent, so a child
    /// of an excluded directory is judged on its own name.
    #[must_use]
    pub fn admits_directory(&self, relative_dir: &Path) -> bool {
        self.max_level
            .is_none_or(|max| Self::get_level(relative_dir) <= max)
    }

    /// Whether files directly inside `relative_dir` may be emitted.
    ///
    /// The directory must sit inside the depth window and its own name must
    /// not carry an exclude term. The root is level 0, so `min_level >= 1`
    /// keeps the root's own files out.
    #[must_use]
    pub fn admits_parent(&self, relative_dir: &Path) -> bool {
        self.level_in_range(Self::get_level(relative_dir))
            && !self.is_excluded(&final_component(relative_dir))
    }

    #[must_use]
    pub const fn min_level(&self) -> usize {
        self.min_level
    }

    #[must_use]
    pub const fn max_level(&self) -> Option<usize> {
        self.max_level
    }

    #[must_use]
    pub const fn non_empty_folders(&self) -> bool {
        self.non_empty_folders
    }

    #[must_use]
    pub const fn include_terms(&self) -> &BTreeSet<String> {
        &self.include
    }

    #[must_use]
    pub const fn exclude_terms(&self) -> &BTreeSet<String> {
        &self.exclude
    }

    fn level_in_range(&self, level: usize) -> bool {
        level >= self.min_level && self.max_level.is_none_or(|max| level <= max)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|term| name.contains(term.as_str()))
    }
}

fn final_component(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map_or(std::borrow::Cow::Borrowed(""), |name| name.to_string_lossy())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
