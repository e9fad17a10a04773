//! Filtered directory traversal.
//!
//! [`SequentialTraverser`] and [`ParallelTraverser`] share one per-entry
//! algorithm (see `unit.rs`) and must return set-equal results for the same
//! [`TraversalRequest`].

mod cancel;
mod collect;
mod observer;
mod parallel;
mod sequential;
mod unit;

pub use cancel::CancelToken;
pub use observer::{NoopObserver, TraversalObserver};
pub use parallel::ParallelTraverser;
pub use sequential::SequentialTraverser;

pub(crate) use unit::is_hidden_name;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{DirsiftError, Result, RootFailure};
use crate::filter::FilterSet;

/// Trait implemented by both traversal strategies.
pub trait Traverser {
    /// Walk every root of `request` and collect the accepted paths.
    ///
    /// # Errors
    /// Fails the whole request when the only root is missing or cannot be
    /// walked, when every root fails, or when the request is cancelled.
    /// With several roots, individual failures are reported in
    /// [`Traversal::failures`] instead.
    fn run(&self, request: &TraversalRequest) -> Result<Traversal>;
}

/// What the traversal engine emits.
///
/// `NonEmptyFolders` is selected by [`FilterSet::non_empty_folders`]. It
/// changes the unit of output from files to directories: only directories at
/// exactly `level` that pass [`FilterSet::validate`] and hold at least one
/// visible descendant file are emitted. A tree that never reaches `level`
/// emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    Files,
    NonEmptyFolders { level: usize },
}

impl EmitMode {
    #[must_use]
    pub fn for_filters(filters: Option<&FilterSet>) -> Self {
        match filters {
            Some(f) if f.non_empty_folders() => f
                .max_level()
                .map_or(Self::Files, |level| Self::NonEmptyFolders { level }),
            _ => Self::Files,
        }
    }
}

/// Roots plus the options that control one traversal run.
#[derive(Debug, Clone)]
pub struct TraversalRequest {
    roots: Vec<PathBuf>,
    full_paths: bool,
    top_down: bool,
    filters: Option<FilterSet>,
    cancel: CancelToken,
}

impl TraversalRequest {
    /// Create a request over `roots` with relative output, top-down order
    /// and no filtering.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            full_paths: false,
            top_down: true,
            filters: None,
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub const fn with_full_paths(mut self, full_paths: bool) -> Self {
        self.full_paths = full_paths;
        self
    }

    #[must_use]
    pub const fn with_top_down(mut self, top_down: bool) -> Self {
        self.top_down = top_down;
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: Option<FilterSet>) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    #[must_use]
    pub const fn full_paths(&self) -> bool {
        self.full_paths
    }

    #[must_use]
    pub const fn top_down(&self) -> bool {
        self.top_down
    }

    #[must_use]
    pub const fn filters(&self) -> Option<&FilterSet> {
        self.filters.as_ref()
    }

    #[must_use]
    pub const fn cancel(&self) -> &CancelToken {
        &self.cancel
    }

    fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(DirsiftError::Config(
                "at least one root directory is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Duplicate-free set of emitted paths.
///
/// Iteration is sorted, so two runs compare equal regardless of the order in
/// which workers delivered their results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: BTreeSet<PathBuf>,
}

impl PathSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the path was already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl Extend<PathBuf> for PathSet {
    fn extend<T: IntoIterator<Item = PathBuf>>(&mut self, iter: T) {
        self.paths.extend(iter);
    }
}

impl FromIterator<PathBuf> for PathSet {
    fn from_iter<T: IntoIterator<Item = PathBuf>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PathSet {
    type Item = PathBuf;
    type IntoIter = std::collections::btree_set::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a PathBuf;
    type IntoIter = std::collections::btree_set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Outcome of a traversal: every accepted path from the roots that were
/// scanned, plus the roots that failed.
#[derive(Debug, Default)]
pub struct Traversal {
    pub paths: PathSet,
    pub failures: Vec<RootFailure>,
}

impl Traversal {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Discard partial results if any root failed.
    ///
    /// # Errors
    /// Returns [`DirsiftError::PartialWorkerFailure`] carrying the failed
    /// roots when the traversal was not complete.
    pub fn into_result(self) -> Result<PathSet> {
        if self.failures.is_empty() {
            Ok(self.paths)
        } else {
            Err(DirsiftError::PartialWorkerFailure {
                failures: self.failures,
            })
        }
    }
}

/// Check that `root` exists and is a directory.
fn check_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(DirsiftError::RootNotFound {
            path: root.to_path_buf(),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
