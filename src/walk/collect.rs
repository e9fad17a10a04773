use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::{PathSet, Traversal};
use crate::error::{DirsiftError, Result, RootFailure};

/// Merges per-unit outcomes into a [`Traversal`] and applies the failure
/// policy: a single root fails fast, several roots tolerate partial failure.
pub(crate) struct Collector {
    single_root: bool,
    root_count: usize,
    paths: PathSet,
    failures: Vec<RootFailure>,
    cancelled: bool,
}

impl Collector {
    pub(crate) fn new(roots: &[PathBuf]) -> Self {
        let root_count = roots.iter().collect::<BTreeSet<_>>().len();
        Self {
            single_root: root_count == 1,
            root_count,
            paths: PathSet::new(),
            failures: Vec::new(),
            cancelled: false,
        }
    }

    pub(crate) fn record(&mut self, root: &Path, outcome: Result<Vec<PathBuf>>) {
        match outcome {
            Ok(paths) => self.paths.extend(paths),
            Err(DirsiftError::Cancelled) => self.cancelled = true,
            Err(error) => {
                tracing::warn!(root = %root.display(), error = %error, "root failed");
                // Units of one root may fail independently; report the root once.
                if !self.failures.iter().any(|f| f.root == root) {
                    self.failures.push(RootFailure::new(root.to_path_buf(), error));
                }
            }
        }
    }

    /// True once the outcome is already decided as a request-level failure.
    pub(crate) fn should_stop(&self) -> bool {
        self.cancelled || (self.single_root && !self.failures.is_empty())
    }

    pub(crate) fn finish(mut self) -> Result<Traversal> {
        if self.cancelled {
            return Err(DirsiftError::Cancelled);
        }

        if self.single_root && !self.failures.is_empty() {
            return Err(self.failures.swap_remove(0).error);
        }

        if self.root_count > 1 && self.failures.len() == self.root_count {
            return Err(DirsiftError::AllRootsFailed {
                failures: self.failures,
            });
        }

        Ok(Traversal {
            paths: self.paths,
            failures: self.failures,
        })
    }
}
