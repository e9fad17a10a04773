use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{CancelToken, EmitMode, TraversalRequest};
use crate::error::{DirsiftError, Result};
use crate::filter::FilterSet;

/// An independently scannable piece of a traversal.
///
/// Every unit keeps a reference to its originating root so relative paths are
/// computed against the root, not against the directory the walk starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkUnit {
    /// A whole root directory.
    Root(PathBuf),
    /// The root directory itself and the files directly inside it.
    Shallow(PathBuf),
    /// One child directory of `root`, walked recursively.
    Subtree { root: PathBuf, start: PathBuf },
}

impl WorkUnit {
    pub(crate) fn root(&self) -> &Path {
        match self {
            Self::Root(root) | Self::Shallow(root) | Self::Subtree { root, .. } => root,
        }
    }

    fn start(&self) -> &Path {
        match self {
            Self::Root(root) | Self::Shallow(root) => root,
            Self::Subtree { start, .. } => start,
        }
    }

    const fn is_shallow(&self) -> bool {
        matches!(self, Self::Shallow(_))
    }
}

/// Applies the per-entry traversal rules to one [`WorkUnit`].
///
/// Read-only after construction; parallel workers share one instance.
pub(crate) struct UnitScanner<'a> {
    filters: Option<&'a FilterSet>,
    mode: EmitMode,
    full_paths: bool,
    top_down: bool,
    cancel: &'a CancelToken,
}

impl<'a> UnitScanner<'a> {
    pub(crate) fn new(request: &'a TraversalRequest) -> Self {
        let filters = request.filters();
        Self {
            filters,
            mode: EmitMode::for_filters(filters),
            full_paths: request.full_paths(),
            top_down: request.top_down(),
            cancel: request.cancel(),
        }
    }

    /// Scan `unit` and return the paths it emits, in walk order.
    pub(crate) fn scan(&self, unit: &WorkUnit) -> Result<Vec<PathBuf>> {
        let root = unit.root();
        let mut walker = WalkDir::new(unit.start())
            .follow_links(false)
            .contents_first(!self.top_down);
        if unit.is_shallow() {
            walker = walker.max_depth(1);
        }

        let mut emitted = Vec::new();
        let mut entries = walker.into_iter();
        while let Some(entry) = entries.next() {
            self.cancel.check()?;

            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if self.error_is_reachable(root, &err) {
                        return Err(DirsiftError::from_walk(unit.start(), err));
                    }
                    continue;
                }
            };

            let Some(relative) = relative_to(root, entry.path()) else {
                continue;
            };
            let file_type = entry.file_type();

            if !self.is_reachable(&relative, file_type.is_dir()) {
                if self.top_down && file_type.is_dir() {
                    entries.skip_current_dir();
                }
                continue;
            }

            if file_type.is_dir() {
                if unit.is_shallow() && entry.depth() > 0 {
                    continue;
                }
                self.visit_directory(root, &entry, relative, &mut emitted)?;
            } else if file_type.is_file() {
                self.visit_file(root, relative, &mut emitted);
            }
        }

        Ok(emitted)
    }

    /// List the units a single root splits into: the root's own files plus
    /// one subtree per child directory the walk would descend into. Excluded
    /// children still get a unit because their descendants may be emitted.
    pub(crate) fn split_root(&self, root: &Path) -> Result<Vec<WorkUnit>> {
        let mut units = vec![WorkUnit::Shallow(root.to_path_buf())];

        for entry in WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .max_depth(1)
        {
            self.cancel.check()?;
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if self.error_is_reachable(root, &err) {
                        return Err(DirsiftError::from_walk(root, err));
                    }
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(relative) = relative_to(root, entry.path()) else {
                continue;
            };
            if self.is_reachable(&relative, true) {
                units.push(WorkUnit::Subtree {
                    root: root.to_path_buf(),
                    start: entry.into_path(),
                });
            }
        }

        Ok(units)
    }

    fn visit_directory(
        &self,
        root: &Path,
        entry: &DirEntry,
        relative: PathBuf,
        emitted: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let EmitMode::NonEmptyFolders { level } = self.mode else {
            return Ok(());
        };
        if FilterSet::get_level(&relative) != level {
            return Ok(());
        }
        if self.filters.is_some_and(|f| !f.validate(&relative)) {
            return Ok(());
        }
        if self.has_visible_file(entry.path())? {
            emitted.push(self.emit_path(root, relative));
        }
        Ok(())
    }

    fn visit_file(&self, root: &Path, relative: PathBuf, emitted: &mut Vec<PathBuf>) {
        if self.mode != EmitMode::Files {
            return;
        }
        let parent = relative.parent().unwrap_or_else(|| Path::new(""));
        if self
            .filters
            .is_none_or(|f| f.admits_parent(parent) && f.validate(&relative))
        {
            emitted.push(self.emit_path(root, relative));
        }
    }

    /// True if `dir` holds a non-hidden file anywhere below it.
    fn has_visible_file(&self, dir: &Path) -> Result<bool> {
        let walker = WalkDir::new(dir)
            .follow_links(false)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !is_hidden_name(e.file_name().to_string_lossy().as_ref()));

        for entry in walker {
            self.cancel.check()?;
            let entry = entry.map_err(|err| DirsiftError::from_walk(dir, err))?;
            if entry.file_type().is_file() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether an entry at `relative` is reached by the walk: no ancestor is
    /// hidden or too deep, and the entry itself is not hidden (nor too deep,
    /// when it is a directory).
    ///
    /// Rechecking ancestors keeps the outcome independent of walk order and
    /// of where a unit starts.
    fn is_reachable(&self, relative: &Path, is_dir: bool) -> bool {
        let components: Vec<Component<'_>> = relative.components().collect();
        let mut prefix = PathBuf::new();

        for (i, component) in components.iter().enumerate() {
            let Component::Normal(name) = component else {
                continue;
            };
            prefix.push(name);
            if is_hidden_name(name.to_string_lossy().as_ref()) {
                return false;
            }
            let is_last = i + 1 == components.len();
            let gate_applies = !is_last || is_dir;
            if gate_applies && self.filters.is_some_and(|f| !f.admits_directory(&prefix)) {
                return false;
            }
        }
        true
    }

    fn error_is_reachable(&self, root: &Path, err: &walkdir::Error) -> bool {
        err.path()
            .and_then(|path| relative_to(root, path))
            .is_none_or(|relative| self.is_reachable(&relative, true))
    }

    fn emit_path(&self, root: &Path, relative: PathBuf) -> PathBuf {
        if self.full_paths {
            root.join(relative)
        } else {
            relative
        }
    }
}

/// Hidden entries follow the dot-file convention.
pub(crate) fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
