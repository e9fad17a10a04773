//! Shared fixtures for traversal tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::PathSet;

/// A throwaway directory tree.
pub struct TreeFixture {
    dir: TempDir,
}

impl TreeFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Build a fixture from `/`-separated entries; a trailing `/` makes a
    /// directory, anything else an empty file.
    pub fn with_entries(entries: &[&str]) -> Self {
        let fixture = Self::new();
        for entry in entries {
            if let Some(dir) = entry.strip_suffix('/') {
                fixture.dir(dir);
            } else {
                fixture.file(entry);
            }
        }
        fixture
    }

    pub fn file(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "").expect("Failed to write file");
    }

    pub fn dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }
}

/// Build the expected set from `/`-separated relative paths.
pub fn path_set(paths: &[&str]) -> PathSet {
    paths.iter().map(PathBuf::from).collect()
}
