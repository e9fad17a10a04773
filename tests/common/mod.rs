#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the dirsift binary.
#[macro_export]
macro_rules! dirsift {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("dirsift"))
    };
}

/// Temporary directory tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates every entry; a trailing `/` makes a directory, anything else
    /// an empty file.
    pub fn with_entries(entries: &[&str]) -> Self {
        let fixture = Self::new();
        for entry in entries {
            if let Some(dir) = entry.strip_suffix('/') {
                fixture.create_dir(dir);
            } else {
                fixture.create_file(entry, "");
            }
        }
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Writes `.dirsift.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".dirsift.toml", content);
    }
}

/// Native rendering of a `/`-separated relative path.
pub fn native(relative: &str) -> String {
    relative
        .split('/')
        .collect::<PathBuf>()
        .display()
        .to_string()
}
