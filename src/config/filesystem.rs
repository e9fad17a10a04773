//! Lookups config discovery needs, behind a trait so loader tests can
//! serve `.dirsift.toml` files from memory.

use std::path::{Path, PathBuf};

/// Application name handed to [`directories::ProjectDirs`].
const APP_NAME: &str = "dirsift";

pub trait FileSystem {
    /// # Errors
    /// Propagates the underlying read failure.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// A candidate config path only counts when it is a regular file; a
    /// directory that happens to be named `.dirsift.toml` is ignored.
    fn is_file(&self, path: &Path) -> bool;

    /// Where the local `.dirsift.toml` is looked up.
    ///
    /// # Errors
    /// Fails when the working directory is gone or unreadable.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory holding `config.toml`, e.g. `~/.config/dirsift` on
    /// Linux. `None` when no home directory can be resolved.
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }
}
