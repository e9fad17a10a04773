use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A root that could not be scanned, paired with the reason.
#[derive(Debug)]
pub struct RootFailure {
    pub root: PathBuf,
    pub error: DirsiftError,
}

impl RootFailure {
    #[must_use]
    pub const fn new(root: PathBuf, error: DirsiftError) -> Self {
        Self { root, error }
    }
}

impl fmt::Display for RootFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.root.display(), self.error)
    }
}

/// Renders a failure list as `root: cause; root: cause`.
struct FailureList<'a>(&'a [RootFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum DirsiftError {
    #[error("Root not found or not a directory: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Access denied: {}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} of the supplied roots failed: {}", failures.len(), FailureList(failures))]
    PartialWorkerFailure { failures: Vec<RootFailure> },

    #[error("Every supplied root failed: {}", FailureList(failures))]
    AllRootsFailed { failures: Vec<RootFailure> },

    #[error("Invalid filter configuration: {0}")]
    InvalidFilterConfig(String),

    #[error("Traversal cancelled")]
    Cancelled,

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DirsiftError {
    /// Converts a `walkdir` failure into a structured error, separating
    /// permission problems from other I/O failures.
    #[must_use]
    pub fn from_walk(fallback: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(|| fallback.to_path_buf(), std::path::Path::to_path_buf);

        if err
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::PermissionDenied)
        {
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::from(std::io::ErrorKind::PermissionDenied));
            return Self::AccessDenied { path, source };
        }

        Self::Walk { path, source: err }
    }

    /// Stable kind name, used in JSON output and log fields.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => "RootNotFound",
            Self::AccessDenied { .. } => "AccessDenied",
            Self::Walk { .. } => "Walk",
            Self::PartialWorkerFailure { .. } => "PartialWorkerFailure",
            Self::AllRootsFailed { .. } => "AllRootsFailed",
            Self::InvalidFilterConfig(_) => "InvalidFilterConfig",
            Self::Cancelled => "Cancelled",
            Self::WorkerPool(_) => "WorkerPool",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// The offending path, when the error is tied to one.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::RootNotFound { path }
            | Self::AccessDenied { path, .. }
            | Self::Walk { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirsiftError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
