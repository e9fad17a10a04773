use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/dirsift")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new().with_file(
        "/project/.dirsift.toml",
        r#"
[filter]
include = [".log"]
max_level = 3
"#,
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.filter.include, vec![".log".to_string()]);
    assert_eq!(result.config.filter.max_level, Some(3));
    assert_eq!(result.source, Some(PathBuf::from("/project/.dirsift.toml")));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/dirsift/config.toml",
        "[walk]\nparallel = true\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.config.walk.parallel);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.dirsift.toml", "[walk]\nworkers = 2\n")
        .with_file("/home/user/.config/dirsift/config.toml", "[walk]\nworkers = 8\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.walk.workers, Some(2));
}

#[test]
fn missing_config_dir_falls_back_to_defaults() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.source.is_none());
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();

    assert!(matches!(err, DirsiftError::Config(msg) if msg.contains("/nowhere.toml")));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.dirsift.toml", "[filter\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, DirsiftError::TomlParse(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = parse_config("[filter]\nmax_depth = 3\n").unwrap_err();

    assert!(matches!(err, DirsiftError::TomlParse(_)));
}

#[test]
fn semantic_errors_fail_at_load_time() {
    let fs = MockFileSystem::new().with_file(
        "/project/.dirsift.toml",
        "[filter]\nmin_level = 4\nmax_level = 2\n",
    );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, DirsiftError::InvalidFilterConfig(_)));
}

#[test]
fn real_filesystem_ignores_directory_named_like_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let as_dir = dir.path().join(LOCAL_CONFIG_NAME);
    std::fs::create_dir(&as_dir).unwrap();
    let as_file = dir.path().join("config.toml");
    std::fs::write(&as_file, "").unwrap();

    assert!(!RealFileSystem.is_file(&as_dir));
    assert!(RealFileSystem.is_file(&as_file));
}
