use super::*;

#[test]
fn verbosity_maps_to_log_levels() {
    assert_eq!(default_log_directive(0), "warn");
    assert_eq!(default_log_directive(1), "info");
    assert_eq!(default_log_directive(2), "debug");
    assert_eq!(default_log_directive(3), "trace");
    assert_eq!(default_log_directive(9), "trace");
}

#[test]
fn no_config_returns_defaults() {
    let result = load_config(Some(Path::new("/definitely/missing.toml")), true).unwrap();

    assert_eq!(result.config, crate::config::Config::default());
    assert!(result.source.is_none());
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[walk]\nfull_paths = true\n").unwrap();

    let result = load_config(Some(&path), false).unwrap();

    assert!(result.config.walk.full_paths);
    assert_eq!(result.source, Some(path));
}

#[test]
fn setup_logging_twice_does_not_panic() {
    setup_logging(0, false);
    setup_logging(2, false);
    setup_logging(0, true);
}
