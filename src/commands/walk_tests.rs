use std::path::{Path, PathBuf};

use clap::Parser;

use super::*;
use crate::cli::Commands;
use crate::walk::test_fixtures::TreeFixture;

fn parse(args: &[&str]) -> (Cli, WalkArgs) {
    let argv = || std::iter::once("dirsift").chain(args.iter().copied());
    let Commands::Walk(walk) = Cli::parse_from(argv()).command else {
        panic!("Expected Walk command");
    };
    (Cli::parse_from(argv()), walk)
}

#[test]
fn cli_flags_override_config_filters() {
    let mut config = Config::default();
    config.filter.include = vec![".rs".to_string()];
    config.filter.exclude = vec!["target".to_string()];
    config.filter.max_level = Some(5);
    let (_, args) = parse(&["walk", "-i", ".log", "--max-level", "2"]);

    let options = merge_filter_options(&config, &args);

    assert_eq!(options.include, vec![".log".to_string()]);
    assert_eq!(options.exclude, vec!["target".to_string()]);
    assert_eq!(options.max_level, Some(2));
}

#[test]
fn unrestricted_request_has_no_filters() {
    let (_, args) = parse(&["walk", "a", "b"]);

    let request = build_request(&args, &Config::default()).unwrap();

    assert!(request.filters().is_none());
    assert_eq!(request.roots(), &[PathBuf::from("a"), PathBuf::from("b")]);
    assert!(request.top_down());
    assert!(!request.full_paths());
}

#[test]
fn bottom_up_and_full_paths_flags() {
    let (_, args) = parse(&["walk", "--bottom-up", "--full-paths"]);

    let request = build_request(&args, &Config::default()).unwrap();

    assert!(!request.top_down());
    assert!(request.full_paths());
}

#[test]
fn invalid_level_window_is_rejected() {
    let (_, args) = parse(&["walk", "--min-level", "3", "--max-level", "1"]);

    assert!(build_request(&args, &Config::default()).is_err());
}

#[test]
fn walk_writes_matching_paths_to_file() {
    let fixture = TreeFixture::with_entries(&["app.log", "tmp.log", "notes.txt"]);
    let out = fixture.join("out.txt");
    let root = fixture.path().display().to_string();
    let out_arg = out.display().to_string();
    let (cli, args) = parse(&[
        "walk", &root, "-i", ".log", "-x", "tmp", "-o", &out_arg, "--no-config", "-q",
    ]);

    let code = run_walk_impl(&args, &cli).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "app.log\n");
}

#[test]
fn partial_failure_exit_code() {
    let fixture = TreeFixture::with_entries(&["ok/a.txt"]);
    let out = fixture.join("out.txt");
    let ok = fixture.join("ok").display().to_string();
    let missing = fixture.join("missing").display().to_string();
    let out_arg = out.display().to_string();
    let (cli, args) = parse(&["walk", &ok, &missing, "-o", &out_arg, "--no-config", "-q"]);

    let code = run_walk_impl(&args, &cli).unwrap();

    assert_eq!(code, EXIT_PARTIAL_FAILURE);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "a.txt\n");
}

#[test]
fn parallel_walk_matches_sequential() {
    let fixture = TreeFixture::with_entries(&["a/1.txt", "a/b/2.txt", "c/3.txt", "4.txt"]);
    let root = fixture.path().display().to_string();
    let seq_out = fixture.join("seq.txt");
    let par_out = fixture.join("par.txt");
    let seq_arg = seq_out.display().to_string();
    let par_arg = par_out.display().to_string();

    let (cli, args) = parse(&["walk", &root, "-x", "seq", "-x", "par", "-o", &seq_arg, "--no-config", "-q"]);
    run_walk_impl(&args, &cli).unwrap();
    let (cli, args) = parse(&[
        "walk", &root, "-x", "seq", "-x", "par", "--parallel", "-j", "3", "-o", &par_arg, "--no-config", "-q",
    ]);
    run_walk_impl(&args, &cli).unwrap();

    let sequential = std::fs::read_to_string(&seq_out).unwrap();
    assert_eq!(sequential, std::fs::read_to_string(&par_out).unwrap());
    assert!(sequential.contains(&Path::new("a").join("b").join("2.txt").display().to_string()));
}

#[test]
fn missing_single_root_is_an_error() {
    let fixture = TreeFixture::new();
    let missing = fixture.join("missing").display().to_string();
    let (cli, args) = parse(&["walk", &missing, "--no-config", "-q"]);

    assert!(run_walk_impl(&args, &cli).is_err());
    assert_eq!(run_walk(&args, &cli), EXIT_CONFIG_ERROR);
}
