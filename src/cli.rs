use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "dirsift")]
#[command(author, version, about = "Filtered directory traversal with flat or tree output")]
#[command(long_about = "Walk one or more directories, filter entries by name and depth, \
    and print the matching paths or a nested tree.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Some roots failed (partial results printed)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logs, progress and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files (or non-empty folders) under one or more roots
    Walk(WalkArgs),

    /// Print a nested tree of a single root
    Tree(TreeArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct WalkArgs {
    /// Root directories to walk
    #[arg(default_value = ".")]
    pub roots: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep only entries whose name contains this substring (repeatable)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Drop entries whose name contains this substring (repeatable)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Minimum depth below the root (overrides config)
    #[arg(long)]
    pub min_level: Option<usize>,

    /// Maximum depth below the root (overrides config)
    #[arg(long)]
    pub max_level: Option<usize>,

    /// Emit folders at --max-level that contain files, instead of files
    #[arg(long)]
    pub non_empty_folders: bool,

    /// Print paths joined onto their root
    #[arg(long)]
    pub full_paths: bool,

    /// Visit directory contents before the directory itself
    #[arg(long)]
    pub bottom_up: bool,

    /// Walk with a worker pool
    #[arg(long)]
    pub parallel: bool,

    /// Worker count for --parallel (default: number of CPUs)
    #[arg(long, short = 'j')]
    pub workers: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Root directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file (branch rules come from `[tree]`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
