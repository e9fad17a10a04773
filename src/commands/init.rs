use std::fs;

use crate::cli::InitArgs;
use crate::error::{DirsiftError, Result};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DirsiftError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# dirsift configuration file

[filter]
# Keep only entries whose name contains one of these substrings
# include = [".rs", ".toml"]

# Drop files whose own name or parent directory name contains one of these
exclude = ["target", "node_modules"]

# Depth window below each root (root itself = 0)
min_level = 0
# max_level = 4

# Emit folders at max_level that contain files instead of files
# non_empty_folders = false

[walk]
# Print root/relative instead of relative paths
full_paths = false

# Visit directories before their contents
top_down = true

# Use a worker pool; workers defaults to the number of CPUs
parallel = false
# workers = 4

# Per-level rules for `dirsift tree`. The first entry applies to the root's
# own name, the second to its children, and so on.
# [[tree.branches]]
#
# [[tree.branches]]
# folders = { exclude = ["target"] }
# files = { exclude = ["Cargo.lock"] }
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
