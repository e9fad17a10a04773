use crate::cli::{Cli, TreeArgs};
use crate::error::Result;
use crate::output::{print_error, write_output};
use crate::tree::TreeBuilder;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::load_config;

#[must_use]
pub fn run_tree(args: &TreeArgs, cli: &Cli) -> i32 {
    match run_tree_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Build and print the tree of `args.root`, pruned by the configured
/// branch rules.
///
/// # Errors
/// Returns an error for invalid configuration, a missing root, any walk
/// error, or when the output cannot be written.
pub fn run_tree_impl(args: &TreeArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?.config;
    let branches = config.branches()?;

    let tree = TreeBuilder::new().build(&args.root, branches.as_ref())?;

    let rendered = args.format.formatter().format_tree(&tree)?;
    write_output(args.output.as_deref(), &rendered)
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
