use std::sync::Arc;

use crate::cli::{Cli, WalkArgs};
use crate::config::Config;
use crate::error::Result;
use crate::filter::{FilterOptions, FilterSet};
use crate::output::{WalkProgress, print_error, print_warning, write_output};
use crate::walk::{ParallelTraverser, SequentialTraverser, TraversalRequest, Traverser};
use crate::{EXIT_CONFIG_ERROR, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS};

use super::load_config;

#[must_use]
pub fn run_walk(args: &WalkArgs, cli: &Cli) -> i32 {
    match run_walk_impl(args, cli) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Walk the requested roots and print the accepted paths.
///
/// Returns [`EXIT_PARTIAL_FAILURE`] when some, but not all, roots failed.
///
/// # Errors
/// Returns an error for invalid configuration, a failed single root, when
/// every root failed, or when the output cannot be written.
pub fn run_walk_impl(args: &WalkArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?.config;
    let request = build_request(args, &config)?;

    let progress = Arc::new(WalkProgress::new(cli.quiet));
    let outcome = if args.parallel || config.walk.parallel {
        ParallelTraverser::new(args.workers.or(config.walk.workers))
            .with_observer(progress.clone())
            .run(&request)
    } else {
        SequentialTraverser::new()
            .with_observer(progress.clone())
            .run(&request)
    };
    progress.finish();
    let traversal = outcome?;

    let rendered = args.format.formatter().format_walk(&traversal)?;
    write_output(args.output.as_deref(), &rendered)?;

    if traversal.is_complete() {
        return Ok(EXIT_SUCCESS);
    }
    if !cli.quiet {
        let details: Vec<String> = traversal.failures.iter().map(ToString::to_string).collect();
        print_warning(
            &format!("{} of {} roots failed", details.len(), request.roots().len()),
            &details,
        );
    }
    Ok(EXIT_PARTIAL_FAILURE)
}

/// Combine config values with CLI flags; flags win.
pub(crate) fn merge_filter_options(config: &Config, args: &WalkArgs) -> FilterOptions {
    let mut options = config.filter.to_options();
    if !args.include.is_empty() {
        options.include.clone_from(&args.include);
    }
    if !args.exclude.is_empty() {
        options.exclude.clone_from(&args.exclude);
    }
    if let Some(min_level) = args.min_level {
        options.min_level = min_level;
    }
    if args.max_level.is_some() {
        options.max_level = args.max_level;
    }
    options.non_empty_folders |= args.non_empty_folders;
    options
}

pub(crate) fn build_request(args: &WalkArgs, config: &Config) -> Result<TraversalRequest> {
    let options = merge_filter_options(config, args);
    let filters = if options.is_unrestricted() {
        None
    } else {
        Some(FilterSet::new(options)?)
    };

    Ok(TraversalRequest::new(args.roots.clone())
        .with_full_paths(args.full_paths || config.walk.full_paths)
        .with_top_down(config.walk.top_down && !args.bottom_up)
        .with_filters(filters))
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
