//! Filtered directory traversal.
//!
//! A [`FilterSet`] decides which entries are accepted; a
//! [`SequentialTraverser`] or [`ParallelTraverser`] walks the roots of a
//! [`TraversalRequest`] and returns the accepted paths, and a
//! [`TreeBuilder`] renders one root as a nested [`TreeNode`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod tree;
pub mod walk;

pub use error::{DirsiftError, Result, RootFailure};
pub use filter::{FilterOptions, FilterSet};
pub use tree::{BranchRule, Branches, NameRule, TreeBuilder, TreeNode};
pub use walk::{
    CancelToken, ParallelTraverser, PathSet, SequentialTraverser, Traversal, TraversalObserver,
    TraversalRequest, Traverser,
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARTIAL_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
