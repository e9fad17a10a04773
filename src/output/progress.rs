use std::io::IsTerminal;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::walk::TraversalObserver;

/// Spinner reporting finished work units during a walk.
///
/// Draws on stderr, and is hidden in quiet mode or when stderr is not a TTY.
pub struct WalkProgress {
    spinner: ProgressBar,
    matched: AtomicUsize,
}

impl WalkProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self::new_with_visibility(quiet, std::io::stderr().is_terminal())
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let spinner = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };
        Self {
            spinner,
            matched: AtomicUsize::new(0),
        }
    }

    fn create_visible_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} Walking: {pos} units, {msg}")
        {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    #[must_use]
    pub fn units(&self) -> u64 {
        self.spinner.position()
    }

    #[must_use]
    pub fn matched(&self) -> usize {
        self.matched.load(Ordering::Relaxed)
    }

    /// Stop the spinner and clear it from the terminal.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl TraversalObserver for WalkProgress {
    fn unit_finished(&self, _root: &Path, matched: usize) {
        let total = self.matched.fetch_add(matched, Ordering::Relaxed) + matched;
        self.spinner.inc(1);
        self.spinner.set_message(format!("{total} paths"));
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
