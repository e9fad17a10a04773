use std::path::Path;

/// Receives progress notifications from a traversal.
///
/// Called from worker threads in parallel mode, so implementations must be
/// thread-safe. Progress display lives outside the engine; the CLI plugs an
/// `indicatif` spinner in here.
pub trait TraversalObserver: Send + Sync {
    /// A work unit rooted at `root` finished. `matched` is the number of
    /// paths it produced; failed units report 0.
    fn unit_finished(&self, root: &Path, matched: usize);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TraversalObserver for NoopObserver {
    fn unit_finished(&self, _root: &Path, _matched: usize) {}
}
