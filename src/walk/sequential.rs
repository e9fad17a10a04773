use std::sync::Arc;

use super::collect::Collector;
use super::unit::{UnitScanner, WorkUnit};
use super::{NoopObserver, Traversal, TraversalObserver, TraversalRequest, Traverser, check_root};
use crate::error::Result;

/// Walks each root in turn on the calling thread.
#[derive(Clone)]
pub struct SequentialTraverser {
    observer: Arc<dyn TraversalObserver>,
}

impl Default for SequentialTraverser {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialTraverser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn TraversalObserver>) -> Self {
        self.observer = observer;
        self
    }
}

impl Traverser for SequentialTraverser {
    fn run(&self, request: &TraversalRequest) -> Result<Traversal> {
        request.validate()?;

        let scanner = UnitScanner::new(request);
        let mut collector = Collector::new(request.roots());

        for root in request.roots() {
            let outcome = check_root(root).and_then(|()| scanner.scan(&WorkUnit::Root(root.clone())));
            let matched = outcome.as_ref().map_or(0, Vec::len);
            tracing::debug!(root = %root.display(), matched, "root scanned");
            self.observer.unit_finished(root, matched);

            collector.record(root, outcome);
            if collector.should_stop() {
                break;
            }
        }

        let traversal = collector.finish()?;
        tracing::info!(
            roots = request.roots().len(),
            paths = traversal.paths.len(),
            failed = traversal.failures.len(),
            "sequential traversal finished"
        );
        Ok(traversal)
    }
}

#[cfg(test)]
#[path = "sequential_tests.rs"]
mod tests;
