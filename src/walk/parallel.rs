use std::path::PathBuf;
use std::sync::Arc;

use crossbeam_channel::{Sender, unbounded};

use super::collect::Collector;
use super::unit::{UnitScanner, WorkUnit};
use super::{
    CancelToken, NoopObserver, Traversal, TraversalObserver, TraversalRequest, Traverser, check_root,
};
use crate::error::{DirsiftError, Result};

/// Result of one work unit, sent from a worker to the coordinator.
struct UnitOutcome {
    root: PathBuf,
    result: Result<Vec<PathBuf>>,
}

/// Fans a traversal out over a bounded worker pool.
///
/// Several roots are scanned one unit per root; a single root is split into
/// its own files plus one unit per child directory. Units are dealt to
/// workers up front (no work stealing between buckets). Each worker fills a
/// private buffer per unit and hands it over a channel, so the coordinator is
/// the only writer of the merged set.
#[derive(Clone)]
pub struct ParallelTraverser {
    workers: Option<usize>,
    observer: Arc<dyn TraversalObserver>,
}

impl Default for ParallelTraverser {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ParallelTraverser {
    /// `workers = None` uses one worker per CPU.
    #[must_use]
    pub fn new(workers: Option<usize>) -> Self {
        Self {
            workers,
            observer: Arc::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn TraversalObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Requested pool size, before bounding by the number of units.
    ///
    /// # Errors
    /// Returns [`DirsiftError::InvalidFilterConfig`] for a worker count of 0.
    pub fn worker_count(&self) -> Result<usize> {
        match self.workers {
            Some(0) => Err(DirsiftError::InvalidFilterConfig(
                "worker count must be at least 1".to_string(),
            )),
            Some(n) => Ok(n),
            None => Ok(num_cpus::get().max(1)),
        }
    }

    /// Build the work units, recording roots that fail before any worker
    /// starts.
    fn plan(
        request: &TraversalRequest,
        scanner: &UnitScanner<'_>,
        collector: &mut Collector,
    ) -> Result<Vec<WorkUnit>> {
        if let [root] = request.roots() {
            check_root(root)?;
            return scanner.split_root(root);
        }

        let mut units = Vec::with_capacity(request.roots().len());
        for root in request.roots() {
            match check_root(root) {
                Ok(()) => units.push(WorkUnit::Root(root.clone())),
                Err(err) => collector.record(root, Err(err)),
            }
        }
        Ok(units)
    }

    fn run_bucket(
        &self,
        worker_id: usize,
        bucket: &[WorkUnit],
        scanner: &UnitScanner<'_>,
        results: &Sender<UnitOutcome>,
        cancel: &CancelToken,
    ) {
        for unit in bucket {
            let result = cancel.check().and_then(|()| scanner.scan(unit));
            let matched = result.as_ref().map_or(0, Vec::len);
            tracing::debug!(
                worker = worker_id,
                root = %unit.root().display(),
                matched,
                "work unit finished"
            );
            self.observer.unit_finished(unit.root(), matched);

            let outcome = UnitOutcome {
                root: unit.root().to_path_buf(),
                result,
            };
            if results.send(outcome).is_err() {
                break; // Coordinator dropped
            }
        }
    }
}

/// Deal `units` round-robin into at most `workers` non-empty buckets.
pub(crate) fn partition(units: Vec<WorkUnit>, workers: usize) -> Vec<Vec<WorkUnit>> {
    let bucket_count = workers.min(units.len()).max(1);
    let mut buckets: Vec<Vec<WorkUnit>> = (0..bucket_count).map(|_| Vec::new()).collect();
    for (i, unit) in units.into_iter().enumerate() {
        buckets[i % bucket_count].push(unit);
    }
    buckets.retain(|bucket| !bucket.is_empty());
    buckets
}

impl Traverser for ParallelTraverser {
    fn run(&self, request: &TraversalRequest) -> Result<Traversal> {
        request.validate()?;
        let workers = self.worker_count()?;

        let scanner = UnitScanner::new(request);
        let mut collector = Collector::new(request.roots());
        let units = Self::plan(request, &scanner, &mut collector)?;
        let buckets = partition(units, workers);

        tracing::debug!(
            workers = buckets.len(),
            units = buckets.iter().map(Vec::len).sum::<usize>(),
            "starting parallel traversal"
        );

        if !buckets.is_empty() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(buckets.len())
                .thread_name(|i| format!("dirsift-worker-{i}"))
                .build()?;

            let (tx, rx) = unbounded();
            let scanner = &scanner;
            let cancel = request.cancel();
            pool.scope(|s| {
                for (worker_id, bucket) in buckets.iter().enumerate() {
                    let tx = tx.clone();
                    s.spawn(move |_| self.run_bucket(worker_id, bucket, scanner, &tx, cancel));
                }
            });
            drop(tx);

            for outcome in rx {
                collector.record(&outcome.root, outcome.result);
            }
        }

        let traversal = collector.finish()?;
        tracing::info!(
            roots = request.roots().len(),
            paths = traversal.paths.len(),
            failed = traversal.failures.len(),
            "parallel traversal finished"
        );
        Ok(traversal)
    }
}

#[cfg(test)]
#[path = "parallel_tests.rs"]
mod tests;
