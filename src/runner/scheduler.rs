//! Worker pool for one pass over a URL list
//!
//! A fixed number of tokio tasks share a single atomic cursor. Each worker
//! claims the next index with `fetch_add`, probes that URL, and loops until
//! the cursor runs past the end of the list. Because the claim is one atomic
//! read-modify-write, every index is handed out exactly once even when
//! workers run on different threads.

use crate::output::{OutcomeCounts, PassSummary};
use crate::state::ClassificationOutcome;
use chrono::Utc;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// What a worker hands back when it exits
#[derive(Debug, Default)]
struct WorkerTally {
    claimed: usize,
    counts: OutcomeCounts,
}

/// Fixed-size pool of probe workers
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Creates a pool; a worker count of zero is raised to one
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Number of workers started per pass
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs one full pass over `urls`
    ///
    /// Returns only after every worker has exited, i.e. after every URL has
    /// been claimed and every in-flight probe has resolved. Completion order
    /// across workers is not guaranteed. A worker that panics is logged and
    /// counted in `failed_workers`; the rest of the pass continues.
    ///
    /// # Arguments
    ///
    /// * `urls` - The list for this pass, shared read-only by all workers
    /// * `probe` - Called once per claimed URL
    pub async fn run_pass<F, Fut>(&self, urls: Arc<[String]>, probe: F) -> PassSummary
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClassificationOutcome> + Send + 'static,
    {
        let started_at = Utc::now();
        let start_time = Instant::now();

        let cursor = Arc::new(AtomicUsize::new(0));
        let probe = Arc::new(probe);
        let mut tasks = JoinSet::new();

        for worker_id in 0..self.workers {
            tasks.spawn(run_worker(
                worker_id,
                Arc::clone(&urls),
                Arc::clone(&cursor),
                Arc::clone(&probe),
            ));
        }

        let mut counts = OutcomeCounts::default();
        let mut idle_workers = 0;
        let mut failed_workers = 0;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(tally) => {
                    if tally.claimed == 0 {
                        idle_workers += 1;
                    }
                    counts.merge(&tally.counts);
                }
                Err(e) => {
                    failed_workers += 1;
                    tracing::error!("Worker task failed: {}", e);
                }
            }
        }

        PassSummary {
            started_at,
            url_count: urls.len(),
            workers: self.workers,
            idle_workers,
            failed_workers,
            counts,
            elapsed: start_time.elapsed(),
        }
    }
}

async fn run_worker<F, Fut>(
    worker_id: usize,
    urls: Arc<[String]>,
    cursor: Arc<AtomicUsize>,
    probe: Arc<F>,
) -> WorkerTally
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = ClassificationOutcome>,
{
    let mut tally = WorkerTally::default();

    loop {
        let index = cursor.fetch_add(1, Ordering::Relaxed);
        let Some(url) = urls.get(index) else {
            break;
        };

        tracing::trace!(worker_id, index, "Claimed {}", url);

        let started = Instant::now();
        let outcome = (*probe)(url.clone()).await;
        tally.claimed += 1;
        tally.counts.record(outcome, started.elapsed());
    }

    tracing::debug!(worker_id, claimed = tally.claimed, "Worker finished");
    tally
}
