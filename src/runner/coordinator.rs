//! Refresh loop - main orchestration logic
//!
//! This module contains the endless loop that:
//! - Pulls the current URL list from the list source
//! - Runs one full worker pool pass over it
//! - Absorbs every iteration-level failure and starts over

use crate::config::{Config, RefreshConfig};
use crate::output::{PassSummary, ProbeReporter};
use crate::runner::fetcher::{build_http_client, fetch_text, FetchResult, Prober};
use crate::runner::parser::parse_list;
use crate::runner::scheduler::WorkerPool;
use crate::RunnerError;
use std::sync::Arc;
use std::time::Duration;

/// How a single iteration ended
#[derive(Debug, Clone)]
pub enum IterationOutcome {
    /// The list source yielded no URLs; the pool was not started
    EmptyList,

    /// A full pass ran over the list
    Completed(PassSummary),
}

/// Main runner structure
pub struct Runner {
    source_url: String,
    refresh: RefreshConfig,
    prober: Arc<Prober>,
    pool: WorkerPool,
    reporter: Arc<dyn ProbeReporter>,
}

impl Runner {
    /// Creates a new runner
    ///
    /// # Arguments
    ///
    /// * `config` - Validated configuration
    /// * `reporter` - Sink for probe reports and loop events
    ///
    /// # Returns
    ///
    /// * `Ok(Runner)` - Successfully created runner
    /// * `Err(RunnerError)` - The HTTP client could not be built
    pub fn new(config: &Config, reporter: Arc<dyn ProbeReporter>) -> Result<Self, RunnerError> {
        let client = build_http_client(&config.probe)?;
        let prober = Prober::new(
            client,
            config.relay.base_url.clone(),
            Arc::clone(&reporter),
        );

        Ok(Self {
            source_url: config.source.url.clone(),
            refresh: config.refresh.clone(),
            prober: Arc::new(prober),
            pool: WorkerPool::new(config.probe.workers),
            reporter,
        })
    }

    /// Address of the list source
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Fetches and parses the current URL list
    ///
    /// Any status code is accepted and its body parsed. Only a transport
    /// failure is an error.
    pub async fn fetch_list(&self) -> Result<Vec<String>, RunnerError> {
        match fetch_text(self.prober.client(), &self.source_url).await {
            FetchResult::Body(text) => Ok(parse_list(&text)),
            FetchResult::Transport(message) => Err(RunnerError::ListSource {
                url: self.source_url.clone(),
                message,
            }),
        }
    }

    /// Runs one iteration: fetch the list, then one full pass over it
    ///
    /// An empty list ends the iteration without starting the pool.
    pub async fn run_iteration(&self) -> Result<IterationOutcome, RunnerError> {
        let urls = self.fetch_list().await?;

        if urls.is_empty() {
            self.reporter.report_empty_list(&self.source_url);
            return Ok(IterationOutcome::EmptyList);
        }

        self.reporter.report_list_loaded(urls.len());

        let prober = Arc::clone(&self.prober);
        let summary = self
            .pool
            .run_pass(Arc::from(urls), move |url| {
                let prober = Arc::clone(&prober);
                async move { prober.probe(&url).await }
            })
            .await;

        self.reporter.report_pass(&summary);
        Ok(IterationOutcome::Completed(summary))
    }

    /// Runs iterations forever
    ///
    /// Errors are reported and the loop moves on. After an empty list or a
    /// failed iteration the loop pauses for the configured delay; a delay of
    /// zero re-fetches immediately.
    pub async fn run(&self) {
        let mut iteration: u64 = 0;

        loop {
            iteration += 1;
            tracing::debug!(iteration, "Starting iteration");

            let delay = match self.run_iteration().await {
                Ok(IterationOutcome::Completed(_)) => Duration::ZERO,
                Ok(IterationOutcome::EmptyList) => self.refresh.empty_list_delay(),
                Err(e) => {
                    self.reporter.report_iteration_error(&e);
                    self.refresh.error_delay()
                }
            };

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }
}
