//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use url_runner::config::{
    Config, ProbeConfig, RefreshConfig, RelayConfig, ServerConfig, SourceConfig,
};
use url_runner::output::{PassSummary, ProbeReport, ProbeReporter};
use url_runner::RunnerError;

/// Reporter that keeps everything it receives
#[derive(Default)]
pub struct CollectingReporter {
    pub probes: Mutex<Vec<ProbeReport>>,
    pub passes: Mutex<Vec<PassSummary>>,
    pub errors: Mutex<Vec<String>>,
    pub empty_lists: AtomicUsize,
    pub lists_loaded: AtomicUsize,
}

impl CollectingReporter {
    pub fn probes(&self) -> Vec<ProbeReport> {
        self.probes.lock().unwrap().clone()
    }

    pub fn probe_for(&self, url: &str) -> Option<ProbeReport> {
        self.probes().into_iter().find(|r| r.url == url)
    }

    pub fn pass_count(&self) -> usize {
        self.passes.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn empty_list_count(&self) -> usize {
        self.empty_lists.load(Ordering::SeqCst)
    }
}

impl ProbeReporter for CollectingReporter {
    fn report_probe(&self, report: &ProbeReport) {
        self.probes.lock().unwrap().push(report.clone());
    }

    fn report_list_loaded(&self, _count: usize) {
        self.lists_loaded.fetch_add(1, Ordering::SeqCst);
    }

    fn report_empty_list(&self, _source: &str) {
        self.empty_lists.fetch_add(1, Ordering::SeqCst);
    }

    fn report_iteration_error(&self, error: &RunnerError) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    fn report_pass(&self, summary: &PassSummary) {
        self.passes.lock().unwrap().push(summary.clone());
    }
}

/// Probe settings used throughout the tests
pub fn test_probe_config() -> ProbeConfig {
    ProbeConfig {
        workers: 4,
        timeout_secs: 5,
        user_agent: "TestAgent/1.0".to_string(),
    }
}

/// Creates a configuration pointing at test servers
pub fn create_test_config(source_url: &str, relay_base: &str) -> Config {
    Config {
        source: SourceConfig {
            url: source_url.to_string(),
        },
        relay: RelayConfig {
            base_url: relay_base.to_string(),
        },
        probe: test_probe_config(),
        refresh: RefreshConfig {
            empty_list_delay_ms: 20,
            error_delay_ms: 20,
        },
        server: ServerConfig::default(),
    }
}

/// Returns an address on localhost where nothing is listening
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
