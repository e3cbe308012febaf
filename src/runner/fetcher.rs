//! HTTP fetcher and two-tier probe strategy
//!
//! This module handles every outbound request:
//! - Building the shared HTTP client (user agent, timeout)
//! - Single GET attempts that never fail, only report
//! - The direct-then-relay probe for one URL

use crate::classify::{classify_body, AttemptVerdict};
use crate::config::ProbeConfig;
use crate::output::{ProbeReport, ProbeReporter};
use crate::state::ClassificationOutcome;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;

/// Result of a single GET attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The server answered; the status code is deliberately ignored
    Body(String),

    /// No response body could be obtained
    Transport(String),
}

impl FetchResult {
    /// Returns the body text, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Body(body) => Some(body),
            Self::Transport(_) => None,
        }
    }
}

/// Builds the HTTP client shared by list fetches and probes
///
/// # Arguments
///
/// * `config` - Probe configuration (user agent and per-attempt timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ProbeConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues one GET request and reads the body as text
///
/// Any status code counts as a response. Errors while sending or while
/// reading the body are converted into `FetchResult::Transport`.
pub async fn fetch_text(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return FetchResult::Transport(describe_error(&e)),
    };

    tracing::trace!("GET {} -> {}", url, response.status());

    match response.text().await {
        Ok(body) => FetchResult::Body(body),
        Err(e) => FetchResult::Transport(describe_error(&e)),
    }
}

/// Builds the relayed address for a URL
///
/// Plain concatenation with a single '/' separator; the target is not
/// percent-encoded.
///
/// # Examples
///
/// ```
/// use url_runner::runner::relay_url;
///
/// assert_eq!(
///     relay_url("https://relay.example.com", "https://api.example.com/x?y=1"),
///     "https://relay.example.com/https://api.example.com/x?y=1"
/// );
/// ```
pub fn relay_url(relay_base: &str, url: &str) -> String {
    format!("{}/{}", relay_base, url)
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}

/// Direct-then-relay probe for single URLs
///
/// Every call to [`Prober::probe`] makes at most two requests and emits
/// exactly one report.
pub struct Prober {
    client: Client,
    relay_base: String,
    reporter: Arc<dyn ProbeReporter>,
}

impl Prober {
    /// Creates a prober
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client carrying the user agent and timeout
    /// * `relay_base` - Relay address the target URL is appended to
    /// * `reporter` - Sink that receives one report per probe
    pub fn new(
        client: Client,
        relay_base: impl Into<String>,
        reporter: Arc<dyn ProbeReporter>,
    ) -> Self {
        Self {
            client,
            relay_base: relay_base.into(),
            reporter,
        }
    }

    /// The HTTP client used for probes
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The relay base address
    pub fn relay_base(&self) -> &str {
        &self.relay_base
    }

    /// Probes a URL and reports the result
    ///
    /// # Probe Flow
    ///
    /// 1. GET the URL directly
    ///    - JSON and not a challenge page → `DirectOk`
    /// 2. GET `relay_base/url`
    ///    - JSON and not a challenge page → `ProxyOk`
    /// 3. Otherwise → `Failed`
    pub async fn probe(&self, url: &str) -> ClassificationOutcome {
        let report = self.inspect(url).await;
        self.reporter.report_probe(&report);
        report.outcome
    }

    /// Runs the probe flow without reporting
    pub async fn inspect(&self, url: &str) -> ProbeReport {
        let started = Instant::now();

        let direct = self.attempt(url).await;
        if direct.is_success() {
            return ProbeReport {
                url: url.to_string(),
                outcome: ClassificationOutcome::DirectOk,
                direct,
                relay: None,
                elapsed: started.elapsed(),
            };
        }

        tracing::debug!("Direct attempt for {} failed ({}), trying relay", url, direct);

        let relay = self.attempt(&relay_url(&self.relay_base, url)).await;
        let outcome = if relay.is_success() {
            ClassificationOutcome::ProxyOk
        } else {
            ClassificationOutcome::Failed
        };

        ProbeReport {
            url: url.to_string(),
            outcome,
            direct,
            relay: Some(relay),
            elapsed: started.elapsed(),
        }
    }

    async fn attempt(&self, url: &str) -> AttemptVerdict {
        match fetch_text(&self.client, url).await {
            FetchResult::Body(body) => classify_body(&body),
            FetchResult::Transport(error) => AttemptVerdict::Transport(error),
        }
    }
}
