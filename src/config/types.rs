use serde::Deserialize;
use std::time::Duration;

/// Default address of the remote URL list
pub const DEFAULT_SOURCE_URL: &str = "https://ampnyapunyaku.top/api/lockdown-atc/node.txt";

/// Default relay used for fallback probes
pub const DEFAULT_RELAY_BASE_URL: &str = "https://cors-anywhere-railway-production.up.railway.app";

/// Main configuration structure for URL Runner
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub relay: RelayConfig,
    pub probe: ProbeConfig,
    pub refresh: RefreshConfig,
    pub server: ServerConfig,
}

/// Where the URL list is pulled from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Address of the plain-text URL list
    pub url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

/// Relay used for the fallback attempt
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Base address; the target URL is appended after a '/'
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RELAY_BASE_URL.to_string(),
        }
    }
}

/// Probe behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Number of concurrent workers per pass
    pub workers: usize,

    /// Timeout for every single HTTP attempt (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            workers: 20,
            timeout_secs: 20,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// Refresh loop pacing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Pause after an iteration that found an empty list (milliseconds, 0 disables)
    #[serde(rename = "empty-list-delay-ms")]
    pub empty_list_delay_ms: u64,

    /// Pause after a failed iteration (milliseconds, 0 disables)
    #[serde(rename = "error-delay-ms")]
    pub error_delay_ms: u64,
}

impl RefreshConfig {
    pub fn empty_list_delay(&self) -> Duration {
        Duration::from_millis(self.empty_list_delay_ms)
    }

    pub fn error_delay(&self) -> Duration {
        Duration::from_millis(self.error_delay_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            empty_list_delay_ms: 1000,
            error_delay_ms: 1000,
        }
    }
}

/// Liveness endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the liveness endpoint listens on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}
