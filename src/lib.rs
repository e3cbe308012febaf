//! URL Runner: a continuous JSON reachability prober
//!
//! This crate pulls a remote list of URLs, probes every entry directly and,
//! when the direct attempt fails or hits an anti-bot page, once more through
//! a relay. Each URL is classified as directly reachable, reachable through
//! the relay, or failed. The list is re-pulled forever.

pub mod classify;
pub mod config;
pub mod output;
pub mod runner;
pub mod server;
pub mod state;

use thiserror::Error;

/// Main error type for URL Runner operations
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch URL list from {url}: {message}")]
    ListSource { url: String, message: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Worker task failed: {0}")]
    Worker(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid value for environment variable {var}: '{value}'")]
    InvalidEnv { var: String, value: String },
}

/// Result type alias for URL Runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use classify::{looks_like_challenge, looks_like_json, AttemptVerdict};
pub use config::Config;
pub use runner::{parse_list, Prober, Runner, WorkerPool};
pub use state::ClassificationOutcome;
