//! Configuration module for URL Runner
//!
//! Configuration comes from an optional TOML file, then environment variable
//! overrides, then validation.
//!
//! # Example
//!
//! ```no_run
//! use url_runner::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Some(Path::new("runner.toml"))).unwrap();
//! println!("Probing with {} workers", config.probe.workers);
//! ```

mod env;
mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ProbeConfig, RefreshConfig, RelayConfig, ServerConfig, SourceConfig,
    DEFAULT_RELAY_BASE_URL, DEFAULT_SOURCE_URL,
};

// Re-export loading functions
pub use env::{apply_env_overrides, apply_overrides_from};
pub use parser::{compute_config_hash, load_config, parse_config};
pub use validation::validate;
