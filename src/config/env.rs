//! Environment variable overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SOURCE_URL` | `source.url` |
//! | `CORS_PROXY` | `relay.base-url` |
//! | `PORT` | `server.port` |
//! | `RUNNER_WORKERS` | `probe.workers` |
//! | `RUNNER_TIMEOUT_SECS` | `probe.timeout-secs` |

use crate::config::types::Config;
use crate::ConfigError;
use std::str::FromStr;

/// Applies overrides from the process environment
pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
    apply_overrides_from(config, |var| std::env::var(var).ok())
}

/// Applies overrides using an arbitrary variable lookup
///
/// Empty values are ignored, so `PORT=` behaves like an unset variable.
pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    if let Some(url) = get("SOURCE_URL") {
        config.source.url = url;
    }

    if let Some(base_url) = get("CORS_PROXY") {
        config.relay.base_url = base_url;
    }

    if let Some(value) = get("PORT") {
        config.server.port = parse_var("PORT", &value)?;
    }

    if let Some(value) = get("RUNNER_WORKERS") {
        config.probe.workers = parse_var("RUNNER_WORKERS", &value)?;
    }

    if let Some(value) = get("RUNNER_TIMEOUT_SECS") {
        config.probe.timeout_secs = parse_var("RUNNER_TIMEOUT_SECS", &value)?;
    }

    Ok(())
}

fn parse_var<T: FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var: var.to_string(),
        value: value.to_string(),
    })
}
