//! Tracing setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies, with
//! the HTTP stack's own targets capped at `warn`. Production emits JSON
//! lines, every other environment the human-readable formatter.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Targets that are only interesting when explicitly requested via `RUST_LOG`.
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "tower_http"];

/// Filter directives used when `RUST_LOG` is absent.
pub fn default_directives(level: &str) -> String {
    let mut directives = vec![level.trim().to_ascii_lowercase()];
    directives.extend(QUIET_TARGETS.iter().map(|t| format!("{t}=warn")));
    directives.join(",")
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directives(level))
            .map_err(|e| anyhow!("invalid log level '{}': {}", level, e)),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(settings: &Settings) -> Result<()> {
    let filter = env_filter(&settings.log_level)?;

    let installed = if settings.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_current_span(false)
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_target(true)
            .with_env_filter(filter)
            .try_init()
    };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
