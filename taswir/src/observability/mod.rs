//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job.

use crate::config::TaswirConfig;
use crate::errors::{Result, TaswirError};
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| TaswirError::Config(format!("Invalid log filter '{default_level}': {e}")))
}

/// Installs a global fmt subscriber, as plain text or JSON lines.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let filter = env_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| TaswirError::Config(format!("Failed to install subscriber: {e}")))
}

/// Installs the subscriber described by a config.
pub fn init_from_config(config: &TaswirConfig) -> Result<()> {
    init_tracing(&config.log_level, config.json_logs)
}
