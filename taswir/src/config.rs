//! Runtime configuration.
//!
//! All values have defaults matching the mock front end (1.5 s connect
//! validation, 1 s redirect, 1 s tool processing, 1 s log flash, 5 MB
//! upload limit). A config can be read from a JSON file and then
//! overridden from `TASWIR_*` environment variables.

use crate::errors::{Result, TaswirError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "TASWIR_";

/// Configuration for the taswir view model and CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaswirConfig {
    /// Simulated connection validation delay in milliseconds.
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,
    /// Delay between the connect notification and the redirect.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
    /// Simulated processing delay for tool submissions.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long the session log flashes after a new entry.
    #[serde(default = "default_log_flash_ms")]
    pub log_flash_ms: u64,
    /// Largest accepted upload in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Seed for theme selection in summaries. `None` seeds from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Default tracing filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of the human format.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_connect_delay_ms() -> u64 {
    1500
}

fn default_redirect_delay_ms() -> u64 {
    1000
}

fn default_submit_delay_ms() -> u64 {
    1000
}

fn default_log_flash_ms() -> u64 {
    1000
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024 // 5MB
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TaswirConfig {
    fn default() -> Self {
        Self {
            connect_delay_ms: default_connect_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            log_flash_ms: default_log_flash_ms(),
            max_upload_bytes: default_max_upload_bytes(),
            rng_seed: None,
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl TaswirConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with every simulated delay set to zero.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            connect_delay_ms: 0,
            redirect_delay_ms: 0,
            submit_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file. Missing keys take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TaswirError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Applies `TASWIR_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
    }

    /// Applies overrides from an arbitrary lookup, keyed by the
    /// upper-case field name without prefix.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CONNECT_DELAY_MS") {
            self.connect_delay_ms = parse_override("CONNECT_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("REDIRECT_DELAY_MS") {
            self.redirect_delay_ms = parse_override("REDIRECT_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("SUBMIT_DELAY_MS") {
            self.submit_delay_ms = parse_override("SUBMIT_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("LOG_FLASH_MS") {
            self.log_flash_ms = parse_override("LOG_FLASH_MS", &v)?;
        }
        if let Some(v) = lookup("MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = parse_override("MAX_UPLOAD_BYTES", &v)?;
        }
        if let Some(v) = lookup("RNG_SEED") {
            self.rng_seed = Some(parse_override("RNG_SEED", &v)?);
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            self.log_level = v;
        }
        if let Some(v) = lookup("JSON_LOGS") {
            self.json_logs = parse_override("JSON_LOGS", &v)?;
        }
        Ok(self)
    }

    /// Sets the submit delay.
    #[must_use]
    pub fn with_submit_delay_ms(mut self, ms: u64) -> Self {
        self.submit_delay_ms = ms;
        self
    }

    /// Sets the connect delay.
    #[must_use]
    pub fn with_connect_delay_ms(mut self, ms: u64) -> Self {
        self.connect_delay_ms = ms;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Gets the connect delay as Duration.
    #[must_use]
    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    /// Gets the redirect delay as Duration.
    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// Gets the submit delay as Duration.
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Gets the log flash window as a chrono duration.
    #[must_use]
    pub fn log_flash(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.log_flash_ms).unwrap_or(i64::MAX))
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TaswirError::Config(format!("{ENV_PREFIX}{key} has invalid value '{value}'")))
}
