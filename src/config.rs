//! Runtime configuration resolved from the environment.
//!
//! The only secret is the Gemini API key; it is read from `GEMINI_API_KEY`
//! and never written to logs or embedded anywhere. The remaining knobs have
//! defaults and exist mostly for tests and proxies.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the Gemini API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Optional override for the model identifier.
pub const ENV_MODEL: &str = "MATHWHIZ_MODEL";
/// Optional override for the API base URL (used by tests and proxies).
pub const ENV_BASE_URL: &str = "MATHWHIZ_BASE_URL";
/// Optional override for the per-request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "MATHWHIZ_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{ENV_API_KEY} is not set; export your Gemini API key to use mathwhiz")]
    MissingApiKey,

    #[error("{ENV_TIMEOUT_SECS} must be a positive integer, got {value:?}")]
    InvalidTimeout { value: String },
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Bound on every gateway request; expiry surfaces as an upstream error.
    pub timeout: Duration,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// Tests inject closures here instead of mutating the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(ENV_API_KEY)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = lookup(ENV_MODEL)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup(ENV_BASE_URL)
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or(ConfigError::InvalidTimeout { value: raw })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }
}

/// Where the tracing subscriber writes.
///
/// The terminal belongs to the TUI, so diagnostics go to a file under the
/// user's local data directory. Returns `None` when no data directory can be
/// determined; logging is then disabled rather than failing startup.
pub fn log_file_path() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("mathwhiz");
    Some(dir.join("mathwhiz.log"))
}
