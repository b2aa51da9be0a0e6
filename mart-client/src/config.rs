//! Client configuration

use std::time::Duration;

/// Base URL used when `MART_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Request timeout used when `MART_API_TIMEOUT` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration for connecting to the category API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3333")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from the environment, reading a `.env` file first if present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `MART_API_URL` | `http://localhost:3333` |
    /// | `MART_API_TIMEOUT` | `10` (seconds) |
    /// | `MART_API_TOKEN` | none |
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout = lookup("MART_API_TIMEOUT").and_then(|raw| match raw.trim().parse() {
            Ok(secs) => Some(secs),
            Err(_) => {
                tracing::warn!(value = %raw, "Invalid MART_API_TIMEOUT, using default");
                None
            }
        });

        Self {
            base_url: lookup("MART_API_URL")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            token: lookup("MART_API_TOKEN").filter(|s| !s.is_empty()),
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
