//! Env-driven configuration (strict validation).

use pagetally_core::{Result, TallyError};

/// Environment variable naming the counter store host.
pub const REDIS_HOST_ENV: &str = "REDIS_HOST";

/// Store host used when `REDIS_HOST` is unset or blank.
pub const DEFAULT_REDIS_HOST: &str = "localhost";

/// Fixed store port; this service is a client of the standard wire protocol.
pub const REDIS_PORT: u16 = 6379;

/// Fixed listen address for the HTTP front end.
pub const LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub redis_host: String,
}

impl WebConfig {
    /// Read config from the process environment.
    ///
    /// Unset or blank `REDIS_HOST` falls back to [`DEFAULT_REDIS_HOST`].
    pub fn from_env() -> Self {
        let redis_host = std::env::var(REDIS_HOST_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REDIS_HOST.to_string());
        Self { redis_host }
    }

    /// Reject hosts that cannot form a valid store URL.
    pub fn validate(&self) -> Result<()> {
        let host = &self.redis_host;
        if host.contains("://") || host.contains('/') || host.contains('@') {
            return Err(TallyError::InvalidConfig(format!(
                "REDIS_HOST must be a bare hostname, got {host:?}"
            )));
        }
        if host.contains(':') || host.chars().any(char::is_whitespace) {
            return Err(TallyError::InvalidConfig(format!(
                "REDIS_HOST must not carry a port or whitespace, got {host:?}"
            )));
        }
        Ok(())
    }

    /// Store endpoint URL on the fixed port.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, REDIS_PORT)
    }
}
