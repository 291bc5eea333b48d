//! Shared error type across pagetally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and the web front end.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The counter store could not be reached or the operation against it
    /// could not complete. Covers refused connections, DNS failures,
    /// timeouts, and protocol-level errors alike.
    #[error("store connection failure: {0}")]
    ConnectionFailure(String),
    /// Configuration rejected at startup.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Stable machine-readable kind, used in logs and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            TallyError::ConnectionFailure(_) => "CONNECTION_FAILURE",
            TallyError::InvalidConfig(_) => "INVALID_CONFIG",
            TallyError::Internal(_) => "INTERNAL",
        }
    }

    /// Fixed body shown to HTTP clients when this error terminates a request.
    pub fn user_message(&self) -> &'static str {
        match self {
            TallyError::ConnectionFailure(_) => "Could not connect to Redis",
            _ => "internal server error",
        }
    }
}
