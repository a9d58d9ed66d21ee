//! Configuration errors
//!
//! Every variant is fatal to the run: configuration problems surface before
//! any network attempt. The loader only returns these; whether to abort the
//! process is the entry point's decision.

use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: config_crate::ConfigError,
    },

    /// Configuration file was read but does not match the expected schema
    #[error("failed to parse configuration {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: config_crate::ConfigError,
    },

    /// Server port outside the valid range
    #[error("invalid server port {port}: must be in 1..=65535")]
    InvalidPort { port: u16 },
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
