//! Transport Error Types
//!
//! One variant per failure class of the send state machine: dialing,
//! writing, reading, and the deadlines that bound them. Every I/O failure
//! wraps the underlying `std::io::Error` as its source.

use thiserror::Error;

/// Main transport error type
#[derive(Debug, Error)]
pub enum TransportError {
    /// TCP dial failed: refused, unreachable, or name resolution failure
    #[error("connect error: failed to dial {addr}: {source}")]
    ConnectError {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Write failed after the connection was established
    #[error("send data error: {source}")]
    SendFailed {
        #[source]
        source: std::io::Error,
    },

    /// Read failed before the peer closed the stream cleanly
    #[error("receive data error: {source}")]
    RecvFailed {
        #[source]
        source: std::io::Error,
    },

    /// A bounded step exceeded its deadline
    #[error("timeout: {operation} exceeded {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },
}

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

impl TransportError {
    /// Create a connect error for the given dial target
    pub fn connect(addr: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConnectError {
            addr: addr.into(),
            source,
        }
    }

    /// Create a send error
    pub fn send_failed(source: std::io::Error) -> Self {
        Self::SendFailed { source }
    }

    /// Create a receive error
    pub fn recv_failed(source: std::io::Error) -> Self {
        Self::RecvFailed { source }
    }

    /// Create a timeout error for a named operation
    pub fn timeout(operation: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_ms: timeout.as_millis() as u64,
        }
    }
}
