//! Protocol-level errors for trapper envelope processing
//!
//! Each variant carries enough context to diagnose a bad frame from the
//! error display alone: sizes for truncation, observed bytes for a magic
//! mismatch, the serializer's own report for an unencodable payload.

use thiserror::Error;

/// Trapper codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// A metric value could not be represented in the JSON payload
    #[error("payload encoding failed: {source}")]
    EncodingFailed {
        #[source]
        source: serde_json::Error,
    },

    /// Response envelope is truncated or does not open with the magic prefix
    #[error("invalid response header: {reason}")]
    InvalidHeader { reason: String },
}

impl CodecError {
    /// Response shorter than the fixed 13-byte envelope header.
    pub fn header_too_short(need: usize, got: usize) -> Self {
        Self::InvalidHeader {
            reason: format!("need {} header bytes, got {}", need, got),
        }
    }

    /// Response opens with something other than the magic/version prefix.
    pub fn bad_magic(expected: &[u8], actual: &[u8]) -> Self {
        Self::InvalidHeader {
            reason: format!(
                "bad magic/version prefix: expected {:02x?}, got {:02x?}",
                expected, actual
            ),
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
