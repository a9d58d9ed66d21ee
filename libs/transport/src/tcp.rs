//! One-shot TCP delivery of a framed submission
//!
//! Each `send` call walks a fixed sequence: dial, write the whole frame,
//! read until the peer closes the stream, shut the connection down. The
//! connection is released exactly once on every path, success or failure,
//! and nothing is shared between calls — no pooling, no reuse, no retry.

use crate::error::{Result, TransportError};
use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::{debug, warn};
use types::ServerAddress;

/// Deadlines bounding one send call.
///
/// The original agent blocked indefinitely on connect and read; explicit
/// deadlines keep an unresponsive or malicious peer from pinning the caller
/// forever. The read deadline covers the whole read-to-close phase, not
/// each individual read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Deadline for reading the complete reply
    pub read_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
        }
    }
}

/// Trapper transport client.
///
/// Holds only configuration; every call owns its connection and buffers
/// exclusively, so independent calls may run concurrently without
/// coordination.
#[derive(Debug, Clone, Default)]
pub struct TrapperClient {
    config: TransportConfig,
}

impl TrapperClient {
    /// Create a client with default deadlines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client from explicit deadlines.
    pub fn from_config(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Deliver one encoded frame and collect the peer's reply.
    ///
    /// Returns the accumulated response bytes, possibly empty, without
    /// validating them — envelope validation belongs to the codec, and the
    /// caller gets the buffer back even when it will fail that validation.
    pub async fn send(&self, address: &ServerAddress, frame: &[u8]) -> Result<Bytes> {
        let dial = address.to_string();

        debug!(address = %dial, bytes = frame.len(), "Connecting to trapper server");

        let mut stream = timeout(self.config.connect_timeout, TcpStream::connect(&dial))
            .await
            .map_err(|_| TransportError::timeout("TCP connect", self.config.connect_timeout))?
            .map_err(|e| TransportError::connect(&dial, e))?;

        if let Err(e) = stream.set_nodelay(true) {
            warn!("Failed to set TCP_NODELAY: {}", e);
        }

        let result = self.exchange(&mut stream, frame).await;

        // Terminal state on every path: release the connection exactly once.
        if let Err(e) = stream.shutdown().await {
            debug!(address = %dial, "Error shutting down connection: {}", e);
        }

        result
    }

    /// Write phase then read phase; split out so `send` owns teardown.
    async fn exchange(&self, stream: &mut TcpStream, frame: &[u8]) -> Result<Bytes> {
        stream
            .write_all(frame)
            .await
            .map_err(TransportError::send_failed)?;
        stream
            .flush()
            .await
            .map_err(TransportError::send_failed)?;

        debug!(bytes = frame.len(), "Wrote trapper frame");

        // Read until the peer closes the stream; clean EOF ends the reply.
        let deadline = Instant::now() + self.config.read_timeout;
        let mut response = BytesMut::with_capacity(4 * 1024);

        loop {
            let n = timeout_at(deadline, stream.read_buf(&mut response))
                .await
                .map_err(|_| {
                    TransportError::timeout("reply read", self.config.read_timeout)
                })?
                .map_err(TransportError::recv_failed)?;

            if n == 0 {
                break;
            }
        }

        debug!(bytes = response.len(), "Read reply to stream close");

        Ok(response.freeze())
    }
}
