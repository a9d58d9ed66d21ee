//! # Trapwire Protocol Codec
//!
//! ## Purpose
//!
//! The "rules" layer of the submission pipeline: how a `MetricBatch` becomes
//! bytes on the wire, and how a framed reply is validated and unwrapped.
//! This crate owns the envelope constants and nothing else — no sockets, no
//! configuration, no scheduling.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → libs/transport
//!     ↑           ↓            ↓
//! Pure Data   Wire Framing   TCP Delivery
//! ```
//!
//! ## Framing Contract
//!
//! Requests and replies share one envelope: a 5-byte magic/version prefix,
//! an 8-byte little-endian payload length, then the JSON payload. On decode
//! the length field is intentionally not trusted to bound the payload; the
//! transport's read-to-close semantics already delimit the reply. See
//! `frame::decode` for the full contract.

pub mod error;
pub mod frame;
pub mod protocol_constants;

pub use error::{CodecError, CodecResult};
pub use frame::{decode, declared_len, encode};
pub use protocol_constants::{HEADER_SIZE, LENGTH_OFFSET, LENGTH_SIZE, PROTOCOL_MAGIC};
