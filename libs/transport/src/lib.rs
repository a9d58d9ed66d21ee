//! # Trapwire Transport
//!
//! ## Purpose
//!
//! Delivery layer for encoded trapper frames. One call, one TCP connection:
//! dial, write the frame, read the reply until the peer closes, tear down.
//! The bytes that come back are handed to the codec untouched.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/codec → [transport] → monitoring server
//!      ↓             ↓
//! Wire Framing   TCP Delivery
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Envelope validation or JSON handling (belongs in `codec`)
//! - Retry or backoff policy (belongs to whatever orchestrates submissions)
//! - Connection pooling — the protocol's read-to-close reply delimiting
//!   rules out reusing a connection across submissions

pub mod error;
pub mod tcp;

pub use error::{Result, TransportError};
pub use tcp::{TransportConfig, TrapperClient};
