//! # Trapwire Data Model
//!
//! ## Purpose
//!
//! Pure data structures for the trapper submission pipeline: metric records,
//! the "agent data" batch that carries them, the server's reply payload, and
//! the address a batch is delivered to.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → libs/transport
//!     ↑             ↓              ↓
//! Pure Data    Wire Framing    TCP Delivery
//! ```
//!
//! This crate has no knowledge of the wire envelope or of sockets. It only
//! defines what a submission *is*; `codec` defines how it is framed and
//! `transport` defines how it travels.
//!
//! ## What This Crate Contains
//! - `MetricRecord` / `MetricValue`: one timestamped monitoring data point
//! - `MetricBatch`: an ordered "agent data" submission
//! - `TrapperResponse`: the server's decoded reply payload
//! - `ServerAddress`: validated host/port destination
//!
//! ## What This Crate Does NOT Contain
//! - Envelope framing or length encoding (belongs in `codec`)
//! - Socket management or connection handling (belongs in `transport`)

pub mod address;
pub mod metric;
pub mod response;

pub use address::ServerAddress;
pub use metric::{InvalidMetric, MetricBatch, MetricRecord, MetricValue, AGENT_DATA_REQUEST};
pub use response::TrapperResponse;
