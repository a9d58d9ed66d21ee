//! Protocol-level constants for the trapper wire format
//!
//! These values are part of the wire format specification and MUST remain
//! consistent with the monitoring server for protocol compatibility.

/// Envelope prefix: ASCII magic "ZBXD" followed by protocol version 0x01.
///
/// These five bytes MUST open every request and every reply; anything else
/// is rejected as an invalid header.
pub const PROTOCOL_MAGIC: [u8; 5] = *b"ZBXD\x01";

/// Byte offset of the payload length field within the envelope.
pub const LENGTH_OFFSET: usize = PROTOCOL_MAGIC.len();

/// Width of the payload length field: unsigned 64-bit little-endian.
pub const LENGTH_SIZE: usize = 8;

/// Total envelope header size: magic/version prefix plus length field.
pub const HEADER_SIZE: usize = LENGTH_OFFSET + LENGTH_SIZE;
