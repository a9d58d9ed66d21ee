//! Envelope framing: encode a batch into a frame, strip a reply's header
//!
//! Wire layout, identical for request and reply:
//!
//! ```text
//! offset 0..5   : b"ZBXD\x01"                 magic + protocol version
//! offset 5..13  : u64 little-endian           payload byte length
//! offset 13..   : UTF-8 JSON payload
//! ```
//!
//! A frame exists only for the duration of one encode/send or receive/decode
//! step; nothing here holds state across calls.

use crate::error::{CodecError, CodecResult};
use crate::protocol_constants::{HEADER_SIZE, LENGTH_OFFSET, PROTOCOL_MAGIC};
use tracing::debug;
use types::MetricBatch;

/// Serialize a batch and wrap it in the trapper envelope.
///
/// The payload is the batch's JSON form verbatim; the only failure mode is a
/// value the serializer cannot represent. No validation of hosts, keys, or
/// batch size happens at this layer.
pub fn encode(batch: &MetricBatch) -> CodecResult<Vec<u8>> {
    let payload =
        serde_json::to_vec(batch).map_err(|source| CodecError::EncodingFailed { source })?;

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&PROTOCOL_MAGIC);
    frame.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    frame.extend_from_slice(&payload);

    debug!(
        records = batch.len(),
        payload_bytes = payload.len(),
        "Encoded trapper frame"
    );

    Ok(frame)
}

/// Validate a reply's envelope and return the payload after the header.
///
/// Returns everything from byte 13 onward. The declared length field is
/// deliberately NOT used to bound the slice: the transport reads to stream
/// close, so the caller already holds exactly the bytes the peer sent. See
/// [`declared_len`] for inspecting the field without changing this contract.
pub fn decode(response: &[u8]) -> CodecResult<&[u8]> {
    if response.len() < HEADER_SIZE {
        return Err(CodecError::header_too_short(HEADER_SIZE, response.len()));
    }

    let prefix = &response[..PROTOCOL_MAGIC.len()];
    if prefix != PROTOCOL_MAGIC {
        return Err(CodecError::bad_magic(&PROTOCOL_MAGIC, prefix));
    }

    Ok(&response[HEADER_SIZE..])
}

/// Read the declared payload length from a frame's header, if one is present.
///
/// Diagnostic only: `decode` never consults this value.
pub fn declared_len(frame: &[u8]) -> Option<u64> {
    let field = frame.get(LENGTH_OFFSET..HEADER_SIZE)?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(field);
    Some(u64::from_le_bytes(buf))
}
