//! # Trapwire Codec Integration Tests
//!
//! Verifies the public framing API end-to-end:
//! - Exact wire bytes for a known submission
//! - Header validation on truncated and corrupted replies
//! - The documented decode contract (payload = everything past byte 13)

use codec::{decode, declared_len, encode, CodecError, HEADER_SIZE, PROTOCOL_MAGIC};
use types::{MetricBatch, MetricRecord};

/// The reference submission: one float sample with a bracketed item key.
fn reference_batch() -> MetricBatch {
    MetricBatch::new(vec![MetricRecord::new(
        "host_test",
        r#"key_test["{$URL}","github","{$HOST}","space_use"]"#,
        99.87,
        1566481943,
    )
    .unwrap()])
}

const REFERENCE_JSON: &str = r#"{"request":"agent data","data":[{"host":"host_test","key":"key_test[\"{$URL}\",\"github\",\"{$HOST}\",\"space_use\"]","value":99.87,"clock":1566481943}]}"#;

#[test]
fn encode_produces_reference_frame() {
    let frame = encode(&reference_batch()).unwrap();

    assert_eq!(&frame[..5], b"ZBXD\x01");
    assert_eq!(
        &frame[5..13],
        &(REFERENCE_JSON.len() as u64).to_le_bytes()
    );
    assert_eq!(&frame[13..], REFERENCE_JSON.as_bytes());
}

#[test]
fn encode_length_field_matches_payload() {
    let frame = encode(&reference_batch()).unwrap();
    let payload_len = (frame.len() - HEADER_SIZE) as u64;
    assert_eq!(declared_len(&frame), Some(payload_len));
}

#[test]
fn encode_accepts_empty_batch() {
    let frame = encode(&MetricBatch::new(Vec::new())).unwrap();
    assert_eq!(&frame[13..], br#"{"request":"agent data","data":[]}"#);
}

#[test]
fn decode_rejects_short_input() {
    for len in 0..HEADER_SIZE {
        let input = vec![b'Z'; len];
        let err = decode(&input).unwrap_err();
        assert!(
            matches!(err, CodecError::InvalidHeader { .. }),
            "length {} should be rejected as InvalidHeader",
            len
        );
    }
}

#[test]
fn decode_rejects_wrong_magic() {
    let mut frame = Vec::new();
    frame.extend_from_slice(b"HTTP/");
    frame.extend_from_slice(&0u64.to_le_bytes());
    frame.extend_from_slice(b"{}");

    let err = decode(&frame).unwrap_err();
    assert!(matches!(err, CodecError::InvalidHeader { .. }));
}

#[test]
fn decode_rejects_wrong_protocol_version() {
    let mut frame = Vec::new();
    frame.extend_from_slice(b"ZBXD\x02");
    frame.extend_from_slice(&2u64.to_le_bytes());
    frame.extend_from_slice(b"{}");

    let err = decode(&frame).unwrap_err();
    assert!(matches!(err, CodecError::InvalidHeader { .. }));
}

#[test]
fn decode_returns_everything_past_header() {
    // Declared length says 3 bytes; the payload is longer. The contract is
    // that decode trusts the transport's read-to-close delimiting, not the
    // length field, so the full tail comes back.
    let mut frame = Vec::new();
    frame.extend_from_slice(&PROTOCOL_MAGIC);
    frame.extend_from_slice(&3u64.to_le_bytes());
    frame.extend_from_slice(b"{\"response\":\"success\",\"info\":\"processed: 1\"}");

    let payload = decode(&frame).unwrap();
    assert_eq!(payload, &frame[13..]);
}

#[test]
fn decode_of_exact_header_yields_empty_payload() {
    let mut frame = Vec::new();
    frame.extend_from_slice(&PROTOCOL_MAGIC);
    frame.extend_from_slice(&0u64.to_le_bytes());

    let payload = decode(&frame).unwrap();
    assert!(payload.is_empty());
}

#[test]
fn encode_then_decode_roundtrips_payload() {
    let frame = encode(&reference_batch()).unwrap();
    let payload = decode(&frame).unwrap();
    assert_eq!(payload, REFERENCE_JSON.as_bytes());
}
