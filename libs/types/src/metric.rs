//! Metric records and the "agent data" batch that carries them
//!
//! A `MetricRecord` is one (host, key, value, clock) data point. Records are
//! collected into a `MetricBatch`, whose request tag is fixed at
//! construction so a batch can never masquerade as another request type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request tag carried by every metric batch.
///
/// The monitoring server dispatches on this literal; it is not
/// caller-settable.
pub const AGENT_DATA_REQUEST: &str = "agent data";

/// Validation errors raised when constructing a metric record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidMetric {
    /// Host must identify the monitored entity
    #[error("metric host must be non-empty")]
    EmptyHost,

    /// Key must identify the item the value belongs to
    #[error("metric key must be non-empty")]
    EmptyKey,
}

/// A metric value as the server accepts it: number or string.
///
/// Serializes untagged, so a `Float` lands on the wire as a bare JSON
/// number and `Text` as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Float(f64),
    Integer(i64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One monitoring data point
///
/// `key` is treated as an opaque identifier: item keys routinely embed
/// bracketed, quoted sub-parameters (`key_test["{$URL}","github"]`) and
/// this crate never parses them. `clock` is the sample time as Unix
/// seconds; no bound is enforced beyond the i32 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub host: String,
    pub key: String,
    pub value: MetricValue,
    pub clock: i32,
}

impl MetricRecord {
    /// Build a record, rejecting empty host or key up front.
    ///
    /// The codec performs no validation of its own, so this constructor is
    /// the only place the non-empty invariant is enforced.
    pub fn new(
        host: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<MetricValue>,
        clock: i32,
    ) -> Result<Self, InvalidMetric> {
        let host = host.into();
        let key = key.into();

        if host.is_empty() {
            return Err(InvalidMetric::EmptyHost);
        }
        if key.is_empty() {
            return Err(InvalidMetric::EmptyKey);
        }

        Ok(Self {
            host,
            key,
            value: value.into(),
            clock,
        })
    }
}

/// An ordered "agent data" submission
///
/// Record order is preserved on the wire. A batch may be empty; whether the
/// server accepts an empty submission is its own business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBatch {
    request: String,
    data: Vec<MetricRecord>,
}

impl MetricBatch {
    /// Wrap records in an "agent data" request.
    pub fn new(records: Vec<MetricRecord>) -> Self {
        Self {
            request: AGENT_DATA_REQUEST.to_string(),
            data: records,
        }
    }

    /// The fixed request tag.
    pub fn request(&self) -> &str {
        &self.request
    }

    /// The records in submission order.
    pub fn records(&self) -> &[MetricRecord] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rejects_empty_host() {
        let err = MetricRecord::new("", "key_test", 1.0, 0).unwrap_err();
        assert_eq!(err, InvalidMetric::EmptyHost);
    }

    #[test]
    fn record_rejects_empty_key() {
        let err = MetricRecord::new("host_test", "", 1.0, 0).unwrap_err();
        assert_eq!(err, InvalidMetric::EmptyKey);
    }

    #[test]
    fn bracketed_key_is_kept_opaque() {
        let key = r#"key_test["{$URL}","github","{$HOST}","space_use"]"#;
        let record = MetricRecord::new("host_test", key, 99.87, 1566481943).unwrap();
        assert_eq!(record.key, key);
    }

    #[test]
    fn value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&MetricValue::Float(99.87)).unwrap(),
            "99.87"
        );
        assert_eq!(
            serde_json::to_string(&MetricValue::Integer(42)).unwrap(),
            "42"
        );
        assert_eq!(
            serde_json::to_string(&MetricValue::Text("up".into())).unwrap(),
            "\"up\""
        );
    }

    #[test]
    fn batch_fixes_request_tag_and_preserves_order() {
        let records = vec![
            MetricRecord::new("h", "k1", 1i64, 10).unwrap(),
            MetricRecord::new("h", "k2", 2i64, 20).unwrap(),
        ];
        let batch = MetricBatch::new(records);

        assert_eq!(batch.request(), AGENT_DATA_REQUEST);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[0].key, "k1");
        assert_eq!(batch.records()[1].key, "k2");

        let json = serde_json::to_string(&batch).unwrap();
        assert!(json.starts_with(r#"{"request":"agent data","data":["#));
    }
}
