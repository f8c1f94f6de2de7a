//! Analyzed-photo records as delivered by the retrieval layer.

use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::catalog::MetricKey;

/// One captured and analyzed photo. Records arrive sorted oldest→newest and
/// are read-only from here on; the series builder never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoRecord {
    pub id: String,
    /// RFC 3339 capture timestamp as sent by the service. Parsed lazily;
    /// an unparseable value degrades to "no timestamp", never an error.
    pub captured_at: String,
    /// Per-metric payload keyed by [`MetricKey::as_str`]. Partially analyzed
    /// photos legitimately omit keys, so this stays a loose JSON map.
    pub metrics: serde_json::Value,
}

/// A single metric value pulled out of the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMetric {
    /// Numeric score, nominally in `[0, 100]`.
    Score(f64),
    /// Categorical label (only the skin-type metric uses these).
    Category(String),
    Missing,
}

impl RawMetric {
    pub fn is_missing(&self) -> bool {
        matches!(self, RawMetric::Missing)
    }
}

impl PhotoRecord {
    pub fn new<T: Into<String>>(id: T, captured_at: T, metrics: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            captured_at: captured_at.into(),
            metrics,
        }
    }

    /// Capture time, or `None` when the service sent something unparseable.
    pub fn capture_time(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(self.captured_at.as_str(), &Rfc3339).ok()
    }

    /// Value for one metric. Numbers become scores, strings categories, and
    /// anything else (absent, null, objects, booleans) is treated as missing.
    pub fn metric(&self, key: MetricKey) -> RawMetric {
        match self.metrics.get(key.as_str()) {
            Some(value) => match value {
                serde_json::Value::Number(number) => number
                    .as_f64()
                    .map(RawMetric::Score)
                    .unwrap_or(RawMetric::Missing),
                serde_json::Value::String(text) => RawMetric::Category(text.clone()),
                _ => RawMetric::Missing,
            },
            None => RawMetric::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_values_decode() {
        let photo = PhotoRecord::new(
            "p1",
            "2035-03-02T15:45:00Z",
            json!({ "hydration": 64.5, "skinType": "Dry" }),
        );
        assert_eq!(photo.metric(MetricKey::Hydration), RawMetric::Score(64.5));
        assert_eq!(
            photo.metric(MetricKey::SkinType),
            RawMetric::Category("Dry".into())
        );
        assert!(photo.capture_time().is_some());
    }

    #[test]
    fn malformed_values_are_missing_not_errors() {
        let photo = PhotoRecord::new(
            "p2",
            "not-a-timestamp",
            json!({ "acne": null, "redness": { "nested": true }, "pores": true }),
        );
        assert!(photo.metric(MetricKey::Acne).is_missing());
        assert!(photo.metric(MetricKey::Redness).is_missing());
        assert!(photo.metric(MetricKey::Pores).is_missing());
        assert!(photo.metric(MetricKey::Hydration).is_missing());
        assert!(photo.capture_time().is_none());
    }
}
