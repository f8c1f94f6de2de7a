//! Deterministic demo photo history.
//!
//! The real photo list comes from the retrieval layer; the shells use this
//! fixture so the trends page renders something meaningful out of the box.

use serde_json::json;
use uuid::Uuid;

use super::photo::PhotoRecord;

/// A two-week history with a visible upward hydration trend, one partially
/// analyzed photo, and a skin-type change along the way.
pub fn demo_photos() -> Vec<PhotoRecord> {
    let payloads = [
        (
            "2035-02-17T08:30:00Z",
            json!({
                "acne": 28.0, "redness": 35.0, "pigmentation": 52.0, "pores": 44.0,
                "hydration": 38.0, "uniformness": 47.0, "eyeBags": 41.0, "lines": 63.0,
                "perceivedAge": 34.0, "eyeAge": 36.0, "skinType": "Dry"
            }),
        ),
        (
            "2035-02-21T19:05:00Z",
            json!({
                "acne": 33.0, "redness": 39.0, "pigmentation": 55.0, "pores": 46.0,
                "hydration": 47.0, "uniformness": 50.0, "eyeBags": 45.0, "lines": 64.0,
                "perceivedAge": 33.0, "eyeAge": 35.0, "skinType": "Dry"
            }),
        ),
        // Partially analyzed upload: the service omitted most metrics.
        (
            "2035-02-25T07:55:00Z",
            json!({ "hydration": 0.0, "skinType": "Normal" }),
        ),
        (
            "2035-02-28T21:40:00Z",
            json!({
                "acne": 46.0, "redness": 48.0, "pigmentation": 58.0, "pores": 51.0,
                "hydration": 61.0, "uniformness": 56.0, "eyeBags": 52.0, "lines": 66.0,
                "perceivedAge": 31.0, "eyeAge": 33.0, "skinType": "Normal"
            }),
        ),
        (
            "2035-03-02T15:45:00Z",
            json!({
                "acne": 58.0, "redness": 61.0, "pigmentation": 63.0, "pores": 57.0,
                "hydration": 74.0, "uniformness": 62.0, "eyeBags": 59.0, "lines": 68.0,
                "perceivedAge": 30.0, "eyeAge": 31.0, "skinType": "Normal"
            }),
        ),
    ];

    payloads
        .into_iter()
        .map(|(captured_at, metrics)| {
            PhotoRecord::new(Uuid::new_v4().to_string(), captured_at.to_string(), metrics)
        })
        .collect()
}
