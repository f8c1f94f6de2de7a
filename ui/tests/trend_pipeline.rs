//! End-to-end pipeline checks: photo history → aligned series → normalized
//! tiers → selection coordination.

use serde_json::json;

use ui::core::catalog::MetricKey;
use ui::core::photo::{PhotoRecord, RawMetric};
use ui::core::score::{self, Tier, PLACEHOLDER_VALUE};
use ui::core::selection::SelectionCoordinator;
use ui::core::series::build_series;

fn photo(id: &str, captured_at: &str, metrics: serde_json::Value) -> PhotoRecord {
    PhotoRecord::new(id.to_string(), captured_at.to_string(), metrics)
}

#[test]
fn history_flows_from_photos_to_selection() {
    let photos = vec![
        photo("p1", "2035-03-01T09:00:00Z", json!({})),
        photo("p2", "2035-03-02T09:00:00Z", json!({ "hydration": 25.0 })),
        photo("p3", "2035-03-03T09:00:00Z", json!({ "hydration": 85.0 })),
    ];

    let set = build_series(&photos);
    let hydration = set.series_for(MetricKey::Hydration).unwrap();
    assert_eq!(hydration.points.len(), 3);
    assert_eq!(hydration.points[0].raw, RawMetric::Missing);
    assert_eq!(hydration.points[1].raw, RawMetric::Score(25.0));
    assert_eq!(hydration.points[2].raw, RawMetric::Score(85.0));

    let tiers: Vec<_> = hydration
        .points
        .iter()
        .map(|point| score::normalize(&point.raw, MetricKey::Hydration, None))
        .collect();
    assert!(tiers[0].is_placeholder);
    assert_eq!(tiers[0].value, PLACEHOLDER_VALUE);
    assert_eq!(tiers[1].tier, Tier::Poor);
    assert_eq!(tiers[2].tier, Tier::Good);

    let mut coordinator = SelectionCoordinator::default();
    coordinator.load_dataset(set.len());
    coordinator.auto_select_most_recent();
    assert_eq!(coordinator.selected(), Some(2));
    assert!(coordinator.force_sync());
}

#[test]
fn empty_history_keeps_the_coordinator_uninitialized() {
    let set = build_series(&[]);
    assert!(set.series.is_empty());
    assert!(set.timestamps.is_empty());

    let mut coordinator = SelectionCoordinator::default();
    coordinator.load_dataset(set.len());
    assert!(!coordinator.has_data());
    assert!(coordinator.auto_select_most_recent().is_none());
    assert!(!coordinator.select_at(0, 100.0));
    assert_eq!(coordinator.selected(), None);
}

#[test]
fn alignment_holds_for_every_metric_even_with_gaps() {
    let photos = vec![
        photo("p1", "2035-03-01T09:00:00Z", json!({ "acne": 40.0 })),
        photo("p2", "not-a-date", json!({ "skinType": "Oily" })),
        photo("p3", "2035-03-03T09:00:00Z", json!({ "eyeAge": 31.0 })),
    ];

    let set = build_series(&photos);
    for key in MetricKey::ALL {
        let series = set.series_for(key).unwrap();
        assert_eq!(series.points.len(), photos.len(), "series {key:?} misaligned");
    }
    // The bad timestamp drops off the axis but keeps its slot.
    assert_eq!(set.timestamps.len(), 2);
    assert_eq!(set.len(), 3);
}
