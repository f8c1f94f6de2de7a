use time::{macros::format_description, Date, OffsetDateTime};

use crate::core::catalog::{MetricKind, MetricKey};
use crate::core::score::{self, Tier};
use crate::core::series::SeriesSet;

/// Compact axis label like `Mar 2`.
pub(crate) fn format_axis_label(stamp: OffsetDateTime) -> String {
    stamp
        .format(&format_description!("[month repr:short] [day padding:none]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Tier counts (good, fair, poor) for the most recent photo, skipping
/// placeholders and neutral tiers.
pub(crate) fn latest_tier_counts(
    set: &SeriesSet,
    birth_date: Option<Date>,
) -> (usize, usize, usize) {
    let mut good = 0;
    let mut fair = 0;
    let mut poor = 0;

    let last = match set.len().checked_sub(1) {
        Some(index) => index,
        None => return (0, 0, 0),
    };

    for series in &set.series {
        if series.key.kind() == MetricKind::Categorical {
            continue;
        }
        let normalized = score::normalize(&series.points[last].raw, series.key, birth_date);
        if normalized.is_placeholder {
            continue;
        }
        match normalized.tier {
            Tier::Good => good += 1,
            Tier::Fair => fair += 1,
            Tier::Poor => poor += 1,
            Tier::NoData => {}
        }
    }

    (good, fair, poor)
}

/// The metric with the largest positive change into the most recent photo.
pub(crate) fn best_improvement(set: &SeriesSet) -> Option<(MetricKey, f64)> {
    let last = set.len().checked_sub(1)?;
    set.series
        .iter()
        .filter(|series| series.key.kind() == MetricKind::Score)
        .filter_map(|series| series.delta_percent(last).map(|delta| (series.key, delta)))
        .filter(|(_, delta)| *delta > 0.0)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::photo::PhotoRecord;
    use crate::core::series::build_series;
    use serde_json::json;

    #[test]
    fn tier_counts_skip_placeholders_and_categoricals() {
        let photos = vec![PhotoRecord::new(
            "p1",
            "2035-03-02T10:00:00Z",
            json!({ "hydration": 80.0, "acne": 20.0, "pores": 0.0, "skinType": "Dry" }),
        )];
        let set = build_series(&photos);
        let (good, fair, poor) = latest_tier_counts(&set, None);
        assert_eq!(good, 1);
        assert_eq!(fair, 0);
        assert_eq!(poor, 1);
    }

    #[test]
    fn best_improvement_picks_the_largest_positive_delta() {
        let photos = vec![
            PhotoRecord::new(
                "p1",
                "2035-03-01T10:00:00Z",
                json!({ "hydration": 40.0, "acne": 50.0 }),
            ),
            PhotoRecord::new(
                "p2",
                "2035-03-02T10:00:00Z",
                json!({ "hydration": 60.0, "acne": 45.0 }),
            ),
        ];
        let set = build_series(&photos);
        let (key, delta) = best_improvement(&set).unwrap();
        assert_eq!(key, MetricKey::Hydration);
        assert!((delta - 50.0).abs() < 1e-9);
    }
}
