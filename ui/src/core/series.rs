//! Builds aligned per-metric trend series from an ordered photo history.

use time::{macros::format_description, OffsetDateTime};

use super::catalog::MetricKey;
use super::photo::{PhotoRecord, RawMetric};

/// One chart point. Positional index is the contract: index `i` refers to the
/// same photo in every metric's series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub photo_id: String,
    pub raw: RawMetric,
    pub timestamp: Option<OffsetDateTime>,
    pub display_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub key: MetricKey,
    pub points: Vec<SeriesPoint>,
}

impl MetricSeries {
    /// Percentage change from the previous point that carries a usable score.
    /// `None` at the start of the series or when either endpoint is missing.
    pub fn delta_percent(&self, index: usize) -> Option<f64> {
        let current = score_at(&self.points, index)?;
        let previous = self.points[..index]
            .iter()
            .rev()
            .find_map(|point| usable_score(&point.raw))?;
        if previous == 0.0 {
            return None;
        }
        Some((current - previous) / previous * 100.0)
    }
}

/// Everything the trends page needs: one series per metric in catalog order,
/// plus the axis timestamps for photos that had a resolvable capture time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    pub series: Vec<MetricSeries>,
    pub timestamps: Vec<OffsetDateTime>,
}

impl SeriesSet {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn len(&self) -> usize {
        self.series.first().map(|s| s.points.len()).unwrap_or(0)
    }

    pub fn series_for(&self, key: MetricKey) -> Option<&MetricSeries> {
        self.series.iter().find(|series| series.key == key)
    }
}

/// Fan an ordered photo list out into one series per metric.
///
/// The input is assumed pre-sorted oldest→newest and is never re-sorted or
/// mutated. Every series has exactly `photos.len()` points: a photo with an
/// unparseable timestamp keeps its positional slot (it only drops out of the
/// axis `timestamps`), and an absent metric becomes a `Missing` point. That
/// alignment is what lets one selected index drive every chart row at once.
pub fn build_series(photos: &[PhotoRecord]) -> SeriesSet {
    if photos.is_empty() {
        return SeriesSet::default();
    }

    // Parse and format each capture time once per photo, not once per metric.
    let stamps: Vec<Option<OffsetDateTime>> =
        photos.iter().map(|photo| photo.capture_time()).collect();
    let display_dates: Vec<String> = stamps
        .iter()
        .map(|stamp| stamp.map(format_display_date).unwrap_or_else(|| "—".into()))
        .collect();

    let timestamps: Vec<OffsetDateTime> = stamps.iter().filter_map(|stamp| *stamp).collect();
    if timestamps.is_empty() {
        tracing::debug!(
            photos = photos.len(),
            "no photo in the history carries a resolvable timestamp"
        );
    }

    let series = MetricKey::ALL
        .iter()
        .map(|&key| MetricSeries {
            key,
            points: photos
                .iter()
                .enumerate()
                .map(|(index, photo)| SeriesPoint {
                    photo_id: photo.id.clone(),
                    raw: photo.metric(key),
                    timestamp: stamps[index],
                    display_date: display_dates[index].clone(),
                })
                .collect(),
        })
        .collect();

    SeriesSet { series, timestamps }
}

/// `"Mar 2, 2035, 3:45 PM"` — the label attached to every metric's point for
/// a given photo index.
pub fn format_display_date(stamp: OffsetDateTime) -> String {
    stamp
        .format(&format_description!(
            "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
        ))
        .unwrap_or_else(|_| "—".to_string())
}

fn score_at(points: &[SeriesPoint], index: usize) -> Option<f64> {
    points.get(index).and_then(|point| usable_score(&point.raw))
}

fn usable_score(raw: &RawMetric) -> Option<f64> {
    match raw {
        RawMetric::Score(value) if value.is_finite() && *value != 0.0 => Some(*value),
        _ => None,
    }
}
