mod chart_row;
pub use chart_row::MetricTrendRow;
pub use chart_row::{END_PADDING, ITEM_WIDTH, VIEWPORT_WIDTH};

mod timeline;
pub use timeline::TimelineStrip;

mod summary;
pub use summary::TrendsSummary;

mod utils;
pub(crate) use utils::*;

use crate::core::photo::PhotoRecord;
use crate::core::series::{build_series, SeriesSet};

/// Shared state for the trends view: the photo history handed over by the
/// retrieval layer, or a load error to surface instead.
#[derive(Debug, Clone, Default)]
pub struct TrendsState {
    pub photos: Vec<PhotoRecord>,
    pub error: Option<String>,
}

impl TrendsState {
    pub fn from_photos(photos: Vec<PhotoRecord>) -> Self {
        Self {
            photos,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            photos: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn series(&self) -> SeriesSet {
        build_series(&self.photos)
    }
}
