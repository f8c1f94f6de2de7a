use dioxus::prelude::*;
use time::Date;

use crate::core::format;
use crate::core::series::SeriesSet;
use crate::trends::{best_improvement, latest_tier_counts};

/// Highlights card above the chart rows: history size, latest capture, tier
/// breakdown for the newest photo, and the strongest recent improvement.
#[component]
pub fn TrendsSummary(set: SeriesSet, birth_date: Option<Date>) -> Element {
    let photo_count = set.len();
    let latest_label = set
        .series
        .first()
        .and_then(|series| series.points.last())
        .map(|point| point.display_date.clone())
        .unwrap_or_default();

    let (good, fair, poor) = latest_tier_counts(&set, birth_date);
    let improvement = best_improvement(&set);

    let improvement_meta = if improvement.is_some() {
        "Biggest gain vs the previous reading"
    } else {
        "Deltas appear after two analyzed photos"
    };
    let improvement_label = improvement
        .map(|(key, delta)| format!("{} {}", key.label(), format::format_delta(delta)))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        section { class: "trends-card trends-summary",
            div { class: "trends-card__header",
                h2 { "Highlights" }
                if photo_count > 0 {
                    span { class: "trends-card__meta", "Latest capture {latest_label}" }
                }
            }

            if photo_count == 0 {
                p { class: "trends-card__placeholder",
                    "Capture your first photo to start building a trend history."
                }
            } else {
                div { class: "trends-highlights",
                    div { class: "trends-highlight",
                        span { class: "trends-highlight__label", "Photos" }
                        strong { class: "trends-highlight__value", "{photo_count}" }
                        span { class: "trends-highlight__meta", "analyzed captures" }
                    }
                    div { class: "trends-highlight",
                        span { class: "trends-highlight__label", "Latest check-in" }
                        strong { class: "trends-highlight__value", "{good} good" }
                        span { class: "trends-highlight__meta", "{fair} fair · {poor} poor" }
                    }
                    div { class: "trends-highlight",
                        span { class: "trends-highlight__label", "Trending up" }
                        strong { class: "trends-highlight__value", "{improvement_label}" }
                        span { class: "trends-highlight__meta", "{improvement_meta}" }
                    }
                }
            }
        }
    }
}
