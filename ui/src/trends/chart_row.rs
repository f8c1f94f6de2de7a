use dioxus::prelude::*;
use time::Date;

use crate::core::catalog::{MetricKey, MetricKind};
use crate::core::format;
use crate::core::photo::RawMetric;
use crate::core::score::{self, Tier};
use crate::core::series::MetricSeries;

/// Horizontal slot reserved per data point, in px. Matches the theme CSS.
pub const ITEM_WIDTH: f64 = 56.0;
/// Nominal scrollable viewport width used for centering targets.
pub const VIEWPORT_WIDTH: f64 = 320.0;
/// Extra room after the last point so it never hugs the edge.
pub const END_PADDING: f64 = 16.0;

/// One horizontally scrolling trend row for a single metric. The row applies
/// the scroll offset the coordinator computed for it; `force_sync` suppresses
/// the scroll animation for the one-time jump after a data load.
#[component]
pub fn MetricTrendRow(
    series: MetricSeries,
    birth_date: Option<Date>,
    selected: Option<usize>,
    scroll_offset: f64,
    force_sync: bool,
    on_select: EventHandler<usize>,
) -> Element {
    let key = series.key;

    let delta_label = selected
        .and_then(|index| series.delta_percent(index))
        .map(format::format_delta);

    let track_style = format!(
        "width: {:.0}px; transform: translateX(-{scroll_offset:.0}px); transition: {};",
        series.points.len() as f64 * ITEM_WIDTH + END_PADDING,
        if force_sync { "none" } else { "transform 0.25s ease" },
    );

    let points: Vec<PointEntry> = series
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let normalized = score::normalize(&point.raw, key, birth_date);
            let plotted = if key.kind() == MetricKind::Categorical {
                score::skin_type_ordinal(&point.raw) * 25.0
            } else {
                normalized.value
            };

            let value_label = match (key.kind(), &point.raw) {
                (MetricKind::Categorical, RawMetric::Category(label)) => label.clone(),
                (MetricKind::AgeComparison, _) if !normalized.is_placeholder => {
                    format::format_age(normalized.value)
                }
                _ => format::format_score(normalized.value, normalized.is_placeholder),
            };

            PointEntry {
                index,
                tier: normalized.tier,
                plotted,
                value_label,
                is_selected: selected == Some(index),
            }
        })
        .collect();

    rsx! {
        section { class: "trend-row",
            div { class: "trend-row__header",
                h3 { class: "trend-row__label", "{key.label()}" }
                if let Some(delta) = delta_label {
                    span { class: "trend-row__delta", "{delta}" }
                }
            }

            div { class: "trend-row__viewport",
                div { class: "trend-row__track", style: "{track_style}",
                    for entry in points.into_iter() {
                        {render_point(entry, on_select)}
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct PointEntry {
    index: usize,
    tier: Tier,
    plotted: f64,
    value_label: String,
    is_selected: bool,
}

fn render_point(entry: PointEntry, on_select: EventHandler<usize>) -> Element {
    let PointEntry {
        index,
        tier,
        plotted,
        value_label,
        is_selected,
    } = entry;

    let dot_style = format!(
        "bottom: {:.0}%; background: {};",
        plotted.clamp(0.0, 100.0),
        tier.color(),
    );

    rsx! {
        button {
            r#type: "button",
            key: "{index}",
            class: format!(
                "trend-point {} {}",
                tier.css_class(),
                if is_selected { "trend-point--selected" } else { "" }
            ),
            style: "width: {ITEM_WIDTH}px;",
            onclick: move |_| on_select.call(index),

            span { class: "trend-point__dot", style: "{dot_style}" }
            span { class: "trend-point__value", "{value_label}" }
        }
    }
}
