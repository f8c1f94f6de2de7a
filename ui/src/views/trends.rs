use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::catalog::MetricKey;
use crate::core::sample;
use crate::core::selection::{ChartLayout, ForceSyncTicket, SelectionCoordinator};
use crate::core::{platform, timing};
use crate::trends::{
    format_axis_label, MetricTrendRow, TimelineStrip, TrendsState, TrendsSummary, END_PADDING,
    ITEM_WIDTH, VIEWPORT_WIDTH,
};

/// One frame-ish pause so chart rows finish a layout pass before the initial
/// animation-free jump to the newest photo.
const LAYOUT_SETTLE_MS: u64 = 16;

#[component]
pub fn Trends() -> Element {
    // Demo history and profile until the capture/account flows hand over
    // real records; the rest of the page is wired as if they existed.
    let trends = use_signal(|| TrendsState::from_photos(sample::demo_photos()));
    let coordinator = use_signal(SelectionCoordinator::default);
    let birth_date = use_signal(|| Some(time::macros::date!(2004 - 05 - 12)));

    let series_set = use_memo(move || trends().series());

    let sender_slot: Rc<RefCell<Option<UnboundedSender<TrendEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let coordinator_ref = coordinator.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<TrendEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut coordinator_signal = coordinator_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        TrendEvent::DatasetLoaded { len } => {
                            let epoch = coordinator_signal.with_mut(|coordinator| {
                                coordinator.load_dataset(len);
                                coordinator.epoch()
                            });
                            queue_auto_select(sender_slot.clone(), epoch);
                        }
                        TrendEvent::AutoSelect { epoch } => {
                            let ticket = coordinator_signal.with_mut(|coordinator| {
                                if coordinator.epoch() == epoch {
                                    coordinator.auto_select_most_recent()
                                } else {
                                    None
                                }
                            });
                            if let Some(ticket) = ticket {
                                queue_force_sync_clear(sender_slot.clone(), ticket);
                            }
                        }
                        TrendEvent::Select { index } => {
                            coordinator_signal.with_mut(|coordinator| {
                                coordinator.select(index);
                            });
                        }
                        TrendEvent::JumpToLatest => {
                            let ticket = coordinator_signal
                                .with_mut(|coordinator| coordinator.jump_to_latest());
                            if let Some(ticket) = ticket {
                                queue_force_sync_clear(sender_slot.clone(), ticket);
                            }
                        }
                        TrendEvent::ClearForceSync { ticket } => {
                            coordinator_signal.with_mut(|coordinator| {
                                coordinator.clear_force_sync(ticket);
                            });
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = {
        let coroutine = coroutine.clone();
        move |event: TrendEvent| {
            coroutine.send(event);
        }
    };

    // Reload the coordinator whenever the photo history changes shape.
    {
        let send_event = send_event.clone();
        use_effect(move || {
            let len = series_set().len();
            send_event(TrendEvent::DatasetLoaded { len });
        });
    }

    let set = series_set();
    let snapshot = coordinator();
    let selected = snapshot.selected();
    let force_sync = snapshot.force_sync();
    let birth = birth_date();
    let error_message = trends().error;

    let layouts: Vec<(MetricKey, ChartLayout)> = set
        .series
        .iter()
        .map(|series| {
            (
                series.key,
                ChartLayout {
                    item_width: ITEM_WIDTH,
                    viewport_width: VIEWPORT_WIDTH,
                    content_width: series.points.len() as f64 * ITEM_WIDTH + END_PADDING,
                },
            )
        })
        .collect();
    let offsets = snapshot.scroll_targets(&layouts);
    let offset_for = |key: MetricKey| {
        offsets
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, offset)| *offset)
            .unwrap_or(0.0)
    };

    // Compact per-index axis labels; a photo without a resolvable timestamp
    // keeps its slot with a dash so the index space stays aligned.
    let timeline_labels: Vec<String> = set
        .series
        .first()
        .map(|series| {
            series
                .points
                .iter()
                .map(|point| {
                    point
                        .timestamp
                        .map(format_axis_label)
                        .unwrap_or_else(|| "—".to_string())
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        section { class: "page page-trends",
            div { class: "page-trends__header",
                h1 { "Trends" }
                button {
                    r#type: "button",
                    class: "button--primary page-trends__jump",
                    disabled: set.is_empty(),
                    onclick: {
                        let send_event = send_event.clone();
                        move |_| send_event(TrendEvent::JumpToLatest)
                    },
                    "Jump to latest"
                }
            }

            TrendsSummary { set: set.clone(), birth_date: birth }

            if let Some(err) = error_message {
                div { class: "page-trends__error", "⚠️ {err}" }
            }

            if set.is_empty() {
                section { class: "trends-card",
                    p { class: "trends-card__placeholder",
                        "No analyzed photos yet. Trends appear after your first capture."
                    }
                }
            } else {
                div { class: "page-trends__rows",
                    for series in set.series.iter() {
                        MetricTrendRow {
                            key: "{series.key.as_str()}",
                            series: series.clone(),
                            birth_date: birth,
                            selected,
                            scroll_offset: offset_for(series.key),
                            force_sync,
                            on_select: {
                                let send_event = send_event.clone();
                                move |index| send_event(TrendEvent::Select { index })
                            },
                        }
                    }
                }

                TimelineStrip {
                    labels: timeline_labels,
                    selected,
                    on_select: {
                        let send_event = send_event.clone();
                        move |index| send_event(TrendEvent::Select { index })
                    },
                }
            }
        }
    }
}

fn queue_auto_select(sender_slot: Rc<RefCell<Option<UnboundedSender<TrendEvent>>>>, epoch: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(LAYOUT_SETTLE_MS).await;
            let _ = sender.unbounded_send(TrendEvent::AutoSelect { epoch });
        });
    }
}

fn queue_force_sync_clear(
    sender_slot: Rc<RefCell<Option<UnboundedSender<TrendEvent>>>>,
    ticket: ForceSyncTicket,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(ticket.clear_after_ms).await;
            let _ = sender.unbounded_send(TrendEvent::ClearForceSync { ticket });
        });
    }
}

#[derive(Debug, Clone, Copy)]
enum TrendEvent {
    DatasetLoaded { len: usize },
    AutoSelect { epoch: u64 },
    Select { index: usize },
    JumpToLatest,
    ClearForceSync { ticket: ForceSyncTicket },
}
