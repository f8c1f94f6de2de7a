use dioxus::prelude::*;

/// Shared date axis under the chart rows. One label per photo, aligned to
/// the same index space as every metric row; tapping a label selects that
/// photo everywhere.
#[component]
pub fn TimelineStrip(
    labels: Vec<String>,
    selected: Option<usize>,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "timeline-strip",
            for (index, label) in labels.iter().enumerate() {
                button {
                    r#type: "button",
                    key: "{index}",
                    class: format!(
                        "timeline-strip__label {}",
                        if selected == Some(index) { "timeline-strip__label--selected" } else { "" }
                    ),
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}
