use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Lumiderm" }
            p { "Track how your skin changes over time, one photo at a time." }
            p {
                "Each analyzed capture scores eleven skin metrics. Lumiderm lines them up "
                "into trend charts so you can see what your routine is actually doing."
            }

            ul { class: "page-home__features",
                li { "Severity-colored trend rows for every metric" }
                li { "One tap selects the same photo across all charts" }
                li { "Age metrics compared against your real, calendar-aware age" }
            }
            p { class: "page-home__cta",
                "Open Trends to explore your history."
            }
        }
    }
}
