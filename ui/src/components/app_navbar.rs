use dioxus::prelude::*;

/// Shared application navbar. The shells own their `Route` enums, so they
/// pass their `Link` elements in as children.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    rsx! {
        header { class: "navbar",
            span { class: "navbar__brand", "Lumiderm" }
            nav { class: "navbar__links", {children} }
        }
    }
}
