#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially
  the trends experience) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS
  relied upon by Rust components (charts, timeline, summary cards, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button--primary",
    ".navbar",
    ".navbar__link",
    // Trends cards
    ".trends-card",
    ".trends-card__placeholder",
    ".trends-highlight",
    // Chart rows
    ".trend-row",
    ".trend-row__viewport",
    ".trend-row__track",
    ".trend-point",
    ".trend-point--selected",
    ".trend-point--poor",
    ".trend-point--fair",
    ".trend-point--good",
    ".trend-point--nodata",
    // Timeline
    ".timeline-strip",
    ".timeline-strip__label--selected",
];

#[test]
fn theme_contains_all_required_selectors() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing required theme selectors: {missing:?}"
    );
}
