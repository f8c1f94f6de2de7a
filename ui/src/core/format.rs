//! Formatting helpers for presenting metric values.

/// Whole-number score display; placeholders render as a dash.
pub fn format_score(value: f64, is_placeholder: bool) -> String {
    if is_placeholder || !value.is_finite() {
        "—".to_string()
    } else {
        format!("{value:.0}")
    }
}

/// Signed percentage delta, e.g. `+12.5%` / `-3.1%`.
pub fn format_delta(value: f64) -> String {
    format!("{value:+.1}%")
}

pub fn format_age(value: f64) -> String {
    format!("{value:.0} yrs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_and_deltas_format() {
        assert_eq!(format_score(64.4, false), "64");
        assert_eq!(format_score(50.0, true), "—");
        assert_eq!(format_delta(12.53), "+12.5%");
        assert_eq!(format_delta(-3.07), "-3.1%");
    }
}
