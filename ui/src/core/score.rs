//! Turns raw metric values into rendering-ready scores and severity tiers.
//!
//! Policy notes
//! ------------
//! - A raw value of exactly `0` is treated as "no measurement", the same as
//!   an absent value. The analysis service never legitimately emits zero, so
//!   zero means a partially analyzed photo.
//! - Perceived-age and eye-age metrics are not colored by the `[0, 100]`
//!   severity bands; they compare against the subject's real, calendar-aware
//!   age when a birth date is on file, and stay neutral otherwise.
//! - Skin type is categorical and is only ever mapped to an ordinal plotting
//!   position, never a severity tier.

use time::{Date, OffsetDateTime};

use super::catalog::{MetricKey, MetricKind};
use super::photo::RawMetric;

/// Midpoint used to keep placeholder points on the trend line.
pub const PLACEHOLDER_VALUE: f64 = 50.0;

/// Severity bucket for a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Poor,
    Fair,
    Good,
    NoData,
}

impl Tier {
    pub fn color(self) -> &'static str {
        match self {
            Tier::Poor => "#e25563",
            Tier::Fair => "#f2b84b",
            Tier::Good => "#3ec28f",
            Tier::NoData => "#9aa3ad",
        }
    }

    /// CSS modifier for the chart point, e.g. `trend-point--good`.
    pub fn css_class(self) -> &'static str {
        match self {
            Tier::Poor => "trend-point--poor",
            Tier::Fair => "trend-point--fair",
            Tier::Good => "trend-point--good",
            Tier::NoData => "trend-point--nodata",
        }
    }
}

/// Rendering-ready transformation of one raw score. Recomputed per render,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedScore {
    pub value: f64,
    pub tier: Tier,
    pub is_placeholder: bool,
}

impl NormalizedScore {
    fn placeholder() -> Self {
        Self {
            value: PLACEHOLDER_VALUE,
            tier: Tier::NoData,
            is_placeholder: true,
        }
    }
}

/// Normalize against today's date. See [`normalize_at`] for the pure form.
pub fn normalize(raw: &RawMetric, key: MetricKey, birth_date: Option<Date>) -> NormalizedScore {
    normalize_at(raw, key, birth_date, OffsetDateTime::now_utc().date())
}

/// Pure normalization with an explicit "today" for age arithmetic.
pub fn normalize_at(
    raw: &RawMetric,
    key: MetricKey,
    birth_date: Option<Date>,
    today: Date,
) -> NormalizedScore {
    let value = match raw {
        RawMetric::Score(value) if value.is_finite() && *value != 0.0 => *value,
        _ => return NormalizedScore::placeholder(),
    };

    let tier = match key.kind() {
        MetricKind::Score => severity_tier(value),
        MetricKind::AgeComparison => match birth_date {
            Some(birth) => age_tier(key, value - f64::from(age_on(birth, today))),
            None => Tier::NoData,
        },
        // Categorical values never reach here as finite non-zero scores in
        // practice; keep them neutral rather than inventing a severity.
        MetricKind::Categorical => Tier::NoData,
    };

    NormalizedScore {
        value,
        tier,
        is_placeholder: false,
    }
}

/// Plotting ordinal for the categorical skin-type metric. Unknown or missing
/// values sit at the `Normal` midpoint.
pub fn skin_type_ordinal(raw: &RawMetric) -> f64 {
    match raw {
        RawMetric::Category(label) => match label.as_str() {
            "Dry" => 1.0,
            "Normal" => 2.0,
            "Combinational" => 3.0,
            "Oily" => 4.0,
            _ => 2.0,
        },
        _ => 2.0,
    }
}

/// Whole years elapsed between `birth` and `today`, decrementing when the
/// birthday has not yet come around this year.
pub fn age_on(birth: Date, today: Date) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month() as u8, today.day()) < (birth.month() as u8, birth.day()) {
        years -= 1;
    }
    years
}

fn severity_tier(value: f64) -> Tier {
    if value <= 30.0 {
        Tier::Poor
    } else if value <= 70.0 {
        Tier::Fair
    } else {
        Tier::Good
    }
}

fn age_tier(key: MetricKey, difference: f64) -> Tier {
    match key {
        MetricKey::PerceivedAge => {
            if difference > 5.0 {
                Tier::Poor
            } else if difference > 0.0 {
                Tier::Fair
            } else {
                Tier::Good
            }
        }
        // Eye age bands differ at the upper edge: exactly five years older
        // already counts as poor.
        MetricKey::EyeAge => {
            if difference <= 0.0 {
                Tier::Good
            } else if difference < 5.0 {
                Tier::Fair
            } else {
                Tier::Poor
            }
        }
        _ => Tier::NoData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn missing_zero_and_nan_become_the_placeholder_midpoint() {
        for raw in [
            RawMetric::Missing,
            RawMetric::Score(0.0),
            RawMetric::Score(f64::NAN),
        ] {
            let normalized = normalize_at(
                &raw,
                MetricKey::Hydration,
                None,
                date!(2035 - 03 - 02),
            );
            assert!(normalized.is_placeholder);
            assert_eq!(normalized.value, PLACEHOLDER_VALUE);
            assert_eq!(normalized.tier, Tier::NoData);
        }
    }

    #[test]
    fn severity_bands_are_inclusive_on_the_lower_side() {
        let today = date!(2035 - 03 - 02);
        let tier = |v: f64| normalize_at(&RawMetric::Score(v), MetricKey::Acne, None, today).tier;
        assert_eq!(tier(30.0), Tier::Poor);
        assert_eq!(tier(30.1), Tier::Fair);
        assert_eq!(tier(70.0), Tier::Fair);
        assert_eq!(tier(71.0), Tier::Good);
    }

    #[test]
    fn perceived_age_compares_against_calendar_age() {
        let birth = date!(2005 - 01 - 15);
        let today = date!(2035 - 03 - 02); // actual age 30
        let tier = |estimate: f64| {
            normalize_at(
                &RawMetric::Score(estimate),
                MetricKey::PerceivedAge,
                Some(birth),
                today,
            )
            .tier
        };
        assert_eq!(tier(36.0), Tier::Poor);
        assert_eq!(tier(33.0), Tier::Fair);
        assert_eq!(tier(28.0), Tier::Good);
    }

    #[test]
    fn eye_age_bands_close_at_five_years() {
        let birth = date!(2005 - 01 - 15);
        let today = date!(2035 - 03 - 02);
        let tier = |estimate: f64| {
            normalize_at(
                &RawMetric::Score(estimate),
                MetricKey::EyeAge,
                Some(birth),
                today,
            )
            .tier
        };
        assert_eq!(tier(30.0), Tier::Good);
        assert_eq!(tier(33.0), Tier::Fair);
        assert_eq!(tier(35.0), Tier::Poor);
    }

    #[test]
    fn age_metrics_without_a_birth_date_stay_neutral() {
        let normalized = normalize_at(
            &RawMetric::Score(36.0),
            MetricKey::PerceivedAge,
            None,
            date!(2035 - 03 - 02),
        );
        assert_eq!(normalized.tier, Tier::NoData);
        assert!(!normalized.is_placeholder);
        assert_eq!(normalized.value, 36.0);
    }

    #[test]
    fn age_arithmetic_respects_the_birthday() {
        let birth = date!(1990 - 06 - 15);
        assert_eq!(age_on(birth, date!(2035 - 06 - 14)), 44);
        assert_eq!(age_on(birth, date!(2035 - 06 - 15)), 45);
        assert_eq!(age_on(birth, date!(2035 - 06 - 16)), 45);
    }

    #[test]
    fn skin_type_ordinals_default_to_the_normal_midpoint() {
        assert_eq!(skin_type_ordinal(&RawMetric::Category("Dry".into())), 1.0);
        assert_eq!(skin_type_ordinal(&RawMetric::Category("Oily".into())), 4.0);
        assert_eq!(
            skin_type_ordinal(&RawMetric::Category("Sparkly".into())),
            2.0
        );
        assert_eq!(skin_type_ordinal(&RawMetric::Missing), 2.0);
    }
}
