//! The closed set of skin metrics the analysis service reports.

/// One skin metric tracked across a photo history. The variants mirror the
/// upstream analysis payload keys; nothing outside this set is charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    Acne,
    Redness,
    Pigmentation,
    Pores,
    Hydration,
    Uniformness,
    EyeBags,
    Lines,
    PerceivedAge,
    EyeAge,
    SkinType,
}

/// How a metric's raw value is interpreted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Ordinary `[0, 100]` score colored by severity band.
    Score,
    /// An age estimate colored by comparison against the subject's real age.
    AgeComparison,
    /// Categorical value plotted by ordinal, never severity-colored.
    Categorical,
}

impl MetricKey {
    /// Fixed chart-row order. Every series set fans out over exactly this list.
    pub const ALL: [MetricKey; 11] = [
        MetricKey::Acne,
        MetricKey::Redness,
        MetricKey::Pigmentation,
        MetricKey::Pores,
        MetricKey::Hydration,
        MetricKey::Uniformness,
        MetricKey::EyeBags,
        MetricKey::Lines,
        MetricKey::PerceivedAge,
        MetricKey::EyeAge,
        MetricKey::SkinType,
    ];

    /// Key as it appears in the upstream metrics payload.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::Acne => "acne",
            MetricKey::Redness => "redness",
            MetricKey::Pigmentation => "pigmentation",
            MetricKey::Pores => "pores",
            MetricKey::Hydration => "hydration",
            MetricKey::Uniformness => "uniformness",
            MetricKey::EyeBags => "eyeBags",
            MetricKey::Lines => "lines",
            MetricKey::PerceivedAge => "perceivedAge",
            MetricKey::EyeAge => "eyeAge",
            MetricKey::SkinType => "skinType",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Acne => "Acne",
            MetricKey::Redness => "Redness",
            MetricKey::Pigmentation => "Pigmentation",
            MetricKey::Pores => "Pores",
            MetricKey::Hydration => "Hydration",
            MetricKey::Uniformness => "Evenness",
            MetricKey::EyeBags => "Eye area",
            MetricKey::Lines => "Lines & wrinkles",
            MetricKey::PerceivedAge => "Perceived age",
            MetricKey::EyeAge => "Eye age",
            MetricKey::SkinType => "Skin type",
        }
    }

    pub fn kind(self) -> MetricKind {
        match self {
            MetricKey::PerceivedAge | MetricKey::EyeAge => MetricKind::AgeComparison,
            MetricKey::SkinType => MetricKind::Categorical,
            _ => MetricKind::Score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_have_unique_payload_names() {
        let mut seen: Vec<&str> = Vec::new();
        for key in MetricKey::ALL {
            let name = key.as_str();
            assert!(!seen.contains(&name), "duplicate payload key {name}");
            seen.push(name);
        }
    }

    #[test]
    fn kinds_partition_the_set() {
        assert_eq!(MetricKey::PerceivedAge.kind(), MetricKind::AgeComparison);
        assert_eq!(MetricKey::EyeAge.kind(), MetricKind::AgeComparison);
        assert_eq!(MetricKey::SkinType.kind(), MetricKind::Categorical);
        assert_eq!(MetricKey::Hydration.kind(), MetricKind::Score);
    }
}
