//! Discrete ratings produced by the scoring pipeline.
//!
//! The two axes point in opposite directions and are kept as separate types
//! so they cannot be confused:
//!
//! - [`SafetyRating`]: `High` is the **safest** value.
//! - [`RiskLevel`]: `Low` is the **safest** value.
//!
//! Both serialize as the upper-case literals (`"LOW"`, `"MEDIUM"`, ...)
//! because downstream consumers branch on those strings.

/// Safety of a single location. `High` means low risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum SafetyRating {
    /// Hazardous location; least safe.
    Low,
    /// Moderate conditions. Also the conservative default when data is missing.
    Medium,
    /// Benign location; safest.
    High,
}

impl SafetyRating {
    /// Return the rating as its upper-case literal.
    ///
    /// # Examples
    /// ```
    /// use wayfare_core::SafetyRating;
    ///
    /// assert_eq!(SafetyRating::High.as_str(), "HIGH");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl std::fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A continuous safety score together with the rating derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyAssessment {
    /// Score in `0.0..=100.0`; higher is safer.
    pub score: f64,
    /// Rating bucket for `score`.
    pub rating: SafetyRating,
}

impl SafetyAssessment {
    /// Assessment used when the inputs could not be gathered.
    pub const FALLBACK: Self = Self {
        score: 50.0,
        rating: SafetyRating::Medium,
    };
}

/// Risk of a location or a whole trip. `Low` means safest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum RiskLevel {
    /// Little accumulated risk; safest.
    Low,
    /// Some risk factors present.
    Medium,
    /// Substantial risk; only motor travel is considered feasible.
    High,
    /// Travel is not recommended.
    Critical,
}

impl RiskLevel {
    /// Return the level as its upper-case literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn safety_orders_from_least_to_most_safe() {
        assert!(SafetyRating::Low < SafetyRating::Medium);
        assert!(SafetyRating::Medium < SafetyRating::High);
    }

    #[rstest]
    fn risk_orders_from_safest_to_most_dangerous() {
        assert!(RiskLevel::Low < RiskLevel::Critical);
        assert_eq!(RiskLevel::Critical.to_string(), "CRITICAL");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(SafetyRating::Low, "\"LOW\"")]
    #[case(SafetyRating::Medium, "\"MEDIUM\"")]
    #[case(SafetyRating::High, "\"HIGH\"")]
    fn safety_serializes_as_literal(#[case] rating: SafetyRating, #[case] expected: &str) {
        let json = serde_json::to_string(&rating).expect("serialize rating");
        assert_eq!(json, expected);
    }
}
