//! Health score output type.

use std::collections::BTreeMap;

/// A destination health score with its per-term breakdown.
///
/// `components` maps `<term>_contribution` keys to the term's contribution
/// scaled by 100 and rounded to two decimals. Dividing their sum by 100
/// recovers the raw score before normalisation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthScoreResult {
    /// Normalised score in `0.0..=100.0`; higher is healthier.
    pub score: f64,
    /// Per-term contributions keyed by `<term>_contribution`.
    pub components: BTreeMap<String, f64>,
}

impl HealthScoreResult {
    /// Score reported when the inputs could not be gathered.
    pub const FALLBACK_SCORE: f64 = 50.0;

    /// Result used when analysis failed: a neutral score and no breakdown.
    ///
    /// # Examples
    /// ```
    /// use wayfare_core::HealthScoreResult;
    ///
    /// let fallback = HealthScoreResult::fallback();
    /// assert_eq!(fallback.score, 50.0);
    /// assert!(fallback.components.is_empty());
    /// ```
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            score: Self::FALLBACK_SCORE,
            components: BTreeMap::new(),
        }
    }

    /// Sum of all contributions divided by 100, i.e. the raw model score.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "contributions are stored scaled by 100"
    )]
    pub fn raw_from_components(&self) -> f64 {
        self.components.values().sum::<f64>() / 100.0
    }
}
