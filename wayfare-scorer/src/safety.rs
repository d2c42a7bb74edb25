//! Penalty-based safety rating.

use serde::{Deserialize, Serialize};
use wayfare_core::{SafetyAssessment, SafetyRating, SurfaceMetrics};

use crate::{WeightsError, finite_or};

/// Constants of the safety model.
///
/// Each penalty applies only past its threshold and grows linearly with the
/// excess. The GPS penalty is additionally capped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyPenalties {
    /// Accuracy in metres below which positioning costs nothing.
    pub gps_threshold_m: f64,
    /// Points lost per metre of accuracy past the threshold.
    pub gps_per_metre: f64,
    /// Largest GPS penalty.
    pub gps_cap: f64,
    /// Water index below which water costs nothing.
    pub water_threshold: f64,
    /// Points per unit of water index past the threshold.
    pub water_factor: f64,
    /// Snow index below which snow costs nothing.
    pub snow_threshold: f64,
    /// Points per unit of snow index past the threshold.
    pub snow_factor: f64,
    /// Vegetation index above which bare ground costs nothing.
    pub vegetation_threshold: f64,
    /// Points per unit of vegetation shortfall.
    pub vegetation_factor: f64,
    /// Lowest score rated [`SafetyRating::High`].
    pub high_threshold: f64,
    /// Lowest score rated [`SafetyRating::Medium`].
    pub medium_threshold: f64,
}

impl Default for SafetyPenalties {
    fn default() -> Self {
        Self {
            gps_threshold_m: 5.0,
            gps_per_metre: 3.0,
            gps_cap: 30.0,
            water_threshold: 0.2,
            water_factor: 100.0,
            snow_threshold: 0.1,
            snow_factor: 80.0,
            vegetation_threshold: 0.3,
            vegetation_factor: 50.0,
            high_threshold: 70.0,
            medium_threshold: 40.0,
        }
    }
}

impl SafetyPenalties {
    /// Validate the constants and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonFinite`] for a non-finite constant and
    /// [`WeightsError::UnorderedThresholds`] when the medium threshold
    /// exceeds the high threshold.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let fields = [
            ("gps_threshold_m", self.gps_threshold_m),
            ("gps_per_metre", self.gps_per_metre),
            ("gps_cap", self.gps_cap),
            ("water_threshold", self.water_threshold),
            ("water_factor", self.water_factor),
            ("snow_threshold", self.snow_threshold),
            ("snow_factor", self.snow_factor),
            ("vegetation_threshold", self.vegetation_threshold),
            ("vegetation_factor", self.vegetation_factor),
            ("high_threshold", self.high_threshold),
            ("medium_threshold", self.medium_threshold),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(WeightsError::NonFinite { field });
        }
        if self.medium_threshold > self.high_threshold {
            return Err(WeightsError::UnorderedThresholds);
        }
        Ok(self)
    }

    #[expect(clippy::float_arithmetic, reason = "penalties scale the excess")]
    fn gps(&self, accuracy_m: f64) -> f64 {
        if !accuracy_m.is_finite() {
            return self.gps_cap;
        }
        if accuracy_m > self.gps_threshold_m {
            ((accuracy_m - self.gps_threshold_m) * self.gps_per_metre).min(self.gps_cap)
        } else {
            0.0
        }
    }

    /// Non-finite indices count as `0`, matching the health model.
    #[expect(clippy::float_arithmetic, reason = "penalties scale the excess")]
    fn surface(&self, metrics: &SurfaceMetrics) -> f64 {
        let water = finite_or(metrics.water_index, 0.0);
        let snow = finite_or(metrics.snow_index, 0.0);
        let vegetation = finite_or(metrics.vegetation_index, 0.0);
        let mut penalty = 0.0;
        if water > self.water_threshold {
            penalty += (water - self.water_threshold) * self.water_factor;
        }
        if snow > self.snow_threshold {
            penalty += (snow - self.snow_threshold) * self.snow_factor;
        }
        if vegetation < self.vegetation_threshold {
            penalty += (self.vegetation_threshold - vegetation) * self.vegetation_factor;
        }
        penalty
    }
}

/// Rates the physical safety of a location.
///
/// # Examples
///
/// ```
/// use wayfare_core::{SafetyRating, SurfaceMetrics};
/// use wayfare_scorer::SafetyRatingCalculator;
///
/// let calculator = SafetyRatingCalculator::new();
/// let flooded = SurfaceMetrics::new(0.1, 0.5, 0.3);
/// let assessment = calculator.assess(20.0, &flooded);
/// assert!((assessment.score - 14.0).abs() < 1e-9);
/// assert_eq!(assessment.rating, SafetyRating::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafetyRatingCalculator {
    penalties: SafetyPenalties,
}

impl SafetyRatingCalculator {
    /// Create a calculator with the default penalties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the penalty constants.
    #[must_use]
    pub const fn with_penalties(mut self, penalties: SafetyPenalties) -> Self {
        self.penalties = penalties;
        self
    }

    /// Penalty constants in use.
    #[must_use]
    pub const fn penalties(&self) -> &SafetyPenalties {
        &self.penalties
    }

    /// Score and rate a location from its positioning accuracy and surface.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "penalties reduce a perfect score")]
    pub fn assess(&self, accuracy_m: f64, metrics: &SurfaceMetrics) -> SafetyAssessment {
        let penalty = self.penalties.gps(accuracy_m) + self.penalties.surface(metrics);
        let score = (100.0 - penalty).clamp(0.0, 100.0);
        let score = if score.is_nan() { 0.0 } else { score };
        SafetyAssessment {
            score,
            rating: self.rating_for(score),
        }
    }

    /// Rate a location; see [`Self::assess`] for the continuous score.
    #[must_use]
    pub fn compute(&self, accuracy_m: f64, metrics: &SurfaceMetrics) -> SafetyRating {
        self.assess(accuracy_m, metrics).rating
    }

    /// Bucket a score into a rating.
    #[must_use]
    pub fn rating_for(&self, score: f64) -> SafetyRating {
        if score >= self.penalties.high_threshold {
            SafetyRating::High
        } else if score >= self.penalties.medium_threshold {
            SafetyRating::Medium
        } else {
            SafetyRating::Low
        }
    }
}
