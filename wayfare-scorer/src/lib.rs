//! Scoring models for the Wayfare engine.
//!
//! The crate provides two pure calculators:
//! - [`HealthScoreCalculator`] blends surface indices and a weather snapshot
//!   into a `0..=100` destination health score with a per-term breakdown.
//! - [`SafetyRatingCalculator`] subtracts penalties for poor positioning,
//!   water, snow and bare ground from a perfect score and buckets the result
//!   into a [`SafetyRating`](wayfare_core::SafetyRating).
//!
//! Both calculators hold only their configuration, so calling them twice
//! with the same inputs always yields the same output.
//!
//! # Examples
//!
//! ```
//! use wayfare_core::{SafetyRating, SurfaceMetrics, WeatherSnapshot};
//! use wayfare_scorer::{HealthScoreCalculator, SafetyRatingCalculator};
//!
//! let metrics = SurfaceMetrics::new(1.0, 0.0, 0.0);
//! let health = HealthScoreCalculator::new().compute(&metrics, &WeatherSnapshot::default());
//! assert!((health.score - 82.5).abs() < 1e-9);
//!
//! let rating = SafetyRatingCalculator::new().compute(2.0, &metrics);
//! assert_eq!(rating, SafetyRating::High);
//! ```

#![forbid(unsafe_code)]

mod error;
mod health;
mod safety;

pub use error::WeightsError;
pub use health::{HealthScoreCalculator, HealthWeights, UV_EXTREME_THRESHOLD, WeatherDefaults};
pub use safety::{SafetyPenalties, SafetyRatingCalculator};

/// Round half away from zero to two decimal places.
///
/// # Examples
/// ```
/// assert_eq!(wayfare_scorer::round2(111.194_93), 111.19);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to cents scales by 100 and back"
)]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Replace non-finite values with `fallback`.
pub(crate) const fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
