//! Destination health score.
//!
//! The model is a weighted sum of eight terms mapped from `[-1, 1]` onto
//! `[0, 100]`:
//!
//! ```text
//! raw   = veg*w_veg + water*w_water + snow*w_snow + precip*w_precip
//!       + (visibility/10)*w_vis + pm2_5*w_pm + uv_extreme*w_uv + night*w_night
//! score = clamp(round((raw + 1) * 50, 2), 0, 100)
//! ```
//!
//! Raw values outside `[-1, 1]` saturate at the bounds rather than being
//! rescaled. A single extreme input can therefore pin the score.

use serde::{Deserialize, Serialize};
use wayfare_core::{HealthScoreResult, SurfaceMetrics, WeatherSnapshot};

use crate::{WeightsError, finite_or, round2};

/// UV index above which the `uv_extreme` flag is raised.
pub const UV_EXTREME_THRESHOLD: f64 = 8.0;

/// Visibility that contributes a full `visibility_km` weight.
const VISIBILITY_REFERENCE_KM: f64 = 10.0;

/// Weights applied to each health term.
///
/// The defaults are the compatibility contract; change them only through
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthWeights {
    /// Weight of the vegetation index.
    pub vegetation_index: f64,
    /// Weight of the water index.
    pub water_index: f64,
    /// Weight of the snow index.
    pub snow_index: f64,
    /// Weight of precipitation in millimetres.
    pub precip_mm: f64,
    /// Weight of visibility, applied to `visibility_km / 10`.
    pub visibility_km: f64,
    /// Weight of PM2.5 concentration.
    pub air_quality_pm2_5: f64,
    /// Weight of the extreme-UV flag.
    pub uv_extreme: f64,
    /// Weight of the night-travel flag.
    pub night_travel: f64,
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            vegetation_index: 0.50,
            water_index: -0.30,
            snow_index: -0.20,
            precip_mm: -0.25,
            visibility_km: 0.15,
            air_quality_pm2_5: -0.10,
            uv_extreme: -0.10,
            night_travel: -0.10,
        }
    }
}

impl HealthWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonFinite`] naming the first non-finite weight.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let fields = [
            ("vegetation_index", self.vegetation_index),
            ("water_index", self.water_index),
            ("snow_index", self.snow_index),
            ("precip_mm", self.precip_mm),
            ("visibility_km", self.visibility_km),
            ("air_quality_pm2_5", self.air_quality_pm2_5),
            ("uv_extreme", self.uv_extreme),
            ("night_travel", self.night_travel),
        ];
        fields
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map_or(Ok(self), |&(field, _)| Err(WeightsError::NonFinite { field }))
    }
}

/// Values assumed for weather fields a snapshot leaves empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherDefaults {
    /// Assumed precipitation in millimetres.
    pub precip_mm: f64,
    /// Assumed visibility in kilometres.
    pub visibility_km: f64,
    /// Assumed PM2.5 concentration.
    pub air_quality_pm2_5: f64,
    /// Assumed UV index.
    pub uv: f64,
    /// Assumed daylight.
    pub is_day: bool,
}

impl Default for WeatherDefaults {
    fn default() -> Self {
        Self {
            precip_mm: 0.0,
            visibility_km: 10.0,
            air_quality_pm2_5: 0.0,
            uv: 0.0,
            is_day: true,
        }
    }
}

/// One weighted input of the model.
#[derive(Debug, Clone, Copy)]
struct Term {
    key: &'static str,
    value: f64,
    weight: f64,
}

impl Term {
    #[expect(clippy::float_arithmetic, reason = "a term is value times weight")]
    fn weighted(self) -> f64 {
        self.value * self.weight
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "contributions are reported scaled by 100"
    )]
    fn contribution(self) -> f64 {
        finite_or(round2(self.value * self.weight * 100.0), 0.0)
    }
}

/// Computes destination health scores.
///
/// # Examples
///
/// ```
/// use wayfare_core::{SurfaceMetrics, WeatherSnapshot};
/// use wayfare_scorer::HealthScoreCalculator;
///
/// let calculator = HealthScoreCalculator::new();
/// let result = calculator.compute(&SurfaceMetrics::default(), &WeatherSnapshot::default());
/// assert!((result.score - 57.5).abs() < 1e-9);
/// assert_eq!(result.components["visibility_km_contribution"], 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HealthScoreCalculator {
    weights: HealthWeights,
    defaults: WeatherDefaults,
}

impl HealthScoreCalculator {
    /// Create a calculator with the default weights and weather defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the weights.
    #[must_use]
    pub const fn with_weights(mut self, weights: HealthWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the values assumed for missing weather fields.
    #[must_use]
    pub const fn with_defaults(mut self, defaults: WeatherDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> &HealthWeights {
        &self.weights
    }

    /// Score `metrics` and `weather`.
    ///
    /// Never fails: absent or non-finite inputs fall back to the configured
    /// defaults and the score is always within `0.0..=100.0`.
    #[must_use]
    pub fn compute(&self, metrics: &SurfaceMetrics, weather: &WeatherSnapshot) -> HealthScoreResult {
        let terms = self.terms(metrics, weather);
        let raw = terms.iter().map(|term| term.weighted()).sum::<f64>();
        let score = normalise(raw);
        if !(-1.0..=1.0).contains(&raw) {
            log::debug!("raw health score {raw} saturated to {score}");
        }
        let components = terms
            .iter()
            .map(|term| (format!("{}_contribution", term.key), term.contribution()))
            .collect();
        HealthScoreResult { score, components }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "visibility is expressed relative to a 10 km reference"
    )]
    fn terms(&self, metrics: &SurfaceMetrics, weather: &WeatherSnapshot) -> [Term; 8] {
        let defaults = self.defaults;
        let w = self.weights;
        let reading = |value: Option<f64>, fallback: f64| finite_or(value.unwrap_or(fallback), fallback);

        let precip = reading(weather.precip_mm, defaults.precip_mm);
        let visibility = reading(weather.visibility_km, defaults.visibility_km);
        let pm2_5 = reading(weather.air_quality_pm2_5, defaults.air_quality_pm2_5);
        let uv = reading(weather.uv, defaults.uv);
        let is_day = weather.is_day.unwrap_or(defaults.is_day);

        let uv_extreme = if uv > UV_EXTREME_THRESHOLD { 1.0 } else { 0.0 };
        let night_travel = if is_day { 0.0 } else { 1.0 };

        [
            Term {
                key: "vegetation_index",
                value: finite_or(metrics.vegetation_index, 0.0),
                weight: w.vegetation_index,
            },
            Term {
                key: "water_index",
                value: finite_or(metrics.water_index, 0.0),
                weight: w.water_index,
            },
            Term {
                key: "snow_index",
                value: finite_or(metrics.snow_index, 0.0),
                weight: w.snow_index,
            },
            Term {
                key: "precip_mm",
                value: precip,
                weight: w.precip_mm,
            },
            Term {
                key: "visibility_km",
                value: visibility / VISIBILITY_REFERENCE_KM,
                weight: w.visibility_km,
            },
            Term {
                key: "air_quality_pm2_5",
                value: pm2_5,
                weight: w.air_quality_pm2_5,
            },
            Term {
                key: "uv_extreme",
                value: uv_extreme,
                weight: w.uv_extreme,
            },
            Term {
                key: "night_travel",
                value: night_travel,
                weight: w.night_travel,
            },
        ]
    }
}

/// Map a raw score from `[-1, 1]` onto `[0, 100]`, saturating outside.
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation is an affine map of the raw score"
)]
fn normalise(raw: f64) -> f64 {
    let scaled = round2((raw + 1.0) * 50.0);
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    #[fixture]
    fn calculator() -> HealthScoreCalculator {
        HealthScoreCalculator::new()
    }

    #[rstest]
    fn default_weights_match_contract() {
        let weights = HealthWeights::default();
        assert_eq!(weights.vegetation_index, 0.50);
        assert_eq!(weights.water_index, -0.30);
        assert_eq!(weights.snow_index, -0.20);
        assert_eq!(weights.precip_mm, -0.25);
        assert_eq!(weights.visibility_km, 0.15);
        assert_eq!(weights.air_quality_pm2_5, -0.10);
        assert_eq!(weights.uv_extreme, -0.10);
        assert_eq!(weights.night_travel, -0.10);
    }

    #[rstest]
    fn default_weather_matches_contract() {
        let defaults = WeatherDefaults::default();
        assert_eq!(defaults.precip_mm, 0.0);
        assert_eq!(defaults.visibility_km, 10.0);
        assert_eq!(defaults.air_quality_pm2_5, 0.0);
        assert_eq!(defaults.uv, 0.0);
        assert!(defaults.is_day);
    }

    #[rstest]
    fn empty_inputs_score_57_5(calculator: HealthScoreCalculator) {
        let result = calculator.compute(&SurfaceMetrics::default(), &WeatherSnapshot::default());
        assert!((result.score - 57.5).abs() < TOLERANCE, "got {}", result.score);
    }

    #[rstest]
    fn full_vegetation_scores_82_5(calculator: HealthScoreCalculator) {
        let weather = WeatherSnapshot {
            visibility_km: Some(10.0),
            ..WeatherSnapshot::default()
        };
        let result = calculator.compute(&SurfaceMetrics::new(1.0, 0.0, 0.0), &weather);
        assert!((result.score - 82.5).abs() < TOLERANCE, "got {}", result.score);
    }

    #[rstest]
    fn components_cover_all_terms(calculator: HealthScoreCalculator) {
        let result = calculator.compute(&SurfaceMetrics::default(), &WeatherSnapshot::default());
        let keys: Vec<&str> = result.components.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "air_quality_pm2_5_contribution",
                "night_travel_contribution",
                "precip_mm_contribution",
                "snow_index_contribution",
                "uv_extreme_contribution",
                "vegetation_index_contribution",
                "visibility_km_contribution",
                "water_index_contribution",
            ]
        );
    }

    #[rstest]
    fn night_and_extreme_uv_each_cost_ten_points(calculator: HealthScoreCalculator) {
        let weather = WeatherSnapshot {
            uv: Some(9.0),
            is_day: Some(false),
            ..WeatherSnapshot::default()
        };
        let result = calculator.compute(&SurfaceMetrics::default(), &weather);
        assert_eq!(result.components["uv_extreme_contribution"], -10.0);
        assert_eq!(result.components["night_travel_contribution"], -10.0);
        // raw = 0.15 - 0.1 - 0.1 = -0.05
        assert!((result.score - 47.5).abs() < TOLERANCE, "got {}", result.score);
    }

    #[rstest]
    fn uv_of_exactly_eight_is_not_extreme(calculator: HealthScoreCalculator) {
        let weather = WeatherSnapshot {
            uv: Some(8.0),
            ..WeatherSnapshot::default()
        };
        let result = calculator.compute(&SurfaceMetrics::default(), &weather);
        assert_eq!(result.components["uv_extreme_contribution"], 0.0);
    }

    #[rstest]
    #[case(WeatherSnapshot { precip_mm: Some(50.0), ..WeatherSnapshot::default() }, 0.0)]
    #[case(WeatherSnapshot { visibility_km: Some(500.0), ..WeatherSnapshot::default() }, 100.0)]
    fn extreme_inputs_saturate(
        calculator: HealthScoreCalculator,
        #[case] weather: WeatherSnapshot,
        #[case] expected: f64,
    ) {
        let result = calculator.compute(&SurfaceMetrics::default(), &weather);
        assert_eq!(result.score, expected);
    }

    #[rstest]
    fn contributions_are_not_clamped(calculator: HealthScoreCalculator) {
        let weather = WeatherSnapshot {
            precip_mm: Some(50.0),
            ..WeatherSnapshot::default()
        };
        let result = calculator.compute(&SurfaceMetrics::default(), &weather);
        assert_eq!(result.components["precip_mm_contribution"], -1250.0);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "reconstructs the documented formula")]
    fn components_reconstruct_score(calculator: HealthScoreCalculator) {
        let metrics = SurfaceMetrics::new(0.62, 0.18, 0.05);
        let weather = WeatherSnapshot {
            precip_mm: Some(0.4),
            visibility_km: Some(8.0),
            air_quality_pm2_5: Some(0.3),
            uv: Some(3.0),
            is_day: Some(true),
            ..WeatherSnapshot::default()
        };
        let result = calculator.compute(&metrics, &weather);
        let reconstructed = ((result.raw_from_components() + 1.0) * 50.0).clamp(0.0, 100.0);
        assert!(
            (reconstructed - result.score).abs() < 0.05,
            "{reconstructed} vs {}",
            result.score
        );
    }

    #[rstest]
    fn non_finite_inputs_use_defaults(calculator: HealthScoreCalculator) {
        let weather = WeatherSnapshot {
            visibility_km: Some(f64::NAN),
            precip_mm: Some(f64::INFINITY),
            ..WeatherSnapshot::default()
        };
        let metrics = SurfaceMetrics::new(f64::NAN, 0.0, 0.0);
        let result = calculator.compute(&metrics, &weather);
        assert!((result.score - 57.5).abs() < TOLERANCE, "got {}", result.score);
    }

    #[rstest]
    fn custom_weights_are_applied() {
        let weights = HealthWeights {
            vegetation_index: 1.0,
            visibility_km: 0.0,
            ..HealthWeights::default()
        };
        let calculator = HealthScoreCalculator::new().with_weights(weights);
        let result = calculator.compute(&SurfaceMetrics::new(0.5, 0.0, 0.0), &WeatherSnapshot::default());
        assert!((result.score - 75.0).abs() < TOLERANCE, "got {}", result.score);
    }

    #[rstest]
    fn validate_rejects_non_finite_weight() {
        let weights = HealthWeights {
            snow_index: f64::NAN,
            ..HealthWeights::default()
        };
        assert_eq!(
            weights.validate(),
            Err(WeightsError::NonFinite {
                field: "snow_index"
            })
        );
    }

    #[rstest]
    fn weights_deserialize_with_defaults() {
        let weights: HealthWeights =
            serde_json::from_str(r#"{"vegetation_index": 0.6}"#).expect("valid weights");
        assert_eq!(weights.vegetation_index, 0.6);
        assert_eq!(weights.water_index, -0.30);
    }

    #[rstest]
    fn compute_is_idempotent(calculator: HealthScoreCalculator) {
        let metrics = SurfaceMetrics::new(0.3, 0.4, 0.2);
        let weather = WeatherSnapshot {
            uv: Some(10.0),
            ..WeatherSnapshot::default()
        };
        assert_eq!(
            calculator.compute(&metrics, &weather),
            calculator.compute(&metrics, &weather)
        );
    }
}
