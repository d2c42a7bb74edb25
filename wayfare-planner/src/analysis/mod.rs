//! Per-coordinate destination analysis.
//!
//! [`DestinationAnalyzer`] queries the three data sources, scores the
//! readings and derives recommendations. [`DestinationAnalyzer::try_analyze`]
//! surfaces the first source failure; [`DestinationAnalyzer::analyze`]
//! replaces it with the fallback record so callers always get a structurally
//! complete answer.

mod recommend;
mod result;

pub use recommend::{
    Alert, AlertCategory, AlertPriority, Observation, RecommendationThresholds, Recommendations,
};
pub use result::AnalysisResult;

use serde::{Deserialize, Serialize};
use wayfare_core::{ImageryMode, LatLng, PositioningSource, SurfaceImagerySource, WeatherSource};
use wayfare_scorer::{
    HealthScoreCalculator, HealthWeights, SafetyPenalties, SafetyRatingCalculator, WeatherDefaults,
    WeightsError,
};

use crate::AnalysisError;

/// Configuration for [`DestinationAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Health model weights.
    pub weights: HealthWeights,
    /// Values assumed for missing weather fields.
    pub weather_defaults: WeatherDefaults,
    /// Safety model constants.
    pub penalties: SafetyPenalties,
    /// Recommendation rule thresholds.
    pub thresholds: RecommendationThresholds,
}

impl AnalyzerConfig {
    /// Validate the health weights and safety penalties and return a copy.
    ///
    /// # Errors
    /// Returns the first [`WeightsError`] raised by either table.
    pub fn validate(self) -> Result<Self, WeightsError> {
        self.weights.validate()?;
        self.penalties.validate()?;
        Ok(self)
    }
}

/// Combines positioning, imagery and weather into one [`AnalysisResult`].
///
/// The analyzer is generic over its data sources so tests can inject stubs
/// and deployments can wrap real clients in timeouts.
///
/// # Examples
///
/// ```
/// use wayfare_core::test_support::{StubImagery, StubPositioning, StubWeather};
/// use wayfare_core::{LatLng, SafetyRating, SurfaceMetrics};
/// use wayfare_planner::DestinationAnalyzer;
///
/// let analyzer = DestinationAnalyzer::new(
///     StubPositioning::with_accuracy(2.0),
///     StubImagery::with_metrics(SurfaceMetrics::new(0.75, 0.1, 0.05)),
///     StubWeather::empty(),
/// );
/// let result = analyzer.analyze(LatLng { lat: 51.5, lng: -0.12 });
/// assert_eq!(result.safety.rating, SafetyRating::High);
/// assert!(result.error.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DestinationAnalyzer<P, I, W>
where
    P: PositioningSource,
    I: SurfaceImagerySource,
    W: WeatherSource,
{
    positioning: P,
    imagery: I,
    weather: W,
    health: HealthScoreCalculator,
    safety: SafetyRatingCalculator,
    thresholds: RecommendationThresholds,
}

impl<P, I, W> DestinationAnalyzer<P, I, W>
where
    P: PositioningSource,
    I: SurfaceImagerySource,
    W: WeatherSource,
{
    /// Construct an analyzer using default configuration.
    #[must_use]
    pub fn new(positioning: P, imagery: I, weather: W) -> Self {
        Self::assemble(positioning, imagery, weather, AnalyzerConfig::default())
    }

    /// Construct an analyzer with explicit configuration.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a health weight or safety constant is
    /// non-finite, or the safety thresholds are out of order.
    pub fn with_config(
        positioning: P,
        imagery: I,
        weather: W,
        config: AnalyzerConfig,
    ) -> Result<Self, WeightsError> {
        let validated = config.validate()?;
        Ok(Self::assemble(positioning, imagery, weather, validated))
    }

    fn assemble(positioning: P, imagery: I, weather: W, config: AnalyzerConfig) -> Self {
        Self {
            positioning,
            imagery,
            weather,
            health: HealthScoreCalculator::new()
                .with_weights(config.weights)
                .with_defaults(config.weather_defaults),
            safety: SafetyRatingCalculator::new().with_penalties(config.penalties),
            thresholds: config.thresholds,
        }
    }

    /// Recommendation thresholds in use.
    #[must_use]
    pub const fn thresholds(&self) -> &RecommendationThresholds {
        &self.thresholds
    }

    /// Analyse `at`, failing on the first data-source error.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Source`] when positioning, imagery or weather
    /// could not be fetched.
    pub fn try_analyze(&self, at: LatLng) -> Result<AnalysisResult, AnalysisError> {
        let wrap = |source| AnalysisError::source_at(at, source);
        let fix = self.positioning.get_accuracy(at).map_err(wrap)?;
        let reading = self
            .imagery
            .get_indices(at, ImageryMode::Composite)
            .map_err(wrap)?;
        let weather = self.weather.get_snapshot(at).map_err(wrap)?;

        let health = self.health.compute(&reading.metrics, &weather);
        let safety = self.safety.assess(fix.accuracy_m, &reading.metrics);
        let recommendations = Recommendations::derive(
            &Observation {
                health: &health,
                safety: &safety,
                weather: &weather,
                surface: Some(&reading.metrics),
                positioning: Some(&fix),
            },
            &self.thresholds,
        );

        Ok(AnalysisResult {
            location: at,
            health,
            safety,
            weather,
            positioning: Some(fix),
            surface: Some(reading),
            recommendations,
            error: None,
        })
    }

    /// Analyse `at`, substituting the fallback record on failure.
    #[must_use]
    pub fn analyze(&self, at: LatLng) -> AnalysisResult {
        self.try_analyze(at).unwrap_or_else(|error| {
            log::warn!("destination analysis fell back to defaults: {error}");
            AnalysisResult::fallback(at, &error, &self.thresholds)
        })
    }
}
