//! The unified per-coordinate analysis record.

use serde::{Deserialize, Serialize};
use wayfare_core::{
    HealthScoreResult, LatLng, PositioningFix, SafetyAssessment, SafetyRating, SurfaceReading,
    WeatherSnapshot,
};

use super::recommend::{Observation, RecommendationThresholds, Recommendations};
use crate::AnalysisError;

/// Everything known about one coordinate.
///
/// A record with `error` set is the fallback produced when a data source
/// failed: neutral scores, an empty weather snapshot and no positioning or
/// surface readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Analysed coordinate.
    pub location: LatLng,
    /// Destination health score.
    pub health: HealthScoreResult,
    /// Safety score and rating.
    pub safety: SafetyAssessment,
    /// Weather snapshot used for scoring.
    pub weather: WeatherSnapshot,
    /// Positioning fix, absent in the fallback record.
    pub positioning: Option<PositioningFix>,
    /// Imagery reading, absent in the fallback record.
    pub surface: Option<SurfaceReading>,
    /// Advice derived from the readings.
    pub recommendations: Recommendations,
    /// Failure message, present only in the fallback record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Build the fallback record for a failed analysis at `location`.
    #[must_use]
    pub fn fallback(
        location: LatLng,
        error: &AnalysisError,
        thresholds: &RecommendationThresholds,
    ) -> Self {
        let health = HealthScoreResult::fallback();
        let safety = SafetyAssessment::FALLBACK;
        let weather = WeatherSnapshot::default();
        let recommendations = Recommendations::derive(
            &Observation {
                health: &health,
                safety: &safety,
                weather: &weather,
                surface: None,
                positioning: None,
            },
            thresholds,
        );
        Self {
            location,
            health,
            safety,
            weather,
            positioning: None,
            surface: None,
            recommendations,
            error: Some(error.to_string()),
        }
    }

    /// Report whether this is a fallback record.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.error.is_some()
    }

    /// Health score in `0.0..=100.0`.
    #[must_use]
    pub const fn health_score(&self) -> f64 {
        self.health.score
    }

    /// Safety rating bucket.
    #[must_use]
    pub const fn safety_rating(&self) -> SafetyRating {
        self.safety.rating
    }
}
