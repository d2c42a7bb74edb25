//! Facade crate for the Wayfare destination health and route risk engine.
//!
//! This crate re-exports the domain types, the scoring calculators and the
//! planner. The file-backed observation source and its deadline adapter are
//! available behind the `observations` feature.
//!
//! # Examples
//! ```
//! use wayfare::{HealthScoreCalculator, SurfaceMetrics, WeatherSnapshot};
//!
//! let result = HealthScoreCalculator::new()
//!     .compute(&SurfaceMetrics::default(), &WeatherSnapshot::default());
//! assert!((result.score - 57.5).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]

pub use wayfare_core::{
    BoundingBox, CoordinateError, EARTH_RADIUS_KM, FeasibilityVerdict, HealthScoreResult,
    ImageryMode, LatLng, PositioningFix, PositioningSource, RiskLevel, RouteSegment,
    SafetyAssessment, SafetyRating, SourceError, SurfaceImagerySource, SurfaceMetrics,
    SurfaceReading, TravelMode, WeatherSnapshot, WeatherSource, haversine_km, interpolate,
};

pub use wayfare_scorer::{
    HealthScoreCalculator, HealthWeights, SafetyPenalties, SafetyRatingCalculator,
    UV_EXTREME_THRESHOLD, WeatherDefaults, WeightsError,
};

pub use wayfare_planner::{
    Alert, AlertCategory, AlertPriority, AnalysisError, AnalysisResult, AnalyzerConfig,
    DestinationAnalyzer, ModeSpeeds, PlannerConfig, RecommendationThresholds, Recommendations,
    RiskPoints, RoutePlanner, RouteReport, RouteRiskAggregator, RouteSegmenter,
    SegmentationConfig,
};

#[cfg(feature = "observations")]
pub use wayfare_data::{
    Deadline, ObservationFile, ObservationGrid, ObservationGridError, ObservationSample,
    SourceTimeouts,
};

#[cfg(feature = "test-support")]
pub use wayfare_core::test_support;
