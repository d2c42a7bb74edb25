//! End-to-end route planning.

use serde::{Deserialize, Serialize};
use wayfare_core::{
    FeasibilityVerdict, LatLng, PositioningSource, RouteSegment, SurfaceImagerySource, TravelMode,
    WeatherSource, haversine_km,
};
use wayfare_scorer::round2;

use crate::{
    AnalysisResult, DestinationAnalyzer, RiskPoints, RouteRiskAggregator, RouteSegmenter,
    SegmentationConfig,
};

/// Average travel speeds per mode, in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeSpeeds {
    /// Driving speed.
    pub driving_kmh: f64,
    /// Cycling speed.
    pub cycling_kmh: f64,
    /// Walking speed.
    pub walking_kmh: f64,
}

impl Default for ModeSpeeds {
    fn default() -> Self {
        Self {
            driving_kmh: 60.0,
            cycling_kmh: 15.0,
            walking_kmh: 5.0,
        }
    }
}

impl ModeSpeeds {
    /// Speed used for `mode`.
    #[must_use]
    pub const fn for_mode(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Driving => self.driving_kmh,
            TravelMode::Cycling => self.cycling_kmh,
            TravelMode::Walking => self.walking_kmh,
        }
    }

    /// Whole minutes needed to cover `distance_km` in `mode`.
    ///
    /// A non-positive or non-finite speed yields `0`.
    ///
    /// # Examples
    /// ```
    /// use wayfare_core::TravelMode;
    /// use wayfare_planner::ModeSpeeds;
    ///
    /// let speeds = ModeSpeeds::default();
    /// assert_eq!(speeds.duration_minutes(30.0, TravelMode::Cycling), 120.0);
    /// assert_eq!(speeds.duration_minutes(1.0, TravelMode::Driving), 1.0);
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "duration is distance over speed")]
    pub fn duration_minutes(&self, distance_km: f64, mode: TravelMode) -> f64 {
        let speed = self.for_mode(mode);
        if !(speed.is_finite() && speed > 0.0) {
            return 0.0;
        }
        (distance_km / speed * 60.0).round()
    }
}

/// Configuration for [`RoutePlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Waypoint spacing and parallelism.
    pub segmentation: SegmentationConfig,
    /// Risk model.
    pub risk: RiskPoints,
    /// Average speeds for duration estimates.
    pub speeds: ModeSpeeds,
}

/// A planned trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    /// Analysis of the starting point.
    pub origin: AnalysisResult,
    /// Analysis of the end point.
    pub destination: AnalysisResult,
    /// Requested travel mode.
    pub mode: TravelMode,
    /// Great-circle distance in kilometres, rounded to two decimals.
    pub total_distance_km: f64,
    /// Estimated travel time in whole minutes.
    pub estimated_duration_minutes: f64,
    /// Analysed waypoints from origin to destination.
    pub segments: Vec<RouteSegment>,
    /// Trip-level verdict.
    pub verdict: FeasibilityVerdict,
}

/// Analyses both endpoints, segments the route and assesses its risk.
///
/// # Examples
///
/// ```
/// use wayfare_core::test_support::{StubImagery, StubPositioning, StubWeather};
/// use wayfare_core::{LatLng, SurfaceMetrics, TravelMode};
/// use wayfare_planner::{DestinationAnalyzer, RoutePlanner};
///
/// let planner = RoutePlanner::new(DestinationAnalyzer::new(
///     StubPositioning::with_accuracy(2.0),
///     StubImagery::with_metrics(SurfaceMetrics::new(0.7, 0.0, 0.0)),
///     StubWeather::empty(),
/// ));
/// let report = planner.plan(
///     LatLng { lat: 0.0, lng: 0.0 },
///     LatLng { lat: 0.0, lng: 1.0 },
///     TravelMode::Cycling,
/// );
/// assert!(report.verdict.is_feasible);
/// assert_eq!(report.segments.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner<P, I, W>
where
    P: PositioningSource,
    I: SurfaceImagerySource,
    W: WeatherSource,
{
    analyzer: DestinationAnalyzer<P, I, W>,
    config: PlannerConfig,
}

impl<P, I, W> RoutePlanner<P, I, W>
where
    P: PositioningSource,
    I: SurfaceImagerySource,
    W: WeatherSource,
{
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(analyzer: DestinationAnalyzer<P, I, W>) -> Self {
        Self::with_config(analyzer, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(analyzer: DestinationAnalyzer<P, I, W>, config: PlannerConfig) -> Self {
        Self { analyzer, config }
    }

    /// Analyzer used for endpoints and waypoints.
    #[must_use]
    pub const fn analyzer(&self) -> &DestinationAnalyzer<P, I, W> {
        &self.analyzer
    }

    /// Plan a trip from `origin` to `destination` in `mode`. Never fails.
    #[must_use]
    pub fn plan(&self, origin: LatLng, destination: LatLng, mode: TravelMode) -> RouteReport {
        let origin_result = self.analyzer.analyze(origin);
        let destination_result = self.analyzer.analyze(destination);
        let segments = RouteSegmenter::new(&self.analyzer)
            .with_config(self.config.segmentation)
            .segment(origin, destination);
        let verdict = RouteRiskAggregator::new()
            .with_points(self.config.risk)
            .assess(&origin_result, &destination_result, &segments, mode);

        let distance_km = haversine_km(origin, destination);
        if !verdict.is_feasible {
            log::debug!(
                "route {origin} -> {destination} by {mode} is not feasible ({})",
                verdict.risk_level
            );
        }

        RouteReport {
            origin: origin_result,
            destination: destination_result,
            mode,
            total_distance_km: round2(distance_km),
            estimated_duration_minutes: self.config.speeds.duration_minutes(distance_km, mode),
            segments,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use wayfare_core::test_support::{StubImagery, StubPositioning, StubWeather};
    use wayfare_core::{RiskLevel, SurfaceMetrics};

    type StubPlanner = RoutePlanner<StubPositioning, StubImagery, StubWeather>;

    const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };
    const DESTINATION: LatLng = LatLng { lat: 0.0, lng: 1.0 };

    fn planner(accuracy_m: f64, metrics: SurfaceMetrics) -> StubPlanner {
        RoutePlanner::new(DestinationAnalyzer::new(
            StubPositioning::with_accuracy(accuracy_m),
            StubImagery::with_metrics(metrics),
            StubWeather::empty(),
        ))
    }

    #[fixture]
    fn benign() -> StubPlanner {
        planner(2.0, SurfaceMetrics::new(0.75, 0.1, 0.05))
    }

    #[rstest]
    fn benign_route_is_feasible(benign: StubPlanner) {
        let report = benign.plan(ORIGIN, DESTINATION, TravelMode::Walking);
        assert!(report.verdict.is_feasible);
        assert_eq!(report.verdict.risk_level, RiskLevel::Low);
        assert!((report.total_distance_km - 111.19).abs() < 1e-9);
        assert_eq!(report.estimated_duration_minutes, 1334.0);
        assert_eq!(report.segments.len(), 4);
        assert_eq!(report.mode, TravelMode::Walking);
    }

    #[rstest]
    fn hazardous_route_is_critical() {
        let planner = planner(40.0, SurfaceMetrics::new(0.0, 0.9, 0.9));
        let report = planner.plan(ORIGIN, DESTINATION, TravelMode::Driving);
        assert_eq!(report.verdict.risk_level, RiskLevel::Critical);
        assert!(!report.verdict.is_feasible);
        assert!(
            report
                .verdict
                .advisories
                .iter()
                .any(|advice| advice.contains("NOT RECOMMENDED"))
        );
    }

    #[rstest]
    fn failing_sources_still_produce_a_report() {
        let planner = RoutePlanner::new(DestinationAnalyzer::new(
            StubPositioning::with_accuracy(2.0),
            StubImagery::with_metrics(SurfaceMetrics::default()).failing_at(ORIGIN),
            StubWeather::empty(),
        ));
        let report = planner.plan(ORIGIN, DESTINATION, TravelMode::Driving);
        assert!(report.origin.is_fallback());
        assert!(!report.destination.is_fallback());
        assert!(report.segments.first().is_some_and(RouteSegment::is_degraded));
    }

    #[rstest]
    #[case(TravelMode::Driving, 111.0)]
    #[case(TravelMode::Cycling, 444.0)]
    #[case(TravelMode::Walking, 1332.0)]
    fn durations_follow_mode_speeds(#[case] mode: TravelMode, #[case] expected: f64) {
        assert_eq!(ModeSpeeds::default().duration_minutes(111.0, mode), expected);
    }

    #[rstest]
    fn zero_speed_yields_zero_duration() {
        let speeds = ModeSpeeds {
            walking_kmh: 0.0,
            ..ModeSpeeds::default()
        };
        assert_eq!(speeds.duration_minutes(10.0, TravelMode::Walking), 0.0);
    }
}
