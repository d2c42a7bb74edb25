//! Route segmentation.
//!
//! A route is approximated by the straight line between its endpoints in
//! latitude/longitude space, cut into between three and ten equal steps.
//! Every waypoint is analysed independently; a waypoint whose analysis fails
//! keeps its place in the sequence with neutral values.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use wayfare_core::{
    HealthScoreResult, LatLng, PositioningSource, RouteSegment, SafetyRating,
    SurfaceImagerySource, WeatherSource, haversine_km, interpolate,
};

use crate::DestinationAnalyzer;

/// Configuration for [`RouteSegmenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Target length of one step in kilometres.
    pub km_per_segment: u32,
    /// Fewest steps produced, whatever the distance.
    pub min_segments: u32,
    /// Most steps produced, whatever the distance.
    pub max_segments: u32,
    /// Analyse waypoints on the rayon pool.
    pub parallel: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            km_per_segment: 50,
            min_segments: 3,
            max_segments: 10,
            parallel: false,
        }
    }
}

impl SegmentationConfig {
    /// Number of steps for a route of `distance_km`.
    ///
    /// # Examples
    /// ```
    /// use wayfare_planner::SegmentationConfig;
    ///
    /// let config = SegmentationConfig::default();
    /// assert_eq!(config.segment_count(120.0), 3);
    /// assert_eq!(config.segment_count(220.0), 5);
    /// assert_eq!(config.segment_count(5_000.0), 10);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "step count is distance over step length"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped to the u32 step bounds first"
    )]
    pub fn segment_count(&self, distance_km: f64) -> u32 {
        let lower = self.min_segments.max(1);
        let upper = self.max_segments.max(lower);
        if self.km_per_segment == 0 || !distance_km.is_finite() {
            return lower;
        }
        let steps = (distance_km / f64::from(self.km_per_segment)).ceil();
        steps.clamp(f64::from(lower), f64::from(upper)) as u32
    }
}

/// Splits a route into analysed waypoints.
///
/// # Examples
///
/// ```
/// use wayfare_core::test_support::{StubImagery, StubPositioning, StubWeather};
/// use wayfare_core::{LatLng, SurfaceMetrics};
/// use wayfare_planner::{DestinationAnalyzer, RouteSegmenter};
///
/// let analyzer = DestinationAnalyzer::new(
///     StubPositioning::with_accuracy(3.0),
///     StubImagery::with_metrics(SurfaceMetrics::new(0.6, 0.0, 0.0)),
///     StubWeather::empty(),
/// );
/// let origin = LatLng { lat: 0.0, lng: 0.0 };
/// let destination = LatLng { lat: 0.0, lng: 1.0 };
/// let segments = RouteSegmenter::new(&analyzer).segment(origin, destination);
/// assert_eq!(segments.len(), 4);
/// assert_eq!(segments.last().map(|s| s.position), Some(destination));
/// ```
#[derive(Debug)]
pub struct RouteSegmenter<'a, P, I, W>
where
    P: PositioningSource,
    I: SurfaceImagerySource,
    W: WeatherSource,
{
    analyzer: &'a DestinationAnalyzer<P, I, W>,
    config: SegmentationConfig,
}

struct Waypoint {
    index: usize,
    position: LatLng,
    distance_from_origin_km: f64,
}

impl<'a, P, I, W> RouteSegmenter<'a, P, I, W>
where
    P: PositioningSource,
    I: SurfaceImagerySource,
    W: WeatherSource,
{
    /// Construct a segmenter using default configuration.
    #[must_use]
    pub fn new(analyzer: &'a DestinationAnalyzer<P, I, W>) -> Self {
        Self {
            analyzer,
            config: SegmentationConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: SegmentationConfig) -> Self {
        self.config = config;
        self
    }

    /// Produce `n + 1` analysed waypoints from `origin` to `destination`.
    ///
    /// The first waypoint is exactly `origin` and the last exactly
    /// `destination`. Output is in `segment_index` order even when the
    /// waypoints are analysed in parallel.
    #[must_use]
    pub fn segment(&self, origin: LatLng, destination: LatLng) -> Vec<RouteSegment> {
        let waypoints = waypoints(&self.config, origin, destination);
        if self.config.parallel {
            waypoints
                .par_iter()
                .map(|waypoint| self.analyse(waypoint))
                .collect()
        } else {
            waypoints
                .iter()
                .map(|waypoint| self.analyse(waypoint))
                .collect()
        }
    }

    fn analyse(&self, waypoint: &Waypoint) -> RouteSegment {
        self.analyzer.try_analyze(waypoint.position).map_or_else(
            |error| {
                log::warn!(
                    "segment {} analysis failed; using neutral values: {error}",
                    waypoint.index
                );
                RouteSegment {
                    position: waypoint.position,
                    safety_rating: SafetyRating::Medium,
                    health_score: HealthScoreResult::FALLBACK_SCORE,
                    segment_index: waypoint.index,
                    distance_from_origin_km: waypoint.distance_from_origin_km,
                    surface_conditions: None,
                    error: Some(error.to_string()),
                }
            },
            |result| RouteSegment {
                position: waypoint.position,
                safety_rating: result.safety.rating,
                health_score: result.health.score,
                segment_index: waypoint.index,
                distance_from_origin_km: waypoint.distance_from_origin_km,
                surface_conditions: result.surface.map(|reading| reading.metrics),
                error: None,
            },
        )
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "waypoints are evenly spaced fractions of the route"
)]
fn waypoints(config: &SegmentationConfig, origin: LatLng, destination: LatLng) -> Vec<Waypoint> {
    let total_km = haversine_km(origin, destination);
    let steps = config.segment_count(total_km);
    (0..=steps)
        .enumerate()
        .map(|(index, step)| {
            let fraction = f64::from(step) / f64::from(steps);
            Waypoint {
                index,
                position: interpolate(origin, destination, fraction),
                distance_from_origin_km: total_km * f64::from(step) / f64::from(steps),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use wayfare_core::SurfaceMetrics;
    use wayfare_core::test_support::{StubImagery, StubPositioning, StubWeather};

    type StubAnalyzer = DestinationAnalyzer<StubPositioning, StubImagery, StubWeather>;

    const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };

    /// Roughly 120 km due east of [`ORIGIN`].
    fn destination_120km() -> LatLng {
        LatLng {
            lat: 0.0,
            lng: 120.0 / 111.195,
        }
    }

    #[fixture]
    fn analyzer() -> StubAnalyzer {
        DestinationAnalyzer::new(
            StubPositioning::with_accuracy(2.0),
            StubImagery::with_metrics(SurfaceMetrics::new(0.75, 0.1, 0.05)),
            StubWeather::empty(),
        )
    }

    #[rstest]
    #[case(0.0, 3)]
    #[case(120.0, 3)]
    #[case(150.0, 3)]
    #[case(150.1, 4)]
    #[case(499.0, 10)]
    #[case(10_000.0, 10)]
    #[case(f64::NAN, 3)]
    fn segment_count_is_clamped(#[case] distance_km: f64, #[case] expected: u32) {
        assert_eq!(SegmentationConfig::default().segment_count(distance_km), expected);
    }

    #[rstest]
    fn degenerate_config_still_segments() {
        let config = SegmentationConfig {
            km_per_segment: 0,
            min_segments: 0,
            max_segments: 0,
            parallel: false,
        };
        assert_eq!(config.segment_count(100.0), 1);
    }

    #[rstest]
    fn route_of_120km_has_four_waypoints(analyzer: StubAnalyzer) {
        let destination = destination_120km();
        let segments = RouteSegmenter::new(&analyzer).segment(ORIGIN, destination);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments.first().map(|s| s.position), Some(ORIGIN));
        assert_eq!(segments.last().map(|s| s.position), Some(destination));
        for (expected, segment) in segments.iter().enumerate() {
            assert_eq!(segment.segment_index, expected);
            assert!(!segment.is_degraded());
        }
        let total = haversine_km(ORIGIN, destination);
        let last = segments.last().map(|s| s.distance_from_origin_km);
        assert!(last.is_some_and(|km| (km - total).abs() < 1e-9));
    }

    #[rstest]
    fn failing_waypoint_keeps_its_place() {
        let destination = destination_120km();
        let middle = interpolate(ORIGIN, destination, 1.0 / 3.0);
        let analyzer = DestinationAnalyzer::new(
            StubPositioning::with_accuracy(2.0),
            StubImagery::with_metrics(SurfaceMetrics::new(0.75, 0.1, 0.05)).failing_at(middle),
            StubWeather::empty(),
        );
        let segments = RouteSegmenter::new(&analyzer).segment(ORIGIN, destination);
        assert_eq!(segments.len(), 4);
        let failed: Vec<&RouteSegment> = segments.iter().filter(|s| s.is_degraded()).collect();
        assert_eq!(failed.len(), 1);
        let failed = failed.first().copied().expect("one failed segment");
        assert_eq!(failed.segment_index, 1);
        assert_eq!(failed.safety_rating, SafetyRating::Medium);
        assert_eq!(failed.health_score, 50.0);
        assert!(failed.surface_conditions.is_none());
    }

    #[rstest]
    fn parallel_analysis_preserves_order(analyzer: StubAnalyzer) {
        let destination = LatLng { lat: 5.0, lng: 5.0 };
        let config = SegmentationConfig {
            parallel: true,
            ..SegmentationConfig::default()
        };
        let parallel = RouteSegmenter::new(&analyzer)
            .with_config(config)
            .segment(ORIGIN, destination);
        let sequential = RouteSegmenter::new(&analyzer).segment(ORIGIN, destination);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), 11);
    }
}
