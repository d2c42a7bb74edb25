//! Trip-level risk aggregation.
//!
//! Risk is an additive point system over the endpoints and every waypoint.
//! The total is bucketed into a [`RiskLevel`]; mode-specific advisories are
//! attached without changing the score.

use serde::{Deserialize, Serialize};
use wayfare_core::{FeasibilityVerdict, RiskLevel, RouteSegment, SafetyRating, TravelMode};

use crate::AnalysisResult;

const WALKING_ADVISORY: &str = "Walking is not advised on this route; consider driving";
const CYCLING_ADVISORY: &str =
    "Cycling is not advised: many route segments have low safety ratings";
const NOT_RECOMMENDED: &str = "Travel NOT RECOMMENDED due to critical safety risks";

/// Points and thresholds of the risk model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPoints {
    /// Added when the origin is rated [`SafetyRating::Low`].
    pub low_safety_origin: f64,
    /// Added when the origin's health is below `endpoint_health_floor`.
    pub poor_health_origin: f64,
    /// Added when the destination is rated [`SafetyRating::Low`].
    pub low_safety_destination: f64,
    /// Added when the destination's health is below `endpoint_health_floor`.
    pub poor_health_destination: f64,
    /// Added per waypoint rated [`SafetyRating::Low`].
    pub low_safety_segment: f64,
    /// Added per waypoint whose health is below `segment_health_floor`.
    pub poor_health_segment: f64,
    /// Endpoint health below which points are added.
    pub endpoint_health_floor: f64,
    /// Waypoint health below which points are added.
    pub segment_health_floor: f64,
    /// Score above which walking is discouraged.
    pub walking_advisory_score: f64,
    /// Share of low-safety waypoints above which cycling is discouraged.
    pub cycling_low_safety_share: f64,
    /// Lowest score bucketed as [`RiskLevel::Critical`].
    pub critical: f64,
    /// Lowest score bucketed as [`RiskLevel::High`].
    pub high: f64,
    /// Lowest score bucketed as [`RiskLevel::Medium`].
    pub medium: f64,
}

impl Default for RiskPoints {
    fn default() -> Self {
        Self {
            low_safety_origin: 30.0,
            poor_health_origin: 20.0,
            low_safety_destination: 30.0,
            poor_health_destination: 20.0,
            low_safety_segment: 15.0,
            poor_health_segment: 10.0,
            endpoint_health_floor: 30.0,
            segment_health_floor: 25.0,
            walking_advisory_score: 50.0,
            cycling_low_safety_share: 0.3,
            critical: 80.0,
            high: 60.0,
            medium: 30.0,
        }
    }
}

impl RiskPoints {
    /// Bucket `score` into a level.
    #[must_use]
    pub fn level_for(&self, score: f64) -> RiskLevel {
        if score >= self.critical {
            RiskLevel::Critical
        } else if score >= self.high {
            RiskLevel::High
        } else if score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Folds per-point results into a [`FeasibilityVerdict`].
///
/// # Examples
///
/// ```
/// use wayfare_core::{RiskLevel, TravelMode};
/// use wayfare_planner::RouteRiskAggregator;
///
/// let aggregator = RouteRiskAggregator::new();
/// assert_eq!(aggregator.points().level_for(60.0), RiskLevel::High);
/// assert!(aggregator.is_feasible(RiskLevel::High, TravelMode::Driving));
/// assert!(!aggregator.is_feasible(RiskLevel::High, TravelMode::Walking));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteRiskAggregator {
    points: RiskPoints,
}

#[derive(Debug, Default)]
struct Tally {
    score: f64,
    factors: Vec<String>,
}

impl Tally {
    #[expect(clippy::float_arithmetic, reason = "risk points are additive")]
    fn add(&mut self, points: f64, factor: Option<String>) {
        self.score += points;
        self.factors.extend(factor);
    }
}

impl RouteRiskAggregator {
    /// Create an aggregator with the default points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the points table.
    #[must_use]
    pub const fn with_points(mut self, points: RiskPoints) -> Self {
        self.points = points;
        self
    }

    /// Points table in use.
    #[must_use]
    pub const fn points(&self) -> &RiskPoints {
        &self.points
    }

    /// Assess a trip in `mode` from its analysed endpoints and waypoints.
    ///
    /// Pure computation over already-gathered data; fallback endpoint
    /// records and degraded waypoints are scored on their neutral values.
    #[must_use]
    pub fn assess(
        &self,
        origin: &AnalysisResult,
        destination: &AnalysisResult,
        segments: &[RouteSegment],
        mode: TravelMode,
    ) -> FeasibilityVerdict {
        let p = &self.points;
        let mut tally = Tally::default();

        if origin.safety_rating() == SafetyRating::Low {
            tally.add(p.low_safety_origin, Some("High risk origin location".to_owned()));
        }
        if origin.health_score() < p.endpoint_health_floor {
            tally.add(
                p.poor_health_origin,
                Some("Poor environmental conditions at origin".to_owned()),
            );
        }
        if destination.safety_rating() == SafetyRating::Low {
            tally.add(p.low_safety_destination, Some("High risk destination".to_owned()));
        }
        if destination.health_score() < p.endpoint_health_floor {
            tally.add(
                p.poor_health_destination,
                Some("Poor environmental conditions at destination".to_owned()),
            );
        }

        let mut low_safety = 0_usize;
        for segment in segments {
            if segment.safety_rating == SafetyRating::Low {
                low_safety += 1;
                tally.add(p.low_safety_segment, None);
            }
            if segment.health_score < p.segment_health_floor {
                tally.add(p.poor_health_segment, None);
            }
        }
        if low_safety > 0 {
            tally
                .factors
                .push(format!("{low_safety} high-risk route segments detected"));
        }

        let risk_score = tally.score.max(0.0);
        let risk_level = p.level_for(risk_score);
        let is_feasible = self.is_feasible(risk_level, mode);

        let mut advisories = Vec::new();
        match mode {
            TravelMode::Walking if risk_score > p.walking_advisory_score => {
                advisories.push(WALKING_ADVISORY.to_owned());
            }
            TravelMode::Cycling
                if share(low_safety, segments.len()) > p.cycling_low_safety_share =>
            {
                advisories.push(CYCLING_ADVISORY.to_owned());
            }
            _ => {}
        }
        if !is_feasible {
            advisories.push(NOT_RECOMMENDED.to_owned());
        }

        FeasibilityVerdict {
            is_feasible,
            risk_level,
            risk_score,
            risk_factors: tally.factors,
            advisories,
        }
    }

    /// Decide feasibility of `level` for `mode`.
    ///
    /// Critical trips are never feasible; high-risk trips only by car.
    #[must_use]
    pub fn is_feasible(&self, level: RiskLevel, mode: TravelMode) -> bool {
        match level {
            RiskLevel::Critical => false,
            RiskLevel::High => mode == TravelMode::Driving,
            RiskLevel::Medium | RiskLevel::Low => true,
        }
    }
}

/// `part / whole`, or `0` for an empty whole.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "waypoint counts are small and the share is a plain ratio"
)]
fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}
