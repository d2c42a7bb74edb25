//! Route-level values: analysed waypoints and the trip verdict.

use crate::{LatLng, RiskLevel, SafetyRating, SurfaceMetrics};

/// One analysed waypoint along a route.
///
/// Segments are ordered: index `0` is the origin and the last index is the
/// destination. When a waypoint could not be analysed it still appears, with
/// neutral values, no `surface_conditions` and an `error` marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    /// Waypoint coordinate.
    pub position: LatLng,
    /// Safety rating at the waypoint.
    pub safety_rating: SafetyRating,
    /// Health score at the waypoint.
    pub health_score: f64,
    /// Position of the waypoint in the route, starting at `0`.
    pub segment_index: usize,
    /// Distance travelled from the origin in kilometres.
    pub distance_from_origin_km: f64,
    /// Surface indices, absent when analysis failed.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub surface_conditions: Option<SurfaceMetrics>,
    /// Failure marker, present when analysis failed.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub error: Option<String>,
}

impl RouteSegment {
    /// Report whether the waypoint's analysis failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Trip-level outcome of route risk aggregation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeasibilityVerdict {
    /// Whether travel in the requested mode is considered feasible.
    pub is_feasible: bool,
    /// Risk bucket for `risk_score`.
    pub risk_level: RiskLevel,
    /// Accumulated risk points; never negative.
    pub risk_score: f64,
    /// Human-readable reasons that contributed to the score.
    pub risk_factors: Vec<String>,
    /// Guidance for the traveller; does not affect the score.
    pub advisories: Vec<String>,
}
