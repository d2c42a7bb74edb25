//! Destination analysis and route planning for the Wayfare engine.
//!
//! The crate composes the data-source traits from `wayfare-core` with the
//! calculators from `wayfare-scorer`:
//!
//! - [`DestinationAnalyzer`] produces one [`AnalysisResult`] per coordinate,
//!   falling back to neutral values when a source fails.
//! - [`RouteSegmenter`] analyses evenly spaced waypoints along a route.
//! - [`RouteRiskAggregator`] folds endpoints and waypoints into a
//!   [`FeasibilityVerdict`](wayfare_core::FeasibilityVerdict).
//! - [`RoutePlanner`] runs all three for a trip and adds distance and
//!   duration estimates.

#![forbid(unsafe_code)]

pub mod analysis;
mod error;
pub mod plan;
pub mod risk;
pub mod segment;

pub use analysis::{
    Alert, AlertCategory, AlertPriority, AnalysisResult, AnalyzerConfig, DestinationAnalyzer,
    Observation, RecommendationThresholds, Recommendations,
};
pub use error::AnalysisError;
pub use plan::{ModeSpeeds, PlannerConfig, RoutePlanner, RouteReport};
pub use risk::{RiskPoints, RouteRiskAggregator};
pub use segment::{RouteSegmenter, SegmentationConfig};
