//! Core domain types for the Wayfare engine.
//!
//! The crate defines the request-scoped values that flow through the scoring
//! pipeline (surface metrics, weather snapshots, ratings, route segments and
//! verdicts) together with the data-source traits that feed it. Nothing here
//! performs I/O; adapters live in `wayfare-data` and scoring lives in
//! `wayfare-scorer`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod location;
pub mod mode;
pub mod positioning;
pub mod rating;
pub mod route;
pub mod score;
pub mod source;
pub mod surface;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod weather;

pub use location::{CoordinateError, EARTH_RADIUS_KM, LatLng, haversine_km, interpolate};
pub use mode::TravelMode;
pub use positioning::PositioningFix;
pub use rating::{RiskLevel, SafetyAssessment, SafetyRating};
pub use route::{FeasibilityVerdict, RouteSegment};
pub use score::HealthScoreResult;
pub use source::{PositioningSource, SourceError, SurfaceImagerySource, WeatherSource};
pub use surface::{BoundingBox, ImageryMode, SurfaceMetrics, SurfaceReading};
pub use weather::WeatherSnapshot;
