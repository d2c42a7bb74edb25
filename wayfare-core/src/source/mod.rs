//! Data sources that feed the scoring pipeline.
//!
//! Three capabilities are consumed: positioning quality, surface indices from
//! satellite imagery, and weather. Each is a synchronous trait so the core can
//! be embedded anywhere; adapters that talk to networks or files live in
//! `wayfare-data`.
//!
//! Sources report failures through [`SourceError`]. The pipeline never
//! propagates these to its callers; it substitutes documented fallbacks.

mod error;
mod provider;

pub use error::SourceError;
pub use provider::{PositioningSource, SurfaceImagerySource, WeatherSource};
