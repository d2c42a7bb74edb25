//! On-disk shape of an observation grid.

use serde::{Deserialize, Serialize};
use wayfare_core::{LatLng, PositioningFix, SurfaceReading, WeatherSnapshot};

/// Default coverage radius around each sample, in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 25.0;

/// Observations recorded at one coordinate.
///
/// Any section may be missing; queries for a missing section report the
/// source as unavailable at that sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSample {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Positioning fix at the sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positioning: Option<PositioningFix>,
    /// Imagery reading at the sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceReading>,
    /// Weather at the sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
}

impl ObservationSample {
    /// Sample coordinate.
    #[must_use]
    pub const fn location(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A JSON observation document.
///
/// ```json
/// {
///   "max_distance_km": 25,
///   "samples": [
///     {
///       "lat": 51.5, "lng": -0.12,
///       "positioning": { "accuracy_m": 3.0 },
///       "surface": { "vegetation_index": 0.6, "water_index": 0.1, "snow_index": 0.0 },
///       "weather": { "precip_mm": 0.2, "visibility_km": 9.0, "is_day": true }
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationFile {
    /// Samples in file order.
    #[serde(default)]
    pub samples: Vec<ObservationSample>,
    /// Largest distance at which a sample still answers a query.
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,
}

impl Default for ObservationFile {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }
}

const fn default_max_distance_km() -> f64 {
    DEFAULT_MAX_DISTANCE_KM
}
