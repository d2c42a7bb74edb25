//! Data-source traits consumed by the destination analyzer.

use std::sync::Arc;

use crate::{
    ImageryMode, LatLng, PositioningFix, SurfaceReading, WeatherSnapshot, source::SourceError,
};

/// Report positioning quality at a coordinate.
///
/// Implementations must be `Send + Sync` so route waypoints can be analysed
/// in parallel.
///
/// # Examples
///
/// ```rust
/// use wayfare_core::{LatLng, PositioningFix, PositioningSource, SourceError};
///
/// struct OpenSky;
///
/// impl PositioningSource for OpenSky {
///     fn get_accuracy(&self, _at: LatLng) -> Result<PositioningFix, SourceError> {
///         Ok(PositioningFix::with_accuracy(2.0))
///     }
/// }
///
/// let fix = OpenSky.get_accuracy(LatLng { lat: 0.0, lng: 0.0 })?;
/// assert_eq!(fix.accuracy_m, 2.0);
/// # Ok::<(), SourceError>(())
/// ```
pub trait PositioningSource: Send + Sync {
    /// Return the positioning fix expected at `at`.
    fn get_accuracy(&self, at: LatLng) -> Result<PositioningFix, SourceError>;
}

/// Extract surface indices from satellite imagery around a coordinate.
///
/// Implementations must return indices already rescaled to `0.0..=1.0`.
pub trait SurfaceImagerySource: Send + Sync {
    /// Return the surface reading at `at` for the requested product.
    fn get_indices(&self, at: LatLng, mode: ImageryMode) -> Result<SurfaceReading, SourceError>;
}

/// Report current weather at a coordinate.
///
/// Missing measurements should be left as `None` rather than invented.
pub trait WeatherSource: Send + Sync {
    /// Return the weather snapshot at `at`.
    fn get_snapshot(&self, at: LatLng) -> Result<WeatherSnapshot, SourceError>;
}

impl<T: PositioningSource + ?Sized> PositioningSource for &T {
    fn get_accuracy(&self, at: LatLng) -> Result<PositioningFix, SourceError> {
        (**self).get_accuracy(at)
    }
}

impl<T: PositioningSource + ?Sized> PositioningSource for Arc<T> {
    fn get_accuracy(&self, at: LatLng) -> Result<PositioningFix, SourceError> {
        (**self).get_accuracy(at)
    }
}

impl<T: SurfaceImagerySource + ?Sized> SurfaceImagerySource for &T {
    fn get_indices(&self, at: LatLng, mode: ImageryMode) -> Result<SurfaceReading, SourceError> {
        (**self).get_indices(at, mode)
    }
}

impl<T: SurfaceImagerySource + ?Sized> SurfaceImagerySource for Arc<T> {
    fn get_indices(&self, at: LatLng, mode: ImageryMode) -> Result<SurfaceReading, SourceError> {
        (**self).get_indices(at, mode)
    }
}

impl<T: WeatherSource + ?Sized> WeatherSource for &T {
    fn get_snapshot(&self, at: LatLng) -> Result<WeatherSnapshot, SourceError> {
        (**self).get_snapshot(at)
    }
}

impl<T: WeatherSource + ?Sized> WeatherSource for Arc<T> {
    fn get_snapshot(&self, at: LatLng) -> Result<WeatherSnapshot, SourceError> {
        (**self).get_snapshot(at)
    }
}
