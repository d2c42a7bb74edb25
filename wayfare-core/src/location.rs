//! Geographic coordinates and the small amount of geodesy the pipeline needs.
//!
//! Coordinates are WGS84 degrees. [`LatLng`] converts to and from
//! [`geo::Coord`] with `x = longitude` and `y = latitude`.

use geo::{Coord, Line, LineInterpolatePoint};
use thiserror::Error;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// The fields are public so request-scoped values can be built freely inside
/// the pipeline; use [`LatLng::new`] at system boundaries to reject
/// out-of-range input.
///
/// # Examples
/// ```
/// use wayfare_core::LatLng;
///
/// let paris = LatLng::new(48.8566, 2.3522)?;
/// assert_eq!(paris.lat, 48.8566);
/// # Ok::<(), wayfare_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

/// Errors returned by [`LatLng::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was not finite or fell outside `-90..=90`.
    #[error("latitude {0} is outside -90..=90")]
    Latitude(f64),
    /// Longitude was not finite or fell outside `-180..=180`.
    #[error("longitude {0} is outside -180..=180")]
    Longitude(f64),
}

impl LatLng {
    /// Validate and construct a coordinate.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is non-finite or out
    /// of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Return the coordinate as a `geo` coordinate (`x = lng`, `y = lat`).
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        value.to_coord()
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Uses the haversine formula with [`EARTH_RADIUS_KM`].
///
/// # Examples
/// ```
/// use wayfare_core::{LatLng, haversine_km};
///
/// let a = LatLng { lat: 0.0, lng: 0.0 };
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: LatLng, to: LatLng) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Linearly interpolate between two coordinates in lat/lng space.
///
/// This is not a geodesic: the point moves along a straight line in degree
/// space. `fraction` values of exactly `0.0` and `1.0` return the endpoints
/// unchanged so callers can rely on exact equality. A NaN fraction yields
/// `from`.
#[must_use]
pub fn interpolate(from: LatLng, to: LatLng, fraction: f64) -> LatLng {
    if fraction <= 0.0 {
        return from;
    }
    if fraction >= 1.0 {
        return to;
    }
    Line::new(from.to_coord(), to.to_coord())
        .line_interpolate_point(fraction)
        .map_or(from, |point| LatLng::from(point.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    #[case(91.0, 0.0)]
    #[case(-90.5, 0.0)]
    #[case(f64::NAN, 0.0)]
    fn rejects_invalid_latitude(#[case] lat: f64, #[case] lng: f64) {
        assert!(matches!(
            LatLng::new(lat, lng),
            Err(CoordinateError::Latitude(_))
        ));
    }

    #[rstest]
    #[case(0.0, 180.5)]
    #[case(0.0, f64::INFINITY)]
    fn rejects_invalid_longitude(#[case] lat: f64, #[case] lng: f64) {
        assert!(matches!(
            LatLng::new(lat, lng),
            Err(CoordinateError::Longitude(_))
        ));
    }

    #[rstest]
    fn accepts_boundary_values() {
        assert!(LatLng::new(90.0, -180.0).is_ok());
        assert!(LatLng::new(-90.0, 180.0).is_ok());
    }

    #[rstest]
    fn coord_round_trip_swaps_axes() {
        let point = LatLng { lat: 51.5, lng: -0.1 };
        let coord = point.to_coord();
        assert_eq!(coord, Coord { x: -0.1, y: 51.5 });
        assert_eq!(LatLng::from(coord), point);
    }

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = LatLng { lat: 0.0, lng: 0.0 };
        let b = LatLng { lat: 1.0, lng: 0.0 };
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((haversine_km(a, b) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn haversine_is_symmetric() {
        let london = LatLng { lat: 51.5074, lng: -0.1278 };
        let paris = LatLng { lat: 48.8566, lng: 2.3522 };
        let there = haversine_km(london, paris);
        let back = haversine_km(paris, london);
        assert!((there - back).abs() < TOLERANCE);
        assert!((340.0..350.0).contains(&there), "got {there}");
    }

    #[rstest]
    fn interpolation_hits_endpoints_exactly() {
        let from = LatLng { lat: 10.1, lng: 20.3 };
        let to = LatLng { lat: 11.7, lng: 19.9 };
        assert_eq!(interpolate(from, to, 0.0), from);
        assert_eq!(interpolate(from, to, 1.0), to);
    }

    #[rstest]
    fn interpolation_midpoint_is_linear() {
        let from = LatLng { lat: 0.0, lng: 0.0 };
        let to = LatLng { lat: 2.0, lng: 4.0 };
        let mid = interpolate(from, to, 0.5);
        assert!((mid.lat - 1.0).abs() < TOLERANCE);
        assert!((mid.lng - 2.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn nan_fraction_stays_at_origin() {
        let from = LatLng { lat: 1.0, lng: 1.0 };
        let to = LatLng { lat: 2.0, lng: 2.0 };
        assert_eq!(interpolate(from, to, f64::NAN), from);
    }
}
