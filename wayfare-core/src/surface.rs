//! Surface conditions derived from satellite imagery.
//!
//! The imagery collaborator rescales NDVI, NDWI and NDSI from `[-1, 1]` onto
//! `[0, 1]` before the values reach the pipeline.

use geo::{Coord, Rect};

/// Vegetation, water and snow indices at a coordinate.
///
/// Each index lies in `0.0..=1.0`. Absent values deserialize as `0.0`, which
/// is also the scoring default.
///
/// # Examples
/// ```
/// use wayfare_core::SurfaceMetrics;
///
/// let metrics = SurfaceMetrics::new(0.6, 0.1, 0.0);
/// assert_eq!(metrics.vegetation_index, 0.6);
/// assert_eq!(SurfaceMetrics::default().water_index, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SurfaceMetrics {
    /// Rescaled NDVI.
    pub vegetation_index: f64,
    /// Rescaled NDWI.
    pub water_index: f64,
    /// Rescaled NDSI.
    pub snow_index: f64,
}

impl SurfaceMetrics {
    /// Construct metrics from the three indices.
    #[must_use]
    pub const fn new(vegetation_index: f64, water_index: f64, snow_index: f64) -> Self {
        Self {
            vegetation_index,
            water_index,
            snow_index,
        }
    }
}

/// Product requested from the imagery collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ImageryMode {
    /// Band-ratio composite used to extract the surface indices.
    #[default]
    Composite,
    /// Natural-colour rendering for display only.
    TrueColor,
}

/// Geographic rectangle `[min_lng, min_lat, max_lng, max_lat]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox(pub [f64; 4]);

impl BoundingBox {
    /// Build a box from its corner values.
    #[must_use]
    pub const fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self([min_lng, min_lat, max_lng, max_lat])
    }

    /// Convert to a `geo` rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect<f64> {
        let [min_lng, min_lat, max_lng, max_lat] = self.0;
        Rect::new(
            Coord {
                x: min_lng,
                y: min_lat,
            },
            Coord {
                x: max_lng,
                y: max_lat,
            },
        )
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        let min = rect.min();
        let max = rect.max();
        Self::new(min.x, min.y, max.x, max.y)
    }
}

/// Everything the imagery collaborator returns for one coordinate.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceReading {
    /// Surface indices at the coordinate.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metrics: SurfaceMetrics,
    /// Location of the rendered image, when the collaborator stored one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
    /// Area covered by the imagery request.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bbox: Option<BoundingBox>,
}

impl From<SurfaceMetrics> for SurfaceReading {
    fn from(metrics: SurfaceMetrics) -> Self {
        Self {
            metrics,
            image_url: None,
            bbox: None,
        }
    }
}
