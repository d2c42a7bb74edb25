//! File-backed data source built from recorded observation samples.
//!
//! Samples are indexed by `[lng, lat]` in an R\*-tree. A query looks up the
//! nearest sample in degree space at its own longitude and one full turn
//! either side, so samples across the antimeridian are found. The closest
//! candidate by great-circle distance is accepted only if it lies within
//! `max_distance_km`.

mod error;
mod file;

pub use error::ObservationGridError;
pub use file::{DEFAULT_MAX_DISTANCE_KM, ObservationFile, ObservationSample};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use rstar::RTree;
use rstar::primitives::GeomWithData;
use wayfare_core::{
    ImageryMode, LatLng, PositioningFix, PositioningSource, SourceError, SurfaceImagerySource,
    SurfaceReading, WeatherSnapshot, WeatherSource, haversine_km,
};

type IndexedSample = GeomWithData<[f64; 2], usize>;

/// Positioning, imagery and weather served from an [`ObservationFile`].
///
/// # Examples
///
/// ```
/// use wayfare_core::{LatLng, WeatherSource};
/// use wayfare_data::{ObservationFile, ObservationGrid};
///
/// let file: ObservationFile = serde_json::from_str(
///     r#"{"samples": [{"lat": 0.0, "lng": 0.0, "weather": {"uv": 4.0}}]}"#,
/// )?;
/// let grid = ObservationGrid::from_file(file)?;
/// let snapshot = grid.get_snapshot(LatLng { lat: 0.01, lng: 0.01 })?;
/// assert_eq!(snapshot.uv, Some(4.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ObservationGrid {
    samples: Vec<ObservationSample>,
    index: RTree<IndexedSample>,
    max_distance_km: f64,
}

impl ObservationGrid {
    /// Build a grid from a parsed document.
    ///
    /// # Errors
    /// Returns [`ObservationGridError::InvalidSample`] for a sample with an
    /// out-of-range coordinate and
    /// [`ObservationGridError::InvalidMaxDistance`] for a negative or
    /// non-finite coverage radius.
    pub fn from_file(file: ObservationFile) -> Result<Self, ObservationGridError> {
        let ObservationFile {
            samples,
            max_distance_km,
        } = file;
        if !max_distance_km.is_finite() || max_distance_km < 0.0 {
            return Err(ObservationGridError::InvalidMaxDistance {
                value: max_distance_km,
            });
        }
        let entries = samples
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                LatLng::new(sample.lat, sample.lng)
                    .map(|at| GeomWithData::new([at.lng, at.lat], index))
                    .map_err(|source| ObservationGridError::InvalidSample { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            samples,
            index: RTree::bulk_load(entries),
            max_distance_km,
        })
    }

    /// Read and index a JSON observation file.
    ///
    /// # Errors
    /// Returns [`ObservationGridError::Open`] when the file cannot be opened,
    /// [`ObservationGridError::Parse`] when it is not a valid document, and
    /// the validation errors of [`Self::from_file`].
    pub fn load(path: &Utf8Path) -> Result<Self, ObservationGridError> {
        let handle = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            ObservationGridError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let reader = std::io::BufReader::new(handle);
        let file: ObservationFile =
            serde_json::from_reader(reader).map_err(|source| ObservationGridError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let grid = Self::from_file(file)?;
        log::debug!("loaded {} observation samples from {path}", grid.len());
        Ok(grid)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Report whether the grid holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Coverage radius around each sample.
    #[must_use]
    pub const fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Nearest sample to `at` within the coverage radius.
    ///
    /// # Errors
    /// Returns [`SourceError::NoCoverage`] when no sample lies within
    /// `max_distance_km`.
    pub fn nearest(
        &self,
        at: LatLng,
        source_name: &'static str,
    ) -> Result<&ObservationSample, SourceError> {
        let no_coverage = || SourceError::NoCoverage {
            source_name,
            location: at.to_string(),
        };
        let (distance_km, sample) = Self::wrapped_longitudes(at.lng)
            .into_iter()
            .filter_map(|lng| self.index.nearest_neighbor(&[lng, at.lat]))
            .filter_map(|entry| self.samples.get(entry.data))
            .map(|sample| (haversine_km(at, sample.location()), sample))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .ok_or_else(no_coverage)?;
        if distance_km > self.max_distance_km {
            return Err(no_coverage());
        }
        Ok(sample)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "longitude is shifted by one full turn"
    )]
    fn wrapped_longitudes(lng: f64) -> [f64; 3] {
        [lng, lng - 360.0, lng + 360.0]
    }

    fn section<T: Clone>(
        &self,
        at: LatLng,
        source_name: &'static str,
        pick: impl FnOnce(&ObservationSample) -> Option<&T>,
    ) -> Result<T, SourceError> {
        let sample = self.nearest(at, source_name)?;
        pick(sample)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable {
                source_name,
                message: format!("no {source_name} data at sample {}", sample.location()),
            })
    }
}

impl PositioningSource for ObservationGrid {
    fn get_accuracy(&self, at: LatLng) -> Result<PositioningFix, SourceError> {
        self.section(at, "positioning", |sample| sample.positioning.as_ref())
    }
}

impl SurfaceImagerySource for ObservationGrid {
    fn get_indices(&self, at: LatLng, mode: ImageryMode) -> Result<SurfaceReading, SourceError> {
        if mode != ImageryMode::Composite {
            return Err(SourceError::Unavailable {
                source_name: "imagery",
                message: "recorded observations only carry composite indices".to_owned(),
            });
        }
        self.section(at, "imagery", |sample| sample.surface.as_ref())
    }
}

impl WeatherSource for ObservationGrid {
    fn get_snapshot(&self, at: LatLng) -> Result<WeatherSnapshot, SourceError> {
        self.section(at, "weather", |sample| sample.weather.as_ref())
    }
}
