//! Errors raised while loading an observation grid.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by [`ObservationGrid::load`](super::ObservationGrid::load).
#[derive(Debug, Error)]
pub enum ObservationGridError {
    /// Opening the observation file failed.
    #[error("failed to open observation file at {path}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The observation file was not valid JSON of the expected shape.
    #[error("failed to parse observation file at {path}")]
    Parse {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A sample carried an out-of-range coordinate.
    #[error("sample {index} has an invalid coordinate")]
    InvalidSample {
        /// Position of the sample in the file.
        index: usize,
        /// Validation failure.
        #[source]
        source: wayfare_core::CoordinateError,
    },
    /// `max_distance_km` was negative or not finite.
    #[error("max_distance_km must be a non-negative finite number, got {value}")]
    InvalidMaxDistance {
        /// Value found in the file.
        value: f64,
    },
}
