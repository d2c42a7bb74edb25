//! Data-source adapters for the Wayfare engine.
//!
//! - [`ObservationGrid`] serves positioning, imagery and weather from a
//!   JSON file of observation samples, resolving each query to the nearest
//!   sample.
//! - [`Deadline`] bounds every call to a wrapped source with a timeout so a
//!   slow collaborator degrades into
//!   [`SourceError::Timeout`](wayfare_core::SourceError::Timeout) instead of
//!   stalling the request.

#![forbid(unsafe_code)]

pub mod deadline;
pub mod observations;

pub use deadline::{Deadline, SourceTimeouts};
pub use observations::{
    DEFAULT_MAX_DISTANCE_KM, ObservationFile, ObservationGrid, ObservationGridError,
    ObservationSample,
};
