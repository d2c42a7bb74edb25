//! Errors raised by destination analysis.

use thiserror::Error;
use wayfare_core::{LatLng, SourceError};

/// Failure to gather the inputs for one coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A data source failed while analysing `location`.
    #[error("analysis at {location} failed: {source}")]
    Source {
        /// Coordinate being analysed.
        location: LatLng,
        /// Underlying data-source error.
        source: SourceError,
    },
}

impl AnalysisError {
    /// Wrap a data-source error raised at `location`.
    #[must_use]
    pub const fn source_at(location: LatLng, source: SourceError) -> Self {
        Self::Source { location, source }
    }

    /// Name of the data source that failed.
    #[must_use]
    pub const fn source_name(&self) -> &'static str {
        match self {
            Self::Source { source, .. } => source.source_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn message_names_location_and_source() {
        let error = AnalysisError::source_at(
            LatLng { lat: 1.0, lng: 2.0 },
            SourceError::Unavailable {
                source_name: "weather",
                message: "offline".to_owned(),
            },
        );
        assert_eq!(error.source_name(), "weather");
        assert_eq!(
            error.to_string(),
            "analysis at (1.00000, 2.00000) failed: weather is unavailable: offline"
        );
    }
}
