use thiserror::Error;

/// Errors reported by data-source implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The call did not complete within its time budget.
    #[error("{source_name} did not respond within {timeout_secs}s")]
    Timeout {
        /// Name of the source that timed out.
        source_name: &'static str,
        /// Budget that elapsed, in whole seconds.
        timeout_secs: u64,
    },
    /// The source has no data close enough to the requested coordinate.
    #[error("{source_name} has no coverage at {location}")]
    NoCoverage {
        /// Name of the source without coverage.
        source_name: &'static str,
        /// Formatted coordinate that was requested.
        location: String,
    },
    /// The source could not be reached or failed internally.
    #[error("{source_name} is unavailable: {message}")]
    Unavailable {
        /// Name of the failing source.
        source_name: &'static str,
        /// Description of the failure.
        message: String,
    },
    /// The source answered with data that could not be interpreted.
    #[error("{source_name} returned an invalid response: {message}")]
    InvalidResponse {
        /// Name of the source.
        source_name: &'static str,
        /// Description of the problem.
        message: String,
    },
}

impl SourceError {
    /// Name of the source that raised the error.
    #[must_use]
    pub const fn source_name(&self) -> &'static str {
        match self {
            Self::Timeout { source_name, .. }
            | Self::NoCoverage { source_name, .. }
            | Self::Unavailable { source_name, .. }
            | Self::InvalidResponse { source_name, .. } => source_name,
        }
    }
}
