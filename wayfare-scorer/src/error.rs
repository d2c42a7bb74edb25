//! Errors raised while validating scoring configuration.

use thiserror::Error;

/// Errors raised when a weight or penalty table is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A configured value was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Rating thresholds were not ordered `medium <= high`.
    #[error("safety thresholds must satisfy medium <= high")]
    UnorderedThresholds,
}
