//! Positioning quality reported by a GNSS collaborator.

/// Positioning quality at a coordinate.
///
/// Only `accuracy_m` feeds the safety model; the remaining fields are carried
/// through to the analysis record for display.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositioningFix {
    /// Estimated horizontal accuracy in metres (lower is better).
    pub accuracy_m: f64,
    /// Altitude above sea level in metres, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub altitude_m: Option<f64>,
    /// Number of satellites used for the fix, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub satellite_count: Option<u32>,
    /// Horizontal dilution of precision, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hdop: Option<f64>,
}

impl PositioningFix {
    /// Construct a fix carrying only an accuracy estimate.
    ///
    /// # Examples
    /// ```
    /// use wayfare_core::PositioningFix;
    ///
    /// let fix = PositioningFix::with_accuracy(3.5);
    /// assert_eq!(fix.accuracy_m, 3.5);
    /// assert!(fix.satellite_count.is_none());
    /// ```
    #[must_use]
    pub const fn with_accuracy(accuracy_m: f64) -> Self {
        Self {
            accuracy_m,
            altitude_m: None,
            satellite_count: None,
            hdop: None,
        }
    }
}
