//! Weather observations at a coordinate.

/// A sparse weather observation.
///
/// Providers fill whatever they know; every field may be absent. Consumers
/// decide their own defaults (the health model documents its defaults in
/// `wayfare-scorer`).
///
/// # Examples
/// ```
/// use wayfare_core::WeatherSnapshot;
///
/// let snapshot = WeatherSnapshot {
///     precip_mm: Some(2.5),
///     ..WeatherSnapshot::default()
/// };
/// assert!(snapshot.visibility_km.is_none());
/// assert!(!snapshot.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WeatherSnapshot {
    /// Precipitation in millimetres.
    pub precip_mm: Option<f64>,
    /// Visibility in kilometres.
    pub visibility_km: Option<f64>,
    /// Fine particulate matter concentration (µg/m³).
    pub air_quality_pm2_5: Option<f64>,
    /// UV index.
    pub uv: Option<f64>,
    /// Whether the sun is up at the coordinate.
    pub is_day: Option<bool>,
    /// Air temperature in degrees Celsius.
    pub temperature_c: Option<f64>,
    /// Wind speed in kilometres per hour.
    pub wind_kph: Option<f64>,
    /// Free-text condition such as "Light rain".
    pub condition: Option<String>,
}

impl WeatherSnapshot {
    /// Report whether no field carries a value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.precip_mm.is_none()
            && self.visibility_km.is_none()
            && self.air_quality_pm2_5.is_none()
            && self.uv.is_none()
            && self.is_day.is_none()
            && self.temperature_c.is_none()
            && self.wind_kph.is_none()
            && self.condition.is_none()
    }
}
