//! Traveller-facing recommendations derived from one analysis.

use serde::{Deserialize, Serialize};
use wayfare_core::{
    HealthScoreResult, PositioningFix, RiskLevel, SafetyAssessment, SafetyRating, SurfaceMetrics,
    WeatherSnapshot,
};

/// Urgency of an alert. Sorts most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertPriority {
    /// Act before travelling.
    Critical,
    /// Plan around the condition.
    Warning,
    /// Worth knowing.
    Info,
}

/// Subject of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertCategory {
    /// Physical safety of the location.
    Safety,
    /// Surface and environmental conditions.
    Environment,
    /// Current weather.
    Weather,
    /// Air pollution.
    AirQuality,
    /// GPS quality.
    Positioning,
}

/// One tagged alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Urgency keyword.
    pub priority: AlertPriority,
    /// Subject keyword.
    pub category: AlertCategory,
    /// Human-readable text.
    pub message: String,
}

impl Alert {
    fn new(priority: AlertPriority, category: AlertCategory, message: &str) -> Self {
        Self {
            priority,
            category,
            message: message.to_owned(),
        }
    }
}

/// Thresholds behind every recommendation rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Health below this is [`RiskLevel::High`] and raises a critical alert.
    pub high_risk_health: f64,
    /// Health below this is [`RiskLevel::Medium`].
    pub medium_risk_health: f64,
    /// Precipitation (mm) above which a weather warning is raised.
    pub heavy_precip_mm: f64,
    /// Visibility (km) below which a weather warning is raised.
    pub poor_visibility_km: f64,
    /// PM2.5 above which an air quality warning is raised.
    pub unhealthy_pm2_5: f64,
    /// UV index above which a warning is raised and midday travel is discouraged.
    pub extreme_uv: f64,
    /// Water index above which a flooding warning is raised.
    pub flood_water_index: f64,
    /// Snow index above which a snow warning is raised.
    pub heavy_snow_index: f64,
    /// GPS accuracy (m) above which a positioning notice is raised.
    pub poor_accuracy_m: f64,
    /// Temperature (°C) below which insulated clothing is suggested.
    pub cold_c: f64,
    /// Temperature (°C) above which extra water and cooler hours are suggested.
    pub hot_c: f64,
    /// UV index above which sun protection is suggested.
    pub sun_protection_uv: f64,
    /// Snow index above which traction devices are suggested.
    pub traction_snow_index: f64,
    /// Water index above which waterproof footwear is suggested.
    pub wet_ground_water_index: f64,
    /// Precipitation (mm) above which a delayed departure is suggested.
    pub delay_precip_mm: f64,
    /// Visibility (km) below which waiting for clearer air is suggested.
    pub hazy_visibility_km: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            high_risk_health: 30.0,
            medium_risk_health: 60.0,
            heavy_precip_mm: 10.0,
            poor_visibility_km: 1.0,
            unhealthy_pm2_5: 35.0,
            extreme_uv: 8.0,
            flood_water_index: 0.5,
            heavy_snow_index: 0.5,
            poor_accuracy_m: 15.0,
            cold_c: 5.0,
            hot_c: 30.0,
            sun_protection_uv: 5.0,
            traction_snow_index: 0.3,
            wet_ground_water_index: 0.3,
            delay_precip_mm: 5.0,
            hazy_visibility_km: 2.0,
        }
    }
}

/// Inputs the recommendation rules look at.
#[derive(Debug, Clone, Copy)]
pub struct Observation<'a> {
    /// Health score of the location.
    pub health: &'a HealthScoreResult,
    /// Safety assessment of the location.
    pub safety: &'a SafetyAssessment,
    /// Weather at the location.
    pub weather: &'a WeatherSnapshot,
    /// Surface indices, if imagery was available.
    pub surface: Option<&'a SurfaceMetrics>,
    /// Positioning fix, if available.
    pub positioning: Option<&'a PositioningFix>,
}

/// Recommendations for travelling to a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Risk bucket derived from the health score.
    pub risk_level: RiskLevel,
    /// Alerts ordered from most to least urgent.
    pub priority_alerts: Vec<Alert>,
    /// Suggested equipment.
    pub equipment: Vec<String>,
    /// Suggested times of day for travel.
    pub travel_times: Vec<String>,
}

const STANDARD_KIT: &str = "Standard travel kit";
const ANY_TIME: &str = "Suitable for travel at any time of day";

impl Recommendations {
    /// Apply the recommendation rules to `observation`.
    ///
    /// Rules that depend on an absent weather field or missing imagery are
    /// skipped rather than guessed.
    ///
    /// # Examples
    /// ```
    /// use wayfare_core::{HealthScoreResult, RiskLevel, SafetyAssessment, WeatherSnapshot};
    /// use wayfare_planner::{Observation, RecommendationThresholds, Recommendations};
    ///
    /// let health = HealthScoreResult::fallback();
    /// let weather = WeatherSnapshot::default();
    /// let observation = Observation {
    ///     health: &health,
    ///     safety: &SafetyAssessment::FALLBACK,
    ///     weather: &weather,
    ///     surface: None,
    ///     positioning: None,
    /// };
    /// let advice = Recommendations::derive(&observation, &RecommendationThresholds::default());
    /// assert_eq!(advice.risk_level, RiskLevel::Medium);
    /// assert_eq!(advice.equipment, ["First aid kit"]);
    /// ```
    #[must_use]
    pub fn derive(observation: &Observation<'_>, thresholds: &RecommendationThresholds) -> Self {
        Self {
            risk_level: risk_level(observation.health.score, thresholds),
            priority_alerts: alerts(observation, thresholds),
            equipment: equipment(observation, thresholds),
            travel_times: travel_times(observation.weather, thresholds),
        }
    }
}

fn risk_level(health: f64, thresholds: &RecommendationThresholds) -> RiskLevel {
    if health < thresholds.high_risk_health {
        RiskLevel::High
    } else if health < thresholds.medium_risk_health {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn above(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|value| value > threshold)
}

fn below(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|value| value < threshold)
}

fn alerts(observation: &Observation<'_>, t: &RecommendationThresholds) -> Vec<Alert> {
    use AlertCategory as C;
    use AlertPriority as P;

    let weather = observation.weather;
    let water = observation.surface.map(|surface| surface.water_index);
    let snow = observation.surface.map(|surface| surface.snow_index);
    let accuracy = observation.positioning.map(|fix| fix.accuracy_m);

    let rules = [
        (
            observation.safety.rating == SafetyRating::Low,
            P::Critical,
            C::Safety,
            "Low safety rating: terrain or positioning conditions are hazardous",
        ),
        (
            observation.health.score < t.high_risk_health,
            P::Critical,
            C::Environment,
            "Poor environmental conditions at destination",
        ),
        (
            above(weather.precip_mm, t.heavy_precip_mm),
            P::Warning,
            C::Weather,
            "Heavy precipitation expected",
        ),
        (
            below(weather.visibility_km, t.poor_visibility_km),
            P::Warning,
            C::Weather,
            "Very low visibility",
        ),
        (
            above(weather.air_quality_pm2_5, t.unhealthy_pm2_5),
            P::Warning,
            C::AirQuality,
            "Unhealthy air quality; limit strenuous activity",
        ),
        (
            above(weather.uv, t.extreme_uv),
            P::Warning,
            C::Weather,
            "Extreme UV index",
        ),
        (
            above(water, t.flood_water_index),
            P::Warning,
            C::Environment,
            "Significant surface water detected; risk of flooding",
        ),
        (
            above(snow, t.heavy_snow_index),
            P::Warning,
            C::Environment,
            "Heavy snow cover detected",
        ),
        (
            above(accuracy, t.poor_accuracy_m),
            P::Info,
            C::Positioning,
            "Limited GPS accuracy; carry offline maps",
        ),
    ];

    let mut alerts: Vec<Alert> = rules
        .into_iter()
        .filter(|(fires, ..)| *fires)
        .map(|(_, priority, category, message)| Alert::new(priority, category, message))
        .collect();
    alerts.sort_by_key(|alert| alert.priority);
    alerts
}

fn equipment(observation: &Observation<'_>, t: &RecommendationThresholds) -> Vec<String> {
    let weather = observation.weather;
    let water = observation.surface.map(|surface| surface.water_index);
    let snow = observation.surface.map(|surface| surface.snow_index);

    let rules = [
        (below(weather.temperature_c, t.cold_c), "Insulated clothing"),
        (above(weather.temperature_c, t.hot_c), "Extra drinking water"),
        (above(weather.precip_mm, 0.0), "Waterproof jacket"),
        (above(weather.uv, t.sun_protection_uv), "Sunscreen and sunglasses"),
        (above(snow, t.traction_snow_index), "Traction devices for snow and ice"),
        (above(water, t.wet_ground_water_index), "Waterproof footwear"),
        (
            observation.safety.rating == SafetyRating::Low,
            "Satellite communicator",
        ),
        (
            observation.safety.rating == SafetyRating::Medium,
            "First aid kit",
        ),
    ];
    collect_or(rules, STANDARD_KIT)
}

fn travel_times(weather: &WeatherSnapshot, t: &RecommendationThresholds) -> Vec<String> {
    let rules = [
        (
            weather.is_day == Some(false),
            "Wait for daylight before setting out",
        ),
        (
            above(weather.uv, t.extreme_uv),
            "Avoid travel between 11:00 and 15:00",
        ),
        (
            above(weather.temperature_c, t.hot_c),
            "Travel in the early morning or late afternoon",
        ),
        (
            above(weather.precip_mm, t.delay_precip_mm),
            "Delay departure until precipitation eases",
        ),
        (
            below(weather.visibility_km, t.hazy_visibility_km),
            "Wait for visibility to improve",
        ),
    ];
    collect_or(rules, ANY_TIME)
}

fn collect_or<const N: usize>(rules: [(bool, &str); N], otherwise: &str) -> Vec<String> {
    let picked: Vec<String> = rules
        .into_iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, text)| text.to_owned())
        .collect();
    if picked.is_empty() {
        vec![otherwise.to_owned()]
    } else {
        picked
    }
}
