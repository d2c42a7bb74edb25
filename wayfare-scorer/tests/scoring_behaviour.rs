//! Behaviour tests for the health and safety calculators.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};
use wayfare_core::{SafetyAssessment, SafetyRating, SurfaceMetrics, WeatherSnapshot};
use wayfare_scorer::{HealthScoreCalculator, SafetyRatingCalculator};

#[fixture]
fn metrics() -> RefCell<SurfaceMetrics> {
    RefCell::new(SurfaceMetrics::default())
}

#[fixture]
fn weather() -> RefCell<WeatherSnapshot> {
    RefCell::new(WeatherSnapshot::default())
}

#[fixture]
fn accuracy() -> Cell<f64> {
    Cell::new(0.0)
}

#[fixture]
fn health() -> Cell<f64> {
    Cell::new(f64::NAN)
}

#[fixture]
fn safety() -> RefCell<Option<SafetyAssessment>> {
    RefCell::new(None)
}

#[given("surface metrics with no readings")]
fn given_no_readings(#[from(metrics)] metrics: &RefCell<SurfaceMetrics>) {
    *metrics.borrow_mut() = SurfaceMetrics::default();
}

#[given("surface metrics with full vegetation")]
fn given_full_vegetation(#[from(metrics)] metrics: &RefCell<SurfaceMetrics>) {
    *metrics.borrow_mut() = SurfaceMetrics::new(1.0, 0.0, 0.0);
}

#[given("surface metrics with dense vegetation and little water or snow")]
fn given_clear_ground(#[from(metrics)] metrics: &RefCell<SurfaceMetrics>) {
    *metrics.borrow_mut() = SurfaceMetrics::new(0.75, 0.1, 0.05);
}

#[given("surface metrics with sparse vegetation, heavy water and snow")]
fn given_hazardous_ground(#[from(metrics)] metrics: &RefCell<SurfaceMetrics>) {
    *metrics.borrow_mut() = SurfaceMetrics::new(0.1, 0.5, 0.3);
}

#[given("an empty weather snapshot")]
fn given_empty_weather(#[from(weather)] weather: &RefCell<WeatherSnapshot>) {
    *weather.borrow_mut() = WeatherSnapshot::default();
}

#[given("a weather snapshot with 10 km visibility")]
fn given_clear_visibility(#[from(weather)] weather: &RefCell<WeatherSnapshot>) {
    *weather.borrow_mut() = WeatherSnapshot {
        visibility_km: Some(10.0),
        ..WeatherSnapshot::default()
    };
}

#[given("a positioning accuracy of 2 metres")]
fn given_good_fix(#[from(accuracy)] accuracy: &Cell<f64>) {
    accuracy.set(2.0);
}

#[given("a positioning accuracy of 20 metres")]
fn given_poor_fix(#[from(accuracy)] accuracy: &Cell<f64>) {
    accuracy.set(20.0);
}

#[when("I compute the health score")]
fn when_compute_health(
    #[from(metrics)] metrics: &RefCell<SurfaceMetrics>,
    #[from(weather)] weather: &RefCell<WeatherSnapshot>,
    #[from(health)] health: &Cell<f64>,
) {
    let result = HealthScoreCalculator::new().compute(&metrics.borrow(), &weather.borrow());
    health.set(result.score);
}

#[when("I rate the location")]
fn when_rate(
    #[from(metrics)] metrics: &RefCell<SurfaceMetrics>,
    #[from(accuracy)] accuracy: &Cell<f64>,
    #[from(safety)] safety: &RefCell<Option<SafetyAssessment>>,
) {
    let assessment = SafetyRatingCalculator::new().assess(accuracy.get(), &metrics.borrow());
    *safety.borrow_mut() = Some(assessment);
}

#[then("the health score is {expected}")]
fn then_health(expected: f64, #[from(health)] health: &Cell<f64>) {
    assert!((health.get() - expected).abs() <= 1e-9, "got {}", health.get());
}

#[then("the safety score is {expected}")]
fn then_safety_score(expected: f64, #[from(safety)] safety: &RefCell<Option<SafetyAssessment>>) {
    let score = safety.borrow().map(|assessment| assessment.score);
    assert!(
        score.is_some_and(|score| (score - expected).abs() <= 1e-9),
        "got {score:?}"
    );
}

#[then("the safety rating is HIGH")]
fn then_high(#[from(safety)] safety: &RefCell<Option<SafetyAssessment>>) {
    assert_eq!(
        safety.borrow().map(|assessment| assessment.rating),
        Some(SafetyRating::High)
    );
}

#[then("the safety rating is LOW")]
fn then_low(#[from(safety)] safety: &RefCell<Option<SafetyAssessment>>) {
    assert_eq!(
        safety.borrow().map(|assessment| assessment.rating),
        Some(SafetyRating::Low)
    );
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn baseline_health(
    metrics: RefCell<SurfaceMetrics>,
    weather: RefCell<WeatherSnapshot>,
    health: Cell<f64>,
) {
    let _ = (metrics, weather, health);
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn vegetated_health(
    metrics: RefCell<SurfaceMetrics>,
    weather: RefCell<WeatherSnapshot>,
    health: Cell<f64>,
) {
    let _ = (metrics, weather, health);
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn high_safety(
    metrics: RefCell<SurfaceMetrics>,
    accuracy: Cell<f64>,
    safety: RefCell<Option<SafetyAssessment>>,
) {
    let _ = (metrics, accuracy, safety);
}

#[scenario(path = "tests/features/scoring.feature", index = 3)]
fn low_safety(
    metrics: RefCell<SurfaceMetrics>,
    accuracy: Cell<f64>,
    safety: RefCell<Option<SafetyAssessment>>,
) {
    let _ = (metrics, accuracy, safety);
}
