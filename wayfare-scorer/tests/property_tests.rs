//! Property-based tests for the scoring models.
//!
//! # Invariants tested
//!
//! - **Range:** health and safety scores stay within `0..=100` for any input,
//!   including non-finite ones.
//! - **Determinism:** calling a calculator twice yields identical output.
//! - **Ordering:** the safety rating agrees with the score thresholds.

use proptest::prelude::*;
use wayfare_core::{SafetyRating, SurfaceMetrics, WeatherSnapshot};
use wayfare_scorer::{HealthScoreCalculator, SafetyRatingCalculator};

fn any_reading() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1_000.0..1_000.0_f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn metrics_strategy() -> impl Strategy<Value = SurfaceMetrics> {
    (any_reading(), any_reading(), any_reading())
        .prop_map(|(veg, water, snow)| SurfaceMetrics::new(veg, water, snow))
}

fn weather_strategy() -> impl Strategy<Value = WeatherSnapshot> {
    (
        proptest::option::of(any_reading()),
        proptest::option::of(any_reading()),
        proptest::option::of(any_reading()),
        proptest::option::of(any_reading()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(precip_mm, visibility_km, air_quality_pm2_5, uv, is_day)| {
            WeatherSnapshot {
                precip_mm,
                visibility_km,
                air_quality_pm2_5,
                uv,
                is_day,
                ..WeatherSnapshot::default()
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the health score is always within `0..=100`.
    #[test]
    fn health_score_is_bounded(metrics in metrics_strategy(), weather in weather_strategy()) {
        let result = HealthScoreCalculator::new().compute(&metrics, &weather);
        prop_assert!((0.0..=100.0).contains(&result.score), "score {}", result.score);
        prop_assert_eq!(result.components.len(), 8);
    }

    /// Property: health scoring is deterministic.
    #[test]
    fn health_score_is_idempotent(metrics in metrics_strategy(), weather in weather_strategy()) {
        let calculator = HealthScoreCalculator::new();
        let first = calculator.compute(&metrics, &weather);
        let second = calculator.compute(&metrics, &weather);
        prop_assert_eq!(first.score.to_bits(), second.score.to_bits());
        prop_assert_eq!(first.components.len(), second.components.len());
    }

    /// Property: the safety score is within `0..=100` and rated consistently.
    #[test]
    fn safety_score_is_bounded(accuracy in any_reading(), metrics in metrics_strategy()) {
        let calculator = SafetyRatingCalculator::new();
        let assessment = calculator.assess(accuracy, &metrics);
        prop_assert!((0.0..=100.0).contains(&assessment.score));
        let expected = if assessment.score >= 70.0 {
            SafetyRating::High
        } else if assessment.score >= 40.0 {
            SafetyRating::Medium
        } else {
            SafetyRating::Low
        };
        prop_assert_eq!(assessment.rating, expected);
        prop_assert_eq!(calculator.compute(accuracy, &metrics), expected);
    }
}
