//! Time-bounded data-source calls.
//!
//! Sources are blocking. [`Deadline`] runs each call on a short-lived worker
//! thread and stops waiting once the budget elapses; the worker is detached
//! and its late answer is discarded. Calls are never retried.

use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wayfare_core::{
    ImageryMode, LatLng, PositioningFix, PositioningSource, SourceError, SurfaceImagerySource,
    SurfaceReading, WeatherSnapshot, WeatherSource,
};

/// Default imagery budget in seconds.
const DEFAULT_IMAGERY_SECS: u64 = 120;

/// Default positioning and weather budget in seconds.
const DEFAULT_LOOKUP_SECS: u64 = 30;

/// Per-source time budgets, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceTimeouts {
    /// Budget for imagery requests.
    pub imagery_secs: u64,
    /// Budget for positioning requests.
    pub positioning_secs: u64,
    /// Budget for weather requests.
    pub weather_secs: u64,
}

impl Default for SourceTimeouts {
    fn default() -> Self {
        Self {
            imagery_secs: DEFAULT_IMAGERY_SECS,
            positioning_secs: DEFAULT_LOOKUP_SECS,
            weather_secs: DEFAULT_LOOKUP_SECS,
        }
    }
}

/// Wraps a source so every call completes within a fixed budget.
///
/// # Examples
///
/// ```
/// use wayfare_core::test_support::StubWeather;
/// use wayfare_core::{LatLng, WeatherSource};
/// use wayfare_data::{Deadline, SourceTimeouts};
///
/// let weather = Deadline::weather(StubWeather::empty(), &SourceTimeouts::default());
/// let snapshot = weather.get_snapshot(LatLng { lat: 0.0, lng: 0.0 })?;
/// assert!(snapshot.is_empty());
/// # Ok::<(), wayfare_core::SourceError>(())
/// ```
#[derive(Debug)]
pub struct Deadline<S> {
    inner: Arc<S>,
    source_name: &'static str,
    timeout: Duration,
}

impl<S> Clone for Deadline<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            source_name: self.source_name,
            timeout: self.timeout,
        }
    }
}

impl<S> Deadline<S>
where
    S: Send + Sync + 'static,
{
    /// Bound calls to `inner` by `timeout`, reporting overruns as `source_name`.
    #[must_use]
    pub fn new(inner: S, source_name: &'static str, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            source_name,
            timeout,
        }
    }

    /// Bound a positioning source by its configured budget.
    #[must_use]
    pub fn positioning(inner: S, timeouts: &SourceTimeouts) -> Self {
        Self::new(
            inner,
            "positioning",
            Duration::from_secs(timeouts.positioning_secs),
        )
    }

    /// Bound an imagery source by its configured budget.
    #[must_use]
    pub fn imagery(inner: S, timeouts: &SourceTimeouts) -> Self {
        Self::new(inner, "imagery", Duration::from_secs(timeouts.imagery_secs))
    }

    /// Bound a weather source by its configured budget.
    #[must_use]
    pub fn weather(inner: S, timeouts: &SourceTimeouts) -> Self {
        Self::new(inner, "weather", Duration::from_secs(timeouts.weather_secs))
    }

    /// Time budget per call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn call<T, F>(&self, request: F) -> Result<T, SourceError>
    where
        T: Send + 'static,
        F: FnOnce(&S) -> Result<T, SourceError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let source_name = self.source_name;
        let (sender, receiver) = mpsc::sync_channel(1);
        thread::Builder::new()
            .name(format!("wayfare-{source_name}"))
            .spawn(move || {
                if sender.send(request(&inner)).is_err() {
                    log::debug!("{source_name} answered after its deadline; result dropped");
                }
            })
            .map_err(|error| SourceError::Unavailable {
                source_name,
                message: format!("failed to spawn worker: {error}"),
            })?;

        receiver
            .recv_timeout(self.timeout)
            .map_err(|error| match error {
                mpsc::RecvTimeoutError::Timeout => {
                    log::warn!(
                        "{source_name} exceeded its {}s budget",
                        self.timeout.as_secs()
                    );
                    SourceError::Timeout {
                        source_name,
                        timeout_secs: self.timeout.as_secs(),
                    }
                }
                mpsc::RecvTimeoutError::Disconnected => SourceError::Unavailable {
                    source_name,
                    message: "worker exited without answering".to_owned(),
                },
            })?
    }
}

impl<S> PositioningSource for Deadline<S>
where
    S: PositioningSource + 'static,
{
    fn get_accuracy(&self, at: LatLng) -> Result<PositioningFix, SourceError> {
        self.call(move |inner| inner.get_accuracy(at))
    }
}

impl<S> SurfaceImagerySource for Deadline<S>
where
    S: SurfaceImagerySource + 'static,
{
    fn get_indices(&self, at: LatLng, mode: ImageryMode) -> Result<SurfaceReading, SourceError> {
        self.call(move |inner| inner.get_indices(at, mode))
    }
}

impl<S> WeatherSource for Deadline<S>
where
    S: WeatherSource + 'static,
{
    fn get_snapshot(&self, at: LatLng) -> Result<WeatherSnapshot, SourceError> {
        self.call(move |inner| inner.get_snapshot(at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use wayfare_core::test_support::{StubImagery, StubPositioning};
    use wayfare_core::SurfaceMetrics;

    const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };

    /// Weather source that answers only after `delay`.
    struct SlowWeather {
        delay: Duration,
    }

    impl WeatherSource for SlowWeather {
        fn get_snapshot(&self, _at: LatLng) -> Result<WeatherSnapshot, SourceError> {
            thread::sleep(self.delay);
            Ok(WeatherSnapshot::default())
        }
    }

    /// Positioning source whose worker dies mid-call.
    struct PanickingPositioning;

    impl PositioningSource for PanickingPositioning {
        #[expect(clippy::panic_in_result_fn, reason = "simulates a crashing collaborator")]
        fn get_accuracy(&self, _at: LatLng) -> Result<PositioningFix, SourceError> {
            panic!("simulated collaborator crash");
        }
    }

    #[rstest]
    fn default_budgets() {
        let timeouts = SourceTimeouts::default();
        assert_eq!(timeouts.imagery_secs, 120);
        assert_eq!(timeouts.positioning_secs, 30);
        assert_eq!(timeouts.weather_secs, 30);
    }

    #[rstest]
    fn fast_sources_pass_through() {
        let timeouts = SourceTimeouts::default();
        let positioning = Deadline::positioning(StubPositioning::with_accuracy(4.0), &timeouts);
        let imagery = Deadline::imagery(
            StubImagery::with_metrics(SurfaceMetrics::new(0.4, 0.0, 0.0)),
            &timeouts,
        );
        assert_eq!(positioning.get_accuracy(ORIGIN).map(|fix| fix.accuracy_m), Ok(4.0));
        assert_eq!(
            imagery
                .get_indices(ORIGIN, ImageryMode::Composite)
                .map(|reading| reading.metrics.vegetation_index),
            Ok(0.4)
        );
        assert_eq!(imagery.timeout(), Duration::from_secs(120));
    }

    #[rstest]
    fn source_errors_are_forwarded() {
        let error = SourceError::Unavailable {
            source_name: "positioning",
            message: "offline".to_owned(),
        };
        let positioning = Deadline::new(
            StubPositioning::with_error(error.clone()),
            "positioning",
            Duration::from_secs(5),
        );
        assert_eq!(positioning.get_accuracy(ORIGIN), Err(error));
    }

    #[rstest]
    fn slow_sources_time_out() {
        let weather = Deadline::new(
            SlowWeather {
                delay: Duration::from_secs(2),
            },
            "weather",
            Duration::from_millis(50),
        );
        assert_eq!(
            weather.get_snapshot(ORIGIN),
            Err(SourceError::Timeout {
                source_name: "weather",
                timeout_secs: 0,
            })
        );
    }

    #[rstest]
    fn crashed_worker_is_unavailable() {
        let positioning = Deadline::new(PanickingPositioning, "positioning", Duration::from_secs(5));
        assert!(matches!(
            positioning.get_accuracy(ORIGIN),
            Err(SourceError::Unavailable {
                source_name: "positioning",
                ..
            })
        ));
    }
}
