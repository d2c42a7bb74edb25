//! Deterministic data-source doubles for unit and behaviour tests.
//!
//! Every stub returns a pre-configured value or error and never performs
//! I/O. Stubs can additionally be told to fail at specific coordinates, which
//! lets route tests exercise per-waypoint fallbacks.

use crate::{
    ImageryMode, LatLng, PositioningFix, PositioningSource, SourceError, SurfaceImagerySource,
    SurfaceMetrics, SurfaceReading, WeatherSnapshot, WeatherSource,
};

#[derive(Debug, Clone)]
enum StubResponse<T> {
    Value(T),
    Error(SourceError),
}

#[derive(Debug, Clone)]
struct Stub<T> {
    name: &'static str,
    response: StubResponse<T>,
    fail_at: Vec<LatLng>,
}

impl<T: Clone> Stub<T> {
    const fn value(name: &'static str, value: T) -> Self {
        Self {
            name,
            response: StubResponse::Value(value),
            fail_at: Vec::new(),
        }
    }

    const fn error(name: &'static str, error: SourceError) -> Self {
        Self {
            name,
            response: StubResponse::Error(error),
            fail_at: Vec::new(),
        }
    }

    fn respond(&self, at: LatLng) -> Result<T, SourceError> {
        if self.fail_at.contains(&at) {
            return Err(SourceError::Unavailable {
                source_name: self.name,
                message: format!("stub configured to fail at {at}"),
            });
        }
        match &self.response {
            StubResponse::Value(value) => Ok(value.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// Stub [`PositioningSource`].
#[derive(Debug, Clone)]
pub struct StubPositioning(Stub<PositioningFix>);

impl StubPositioning {
    /// Return a fix with the given accuracy for every coordinate.
    #[must_use]
    pub const fn with_accuracy(accuracy_m: f64) -> Self {
        Self::with_fix(PositioningFix::with_accuracy(accuracy_m))
    }

    /// Return `fix` for every coordinate.
    #[must_use]
    pub const fn with_fix(fix: PositioningFix) -> Self {
        Self(Stub::value("positioning", fix))
    }

    /// Return `error` for every coordinate.
    #[must_use]
    pub const fn with_error(error: SourceError) -> Self {
        Self(Stub::error("positioning", error))
    }

    /// Fail with [`SourceError::Unavailable`] when queried at `at`.
    #[must_use]
    pub fn failing_at(mut self, at: LatLng) -> Self {
        self.0.fail_at.push(at);
        self
    }
}

impl PositioningSource for StubPositioning {
    fn get_accuracy(&self, at: LatLng) -> Result<PositioningFix, SourceError> {
        self.0.respond(at)
    }
}

/// Stub [`SurfaceImagerySource`]. The requested mode is ignored.
#[derive(Debug, Clone)]
pub struct StubImagery(Stub<SurfaceReading>);

impl StubImagery {
    /// Return `metrics` for every coordinate.
    #[must_use]
    pub const fn with_metrics(metrics: SurfaceMetrics) -> Self {
        Self::with_reading(SurfaceReading {
            metrics,
            image_url: None,
            bbox: None,
        })
    }

    /// Return `reading` for every coordinate.
    #[must_use]
    pub const fn with_reading(reading: SurfaceReading) -> Self {
        Self(Stub::value("imagery", reading))
    }

    /// Return `error` for every coordinate.
    #[must_use]
    pub const fn with_error(error: SourceError) -> Self {
        Self(Stub::error("imagery", error))
    }

    /// Fail with [`SourceError::Unavailable`] when queried at `at`.
    #[must_use]
    pub fn failing_at(mut self, at: LatLng) -> Self {
        self.0.fail_at.push(at);
        self
    }
}

impl SurfaceImagerySource for StubImagery {
    fn get_indices(&self, at: LatLng, _mode: ImageryMode) -> Result<SurfaceReading, SourceError> {
        self.0.respond(at)
    }
}

/// Stub [`WeatherSource`].
#[derive(Debug, Clone)]
pub struct StubWeather(Stub<WeatherSnapshot>);

impl StubWeather {
    /// Return `snapshot` for every coordinate.
    #[must_use]
    pub const fn with_snapshot(snapshot: WeatherSnapshot) -> Self {
        Self(Stub::value("weather", snapshot))
    }

    /// Return an empty snapshot for every coordinate.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_snapshot(WeatherSnapshot::default())
    }

    /// Return `error` for every coordinate.
    #[must_use]
    pub const fn with_error(error: SourceError) -> Self {
        Self(Stub::error("weather", error))
    }

    /// Fail with [`SourceError::Unavailable`] when queried at `at`.
    #[must_use]
    pub fn failing_at(mut self, at: LatLng) -> Self {
        self.0.fail_at.push(at);
        self
    }
}

impl WeatherSource for StubWeather {
    fn get_snapshot(&self, at: LatLng) -> Result<WeatherSnapshot, SourceError> {
        self.0.respond(at)
    }
}
