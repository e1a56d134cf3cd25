//! Browser environment: `performance.now()` and timer-backed sleep.

use std::{cmp::Ordering, future::Future, ops::Sub, time::Duration};

use boardkeys_core::Environment;
use gloo::timers::future::TimeoutFuture;
use web_sys::{Performance, Window};

/// Milliseconds since page load, from `performance.now()`.
#[derive(Debug, Clone, Copy)]
pub struct WebInstant(f64);

impl WebInstant {
    /// Instant at `millis` since page load.
    pub fn from_millis(millis: f64) -> Self {
        Self(millis)
    }
}

impl PartialEq for WebInstant {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WebInstant {}

impl PartialOrd for WebInstant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WebInstant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Sub for WebInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        Duration::from_secs_f64((self.0 - rhs.0).max(0.0) / 1000.0)
    }
}

/// Environment backed by the page's clock and timers.
#[derive(Debug, Clone)]
pub struct WebEnv {
    performance: Option<Performance>,
}

impl WebEnv {
    /// Environment for `window`. Falls back to a frozen clock if the page has
    /// no `performance` object.
    pub fn new(window: &Window) -> Self {
        Self { performance: window.performance() }
    }
}

impl Environment for WebEnv {
    type Instant = WebInstant;

    fn now(&self) -> WebInstant {
        WebInstant(self.performance.as_ref().map_or(0.0, Performance::now))
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis)
    }
}
