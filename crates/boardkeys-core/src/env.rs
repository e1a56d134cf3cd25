//! Environment abstraction for deterministic testing.
//!
//! Decouples input handling and move execution from the host's clock. The
//! browser binding uses `performance.now()` and real timers; the simulation
//! harness uses a virtual clock so delays cost nothing in tests.

use std::{future::Future, ops::Sub, time::Duration};

/// Abstract environment providing time and async sleep.
///
/// The host is a single-threaded event loop, so neither the environment nor
/// its futures are required to be `Send`.
///
/// # Invariants
///
/// - `now()` never goes backwards.
/// - After `sleep(d)` resolves, `now()` has advanced by at least `d`.
pub trait Environment: Clone + 'static {
    /// Time instant type. Real or virtual.
    type Instant: Copy + Ord + Sub<Output = Duration>;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Suspend the current task for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
