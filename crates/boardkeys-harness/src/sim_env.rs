//! Virtual-time environment.
//!
//! [`SimEnv`] advances a shared virtual clock instead of waiting. Each sleep
//! also yields to the executor once, so a test can poll a move replay up to
//! its inter-click delay, inject key strokes, and then let it finish.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
    time::Duration,
};

use boardkeys_core::Environment;

/// Deterministic environment with a virtual clock starting at zero.
///
/// Clones share the clock.
#[derive(Debug, Clone, Default)]
pub struct SimEnv {
    clock: Rc<Cell<Duration>>,
    sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl SimEnv {
    /// Environment at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward without sleeping.
    pub fn advance(&self, duration: Duration) {
        self.clock.set(self.clock.get() + duration);
    }

    /// Every duration passed to [`Environment::sleep`], in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Environment for SimEnv {
    type Instant = Duration;

    fn now(&self) -> Duration {
        self.clock.get()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(duration);
        self.advance(duration);
        YieldOnce { yielded: false }
    }
}

/// Pending on the first poll, ready on the second.
struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn sleep_advances_shared_clock() {
        let env = SimEnv::new();
        let other = env.clone();

        env.sleep(Duration::from_millis(300)).await;
        env.advance(Duration::from_millis(5));

        assert_eq!(other.now(), Duration::from_millis(305));
        assert_eq!(other.sleeps(), [Duration::from_millis(300)]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn sleep_yields_once() {
        let env = SimEnv::new();
        let mut sleep = std::pin::pin!(env.sleep(Duration::from_millis(1)));

        assert!(futures::poll!(sleep.as_mut()).is_pending());
        assert!(futures::poll!(sleep.as_mut()).is_ready());
    }
}
