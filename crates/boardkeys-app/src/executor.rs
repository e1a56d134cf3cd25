//! Move executor.
//!
//! Replays a [`Move`] on the board by clicking its source square, waiting,
//! then clicking its destination square. The wait is load-bearing: the widget
//! reads two clicks in quick succession as a double-click rather than a move.
//!
//! Lookups happen as late as possible. The destination element is resolved
//! after the delay, so a missing destination still leaves the source burst
//! dispatched.

use boardkeys_core::{Environment, Move, MoveError, Timings};

use crate::{Driver, burst::SyntheticEvent};

/// Replays moves through a [`Driver`].
pub struct MoveExecutor<'a, D, E> {
    driver: &'a D,
    env: &'a E,
    timings: Timings,
}

impl<'a, D, E> MoveExecutor<'a, D, E>
where
    D: Driver,
    E: Environment,
{
    /// Executor over the given driver and clock.
    pub fn new(driver: &'a D, env: &'a E, timings: Timings) -> Self {
        Self { driver, env, timings }
    }

    /// Replay `mv`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::BoardNotFound`] if the board container is missing.
    /// - [`MoveError::SourceNotFound`] if the source square has no element.
    ///   Nothing is dispatched.
    /// - [`MoveError::DestinationNotFound`] if the destination square has no
    ///   element. The source burst has already been dispatched.
    pub async fn execute(&self, mv: Move) -> Result<(), MoveError> {
        if !self.driver.board_present() {
            return Err(MoveError::BoardNotFound);
        }

        let started = self.env.now();
        tracing::debug!(%mv, "replaying move");

        let source = self
            .driver
            .find_square(mv.from)
            .ok_or(MoveError::SourceNotFound { square: mv.from })?;
        self.driver.highlight(&source, self.timings.move_highlight);
        self.burst(&source);

        self.env.sleep(self.timings.inter_click_delay).await;

        let destination = self
            .driver
            .find_square(mv.to)
            .ok_or(MoveError::DestinationNotFound { square: mv.to })?;
        self.burst(&destination);

        tracing::debug!(%mv, elapsed = ?(self.env.now() - started), "move replayed");
        Ok(())
    }

    fn burst(&self, element: &D::Element) {
        let center = self.driver.center(element);
        for event in SyntheticEvent::burst(center) {
            self.driver.dispatch(element, &event);
        }
    }
}
