//! Generic runtime for application orchestration.
//!
//! The Runtime wires the pieces together for one page session:
//! - [`App`]: key-stroke state machine
//! - [`MoveExecutor`]: synthetic pointer replay
//! - [`Driver`]: platform-specific page access
//! - [`Environment`]: clock and sleep
//!
//! Key handling is synchronous. A completed move is returned to the caller as
//! a value and replayed by awaiting [`Runtime::execute_move`], which the
//! platform schedules on its own event loop.

use std::cell::{Ref, RefCell};

use boardkeys_core::{Control, Environment, KeyStroke, Move, MoveError, Notice, Timings};

use crate::{App, AppAction, Driver, controls::click_control, executor::MoveExecutor};

/// Result of handling one key stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Stop the stroke reaching the host page.
    pub suppress: bool,
    /// Move to replay with [`Runtime::execute_move`]. `None` if the stroke did
    /// not complete one.
    pub pending: Option<Move>,
}

/// Generic runtime that orchestrates App, executor and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific page driver
/// - `E`: Environment for time
pub struct Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    app: RefCell<App>,
    driver: D,
    env: E,
    timings: Timings,
}

impl<D, E> Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    /// Create a new runtime with the given driver and environment.
    pub fn new(driver: D, env: E, timings: Timings) -> Self {
        Self { app: RefCell::new(App::new(&timings)), driver, env, timings }
    }

    /// Start-up side effects: focus the board and greet the user.
    pub fn start(&self, focus_board: bool, welcome: bool) {
        if focus_board {
            self.driver.focus_board();
        }
        if welcome {
            let actions = self.app.borrow().welcome();
            self.apply(actions);
        }
        tracing::info!("keyboard input attached");
    }

    /// Handle one key stroke.
    ///
    /// Never blocks. If the stroke completes a move the move is returned in
    /// [`Dispatch::pending`] and must be passed to [`Runtime::execute_move`].
    pub fn handle_key(&self, stroke: &KeyStroke) -> Dispatch {
        let response = self.app.borrow_mut().handle_key(stroke);
        let pending = self.apply(response.actions);
        Dispatch { suppress: response.suppress, pending }
    }

    /// Replay a move and feed the outcome back into the App.
    ///
    /// The App is not borrowed across the inter-click delay, so key strokes
    /// may be handled while this future is suspended.
    ///
    /// # Errors
    ///
    /// Returns the executor's [`MoveError`] after reporting it to the user.
    pub async fn execute_move(&self, mv: Move) -> Result<(), MoveError> {
        let result = MoveExecutor::new(&self.driver, &self.env, self.timings).execute(mv).await;
        match &result {
            Ok(()) => tracing::info!(%mv, "move replayed"),
            Err(e) => tracing::warn!(%mv, error = %e, "move failed"),
        }

        let actions = self.app.borrow_mut().finish_move(mv, &result);
        self.apply(actions);
        result
    }

    /// Run actions against the driver. Returns the move to replay, if any.
    fn apply(&self, actions: Vec<AppAction>) -> Option<Move> {
        let mut pending = None;
        for action in actions {
            match action {
                AppAction::Notify(notice) => self.notify(&notice),
                AppAction::Highlight { square, duration } => {
                    if let Some(element) = self.driver.find_square(square) {
                        self.driver.highlight(&element, duration);
                    }
                },
                AppAction::Click(control) => self.click(control),
                AppAction::Execute(mv) => pending = Some(mv),
            }
        }
        pending
    }

    fn click(&self, control: Control) {
        match click_control(&self.driver, control) {
            Ok(()) => {
                tracing::info!(%control, "control clicked");
                self.notify(&Notice::info(control.success_text()));
            },
            Err(e) => {
                tracing::warn!(%control, error = %e, "control unavailable");
                self.notify(&Notice::error(e.to_string()));
            },
        }
    }

    fn notify(&self, notice: &Notice) {
        self.driver.notify(notice, self.timings.notice_duration);
    }

    /// Get a reference to the App.
    pub fn app(&self) -> Ref<'_, App> {
        self.app.borrow()
    }

    /// Get a reference to the Driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a reference to the Environment.
    pub fn env(&self) -> &E {
        &self.env
    }
}
