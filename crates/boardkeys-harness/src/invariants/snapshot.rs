//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable input state at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use boardkeys_app::App;
use boardkeys_core::Move;

/// Snapshot of the move-entry state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Numeric phase, 0-3.
    pub phase: u8,
    /// Source characters entered.
    pub from: String,
    /// Destination characters entered.
    pub to: String,
    /// Both squares entered.
    pub complete: bool,
    /// Move being replayed. `None` if idle.
    pub in_flight: Option<Move>,
    /// The completed move, if any.
    pub completed: Option<Move>,
}

impl InputSnapshot {
    /// Capture the App's observable input state.
    pub fn from_app(app: &App) -> Self {
        let input = app.input();
        Self {
            phase: input.phase(),
            from: input.from(),
            to: input.to(),
            complete: input.is_complete(),
            in_flight: app.in_flight(),
            completed: input.completed(),
        }
    }
}
