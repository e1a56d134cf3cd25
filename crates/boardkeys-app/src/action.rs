//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use std::time::Duration;

use boardkeys_core::{Control, Move, Notice, Square};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Show a transient notice, replacing any visible one.
    Notify(Notice),

    /// Outline a square for a while.
    Highlight {
        /// Square to outline.
        square: Square,
        /// How long the outline stays.
        duration: Duration,
    },

    /// Click one of the widget's controls.
    Click(Control),

    /// Replay a completed move on the board.
    Execute(Move),
}

/// What the App decided about one key stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// Stop the stroke reaching the host page.
    pub suppress: bool,
    /// Actions to run.
    pub actions: Vec<AppAction>,
}

impl KeyResponse {
    /// Stroke consumed.
    pub fn suppressed(actions: Vec<AppAction>) -> Self {
        Self { suppress: true, actions }
    }

    /// Stroke left for the host page as well.
    pub fn passed(actions: Vec<AppAction>) -> Self {
        Self { suppress: false, actions }
    }
}
