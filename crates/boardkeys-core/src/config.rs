//! Runtime configuration.
//!
//! Every delay the input pipeline uses is a named field here rather than a
//! literal at the call site, so tests and page-specific overrides can tune
//! them. Serialized durations are whole milliseconds; missing fields take
//! their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delays used by the state machine, executor and feedback surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Pause between the source and destination bursts. The widget tells a
    /// two-click move from a double-click by elapsed time.
    #[serde(with = "crate::serde_millis")]
    pub inter_click_delay: Duration,
    /// Source highlight applied by the executor.
    #[serde(with = "crate::serde_millis")]
    pub move_highlight: Duration,
    /// Source highlight applied when the source square is completed.
    #[serde(with = "crate::serde_millis")]
    pub selection_highlight: Duration,
    /// How long a notice stays on screen.
    #[serde(with = "crate::serde_millis")]
    pub notice_duration: Duration,
}

impl Timings {
    /// Default pause between source and destination bursts.
    pub const INTER_CLICK_DELAY: Duration = Duration::from_millis(300);
    /// Default executor highlight.
    pub const MOVE_HIGHLIGHT: Duration = Duration::from_millis(500);
    /// Default selection highlight.
    pub const SELECTION_HIGHLIGHT: Duration = Duration::from_millis(1000);
    /// Default notice lifetime.
    pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            inter_click_delay: Self::INTER_CLICK_DELAY,
            move_highlight: Self::MOVE_HIGHLIGHT,
            selection_highlight: Self::SELECTION_HIGHLIGHT,
            notice_duration: Self::NOTICE_DURATION,
        }
    }
}

/// Structural selectors for the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Board container holding the square elements.
    pub board: String,
    /// Element focused at start-up.
    pub board_focus: String,
    /// Class prefix of square elements; followed by [`crate::Square::lookup_key`].
    pub square_class_prefix: String,
    /// Undo button.
    pub undo: String,
    /// Redo button.
    pub redo: String,
    /// Flip button.
    pub flip: String,
    /// Class given to the notice element.
    pub notice_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            board: "wc-chess-board.board".into(),
            board_focus: "wc-chess-board".into(),
            square_class_prefix: "square-".into(),
            undo: ".game-controls-primary-component button:nth-child(2)".into(),
            redo: ".game-controls-primary-component button:nth-child(4)".into(),
            flip: "#board-controls-flip".into(),
            notice_class: "chess-helper-feedback".into(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delays.
    pub timings: Timings,
    /// Host page selectors.
    pub selectors: Selectors,
    /// Log level directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
    /// Focus the board at start-up.
    pub focus_board: bool,
    /// Show the welcome notice at start-up.
    pub welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            selectors: Selectors::default(),
            log_level: "info".into(),
            focus_board: true,
            welcome: true,
        }
    }
}
