//! Error types for board input and move execution.
//!
//! Strongly-typed errors per layer: coordinate parsing, move execution against
//! the board widget, and clicks on the widget's own controls. Every variant's
//! `Display` text is short enough to show the user verbatim.

use thiserror::Error;

use crate::{control::Control, square::Square};

/// Errors parsing a square from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File letter outside `a`-`h`.
    #[error("invalid file '{0}'")]
    InvalidFile(char),

    /// Rank digit outside `1`-`8`.
    #[error("invalid rank '{0}'")]
    InvalidRank(char),

    /// Input is not exactly a file followed by a rank.
    #[error("malformed square \"{0}\"")]
    Malformed(String),
}

/// Errors replaying a move onto the board.
///
/// Produced at the executor boundary. The runtime reports it to the user
/// before returning it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No board container element on the page.
    #[error("board not found")]
    BoardNotFound,

    /// No element for the source square.
    #[error("cannot select piece on {square}")]
    SourceNotFound {
        /// Unresolved square.
        square: Square,
    },

    /// No element for the destination square.
    #[error("cannot move to {square}")]
    DestinationNotFound {
        /// Unresolved square.
        square: Square,
    },
}

impl MoveError {
    /// Square that could not be resolved, if the failure names one.
    pub fn square(&self) -> Option<Square> {
        match self {
            Self::BoardNotFound => None,
            Self::SourceNotFound { square } | Self::DestinationNotFound { square } => Some(*square),
        }
    }

    /// Returns true if the source burst was already dispatched when this
    /// error occurred.
    pub fn is_destination(&self) -> bool {
        matches!(self, Self::DestinationNotFound { .. })
    }
}

/// Errors clicking one of the widget's controls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// Control missing or disabled.
    #[error("cannot {}", .control.verb())]
    Unavailable {
        /// Control that could not be clicked.
        control: Control,
    },
}
