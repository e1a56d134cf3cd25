//! Application state machine.
//!
//! This module defines the [`App`] state machine, which turns key strokes into
//! moves and control clicks completely decoupled from the page it drives.
//!
//! This is a pure state machine: it consumes [`KeyStroke`]s and move outcomes
//! and produces [`AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Classifies strokes and routes control tokens (cancel, flip, undo, redo).
//! - Advances the four-step [`MoveInput`] and prompts for the next token.
//! - Snapshots a completed move by value and locks square entry while it is
//!   replayed, so typing during the inter-click delay cannot alter it.

use boardkeys_core::{Control, KeyStroke, Move, MoveError, Notice, Timings, Token};

use crate::{
    AppAction, KeyResponse,
    input::{MoveInput, Step},
};

/// Shown once the key handler is attached.
pub const WELCOME: &str = "♟ Chess keys active! Type e2e4 to move, U/Y to undo/redo";

/// Application state machine.
///
/// Pure state machine that processes key strokes and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Move being typed.
    input: MoveInput,
    /// Move handed to the executor and not yet finished.
    in_flight: Option<Move>,
    /// Highlight duration for a completed source square.
    selection_highlight: std::time::Duration,
}

impl App {
    /// Create an App idle at the first step.
    pub fn new(timings: &Timings) -> Self {
        Self {
            input: MoveInput::new(),
            in_flight: None,
            selection_highlight: timings.selection_highlight,
        }
    }

    /// Process one key stroke.
    pub fn handle_key(&mut self, stroke: &KeyStroke) -> KeyResponse {
        // Command chords belong to the host page too; act without swallowing
        if let Some(token) = stroke.command_chord() {
            tracing::debug!(?token, code = %stroke.code, "command chord");
            return KeyResponse::passed(self.handle_token(&token));
        }

        let token = stroke.token();
        tracing::debug!(?token, phase = self.input.phase(), "key");
        KeyResponse::suppressed(self.handle_token(&token))
    }

    /// Process an already classified token.
    pub fn handle_token(&mut self, token: &Token) -> Vec<AppAction> {
        match token {
            Token::Flip => vec![AppAction::Click(Control::Flip)],
            Token::Undo => vec![AppAction::Click(Control::Undo)],
            Token::Redo => vec![AppAction::Click(Control::Redo)],
            Token::Cancel => {
                self.input.reset();
                vec![AppAction::Notify(Notice::info("Input cancelled"))]
            },
            Token::File(_) | Token::Rank(_) if self.in_flight.is_some() => {
                tracing::debug!(in_flight = ?self.in_flight, "square input locked");
                vec![]
            },
            Token::File(_) | Token::Rank(_) => self.advance(token),
            Token::Other(_) => vec![],
        }
    }

    fn advance(&mut self, token: &Token) -> Vec<AppAction> {
        match self.input.advance(token) {
            Step::Ignored => vec![],
            Step::SourceFile(file) | Step::DestinationFile(file) => {
                let prompt = format!("Rank for {}?", file.as_char().to_ascii_uppercase());
                vec![AppAction::Notify(Notice::info(prompt))]
            },
            Step::SourceSquare(square) => vec![
                AppAction::Highlight { square, duration: self.selection_highlight },
                AppAction::Notify(Notice::info(format!(
                    "Selected {square}, choose destination file"
                ))),
            ],
            Step::Complete(mv) => {
                self.in_flight = Some(mv);
                vec![AppAction::Notify(Notice::info(format!("Moving {mv}"))), AppAction::Execute(mv)]
            },
        }
    }

    /// Record the outcome of a move previously returned as
    /// [`AppAction::Execute`].
    ///
    /// Success clears the input if it still holds that move. Failure leaves the
    /// input untouched; only cancel clears it.
    pub fn finish_move(&mut self, mv: Move, result: &Result<(), MoveError>) -> Vec<AppAction> {
        if self.in_flight == Some(mv) {
            self.in_flight = None;
        }

        match result {
            Ok(()) => {
                if self.input.completed() == Some(mv) {
                    self.input.reset();
                }
                vec![AppAction::Notify(Notice::info(format!("✔ {mv}")))]
            },
            Err(err) => vec![AppAction::Notify(Notice::error(err.to_string()))],
        }
    }

    /// Actions to run once at start-up.
    pub fn welcome(&self) -> Vec<AppAction> {
        vec![AppAction::Notify(Notice::info(WELCOME))]
    }

    /// Move entry state.
    pub fn input(&self) -> &MoveInput {
        &self.input
    }

    /// Move currently being replayed. `None` when idle.
    pub fn in_flight(&self) -> Option<Move> {
        self.in_flight
    }

    /// Returns true while a move is being replayed.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use boardkeys_core::{Modifiers, Square};

    use super::*;

    fn app() -> App {
        App::new(&Timings::default())
    }

    fn type_keys(app: &mut App, keys: &str) -> Vec<AppAction> {
        keys.chars().flat_map(|c| app.handle_key(&KeyStroke::typed(c)).actions).collect()
    }

    fn e2e4() -> Move {
        Move::new("e2".parse().unwrap(), "e4".parse().unwrap())
    }

    #[test]
    fn complete_sequence_executes_snapshot() {
        let mut app = app();
        let actions = type_keys(&mut app, "e2e4");

        let executes: Vec<_> =
            actions.iter().filter(|a| matches!(a, AppAction::Execute(_))).collect();
        assert_eq!(executes, [&AppAction::Execute(e2e4())]);
        assert_eq!(app.in_flight(), Some(e2e4()));
    }

    #[test]
    fn source_square_is_highlighted() {
        let mut app = app();
        let actions = type_keys(&mut app, "g1");
        let g1: Square = "g1".parse().unwrap();

        assert_eq!(actions, [
            AppAction::Notify(Notice::info("Rank for G?")),
            AppAction::Highlight { square: g1, duration: Timings::SELECTION_HIGHLIGHT },
            AppAction::Notify(Notice::info("Selected g1, choose destination file")),
        ]);
    }

    #[test]
    fn squares_locked_while_in_flight() {
        let mut app = app();
        type_keys(&mut app, "e2e4");
        app.handle_key(&KeyStroke::escape());

        assert!(type_keys(&mut app, "d7d5").is_empty());
        assert_eq!(app.input().phase(), 0);

        let _ = app.finish_move(e2e4(), &Ok(()));
        assert!(!app.is_busy());
        assert!(!type_keys(&mut app, "d").is_empty());
    }

    #[test]
    fn success_resets_failure_keeps_pair() {
        let mut app = app();
        type_keys(&mut app, "e2e4");
        let actions = app.finish_move(e2e4(), &Ok(()));
        assert_eq!(actions, [AppAction::Notify(Notice::info("✔ e2 → e4"))]);
        assert_eq!(app.input().phase(), 0);

        type_keys(&mut app, "e2e4");
        let err = MoveError::DestinationNotFound { square: e2e4().to };
        let actions = app.finish_move(e2e4(), &Err(err));
        assert_eq!(actions, [AppAction::Notify(Notice::error("cannot move to e4"))]);
        assert_eq!(app.input().completed(), Some(e2e4()));

        app.handle_key(&KeyStroke::escape());
        assert_eq!(app.input().phase(), 0);
    }

    #[test]
    fn command_chords_pass_through() {
        let mut app = app();
        let undo = app.handle_key(&KeyStroke::new("KeyZ", "z", Modifiers::CTRL));
        assert!(!undo.suppress);
        assert_eq!(undo.actions, [AppAction::Click(Control::Undo)]);

        let redo = app.handle_key(&KeyStroke::new("KeyY", "y", Modifiers::META));
        assert!(!redo.suppress);
        assert_eq!(redo.actions, [AppAction::Click(Control::Redo)]);

        let flip = app.handle_key(&KeyStroke::typed('z'));
        assert!(flip.suppress);
        assert_eq!(flip.actions, [AppAction::Click(Control::Flip)]);
    }

    #[test]
    fn unknown_keys_are_suppressed_and_ignored() {
        let mut app = app();
        let response = app.handle_key(&KeyStroke::typed('q'));
        assert!(response.suppress);
        assert!(response.actions.is_empty());
    }
}
