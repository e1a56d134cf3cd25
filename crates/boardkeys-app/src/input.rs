//! Four-step move entry.
//!
//! [`MoveInput`] tracks progress through file, rank, file, rank across
//! independent key events. Each stage only accepts one token class; anything
//! else is dropped without touching state. Once both squares are known the
//! input holds the completed [`Move`] until it is reset.

use boardkeys_core::{File, Move, Square, Token};

/// Where the input currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stage {
    /// Waiting for the source file.
    #[default]
    SourceFile,
    /// Source file known, waiting for its rank.
    SourceRank { file: File },
    /// Source square known, waiting for the destination file.
    DestinationFile { from: Square },
    /// Destination file known, waiting for its rank.
    DestinationRank { from: Square, file: File },
    /// Both squares entered.
    Complete(Move),
}

/// Outcome of feeding one token to [`MoveInput::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Token did not fit the current stage. State unchanged.
    Ignored,
    /// Source file accepted.
    SourceFile(File),
    /// Source rank accepted; source square complete.
    SourceSquare(Square),
    /// Destination file accepted.
    DestinationFile(File),
    /// Destination rank accepted; move complete.
    Complete(Move),
}

/// Move entry state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveInput {
    stage: Stage,
}

impl MoveInput {
    /// Fresh input awaiting a source file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one token.
    pub fn advance(&mut self, token: &Token) -> Step {
        let (stage, step) = match (self.stage, token) {
            (Stage::SourceFile, Token::File(file)) => {
                (Stage::SourceRank { file: *file }, Step::SourceFile(*file))
            },
            (Stage::SourceRank { file }, Token::Rank(rank)) => {
                let from = Square::new(file, *rank);
                (Stage::DestinationFile { from }, Step::SourceSquare(from))
            },
            (Stage::DestinationFile { from }, Token::File(file)) => {
                (Stage::DestinationRank { from, file: *file }, Step::DestinationFile(*file))
            },
            (Stage::DestinationRank { from, file }, Token::Rank(rank)) => {
                let mv = Move::new(from, Square::new(file, *rank));
                (Stage::Complete(mv), Step::Complete(mv))
            },
            _ => return Step::Ignored,
        };
        self.stage = stage;
        step
    }

    /// Discard everything entered so far.
    pub fn reset(&mut self) {
        self.stage = Stage::SourceFile;
    }

    /// Returns true once both squares have been entered.
    pub fn is_complete(&self) -> bool {
        matches!(self.stage, Stage::Complete(_))
    }

    /// The completed move, if any.
    pub fn completed(&self) -> Option<Move> {
        match self.stage {
            Stage::Complete(mv) => Some(mv),
            _ => None,
        }
    }

    /// Numeric phase: 0 source file, 1 source rank, 2 destination file,
    /// 3 destination rank. A completed move stays at phase 3.
    pub fn phase(&self) -> u8 {
        match self.stage {
            Stage::SourceFile => 0,
            Stage::SourceRank { .. } => 1,
            Stage::DestinationFile { .. } => 2,
            Stage::DestinationRank { .. } | Stage::Complete(_) => 3,
        }
    }

    /// Source characters entered so far (0-2).
    pub fn from(&self) -> String {
        match self.stage {
            Stage::SourceFile => String::new(),
            Stage::SourceRank { file } => file.to_string(),
            Stage::DestinationFile { from } | Stage::DestinationRank { from, .. } => from.to_string(),
            Stage::Complete(mv) => mv.from.to_string(),
        }
    }

    /// Destination characters entered so far (0-2).
    pub fn to(&self) -> String {
        match self.stage {
            Stage::SourceFile | Stage::SourceRank { .. } | Stage::DestinationFile { .. } => {
                String::new()
            },
            Stage::DestinationRank { file, .. } => file.to_string(),
            Stage::Complete(mv) => mv.to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use boardkeys_core::KeyStroke;

    use super::*;

    fn feed(input: &mut MoveInput, keys: &str) -> Vec<Step> {
        keys.chars().map(|c| input.advance(&KeyStroke::typed(c).token())).collect()
    }

    #[test]
    fn four_tokens_complete_a_move() {
        let mut input = MoveInput::new();
        let steps = feed(&mut input, "e2e4");

        let e2: Square = "e2".parse().unwrap();
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(steps.last(), Some(&Step::Complete(Move::new(e2, e4))));
        assert!(input.is_complete());
        assert_eq!(input.phase(), 3);
        assert_eq!((input.from().as_str(), input.to().as_str()), ("e2", "e4"));
    }

    #[test]
    fn buffers_track_phase() {
        let mut input = MoveInput::new();
        assert_eq!((input.phase(), input.from(), input.to()), (0, String::new(), String::new()));

        feed(&mut input, "g");
        assert_eq!((input.phase(), input.from(), input.to()), (1, "g".into(), String::new()));

        feed(&mut input, "1");
        assert_eq!((input.phase(), input.from(), input.to()), (2, "g1".into(), String::new()));

        feed(&mut input, "f");
        assert_eq!((input.phase(), input.from(), input.to()), (3, "g1".into(), "f".into()));
    }

    #[test]
    fn wrong_class_is_ignored() {
        let mut input = MoveInput::new();
        assert_eq!(feed(&mut input, "4"), vec![Step::Ignored]);
        assert_eq!(input, MoveInput::new());

        feed(&mut input, "e");
        let before = input.clone();
        assert_eq!(feed(&mut input, "eq9"), vec![Step::Ignored; 3]);
        assert_eq!(input, before);
    }

    #[test]
    fn completed_input_ignores_further_squares() {
        let mut input = MoveInput::new();
        feed(&mut input, "e2e4");
        let before = input.clone();

        assert_eq!(feed(&mut input, "e5"), vec![Step::Ignored; 2]);
        assert_eq!(input, before);

        input.reset();
        assert_eq!(input, MoveInput::new());
    }
}
