//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use boardkeys_core::{File, Rank};

use super::{InputSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// Buffer lengths must match the phase.
///
/// Below phase 2 the source holds `phase` characters and the destination is
/// empty. From phase 2 the source holds two characters and the destination
/// `phase - 2`, or two once the move is complete.
pub struct BufferLengths;

impl Invariant for BufferLengths {
    fn kind(&self) -> InvariantKind {
        InvariantKind::BufferLengths
    }

    fn check(&self, state: &InputSnapshot) -> InvariantResult {
        let phase = usize::from(state.phase);
        let (from_len, to_len) = if state.complete {
            (2, 2)
        } else if phase < 2 {
            (phase, 0)
        } else {
            (2, phase - 2)
        };

        if state.from.chars().count() != from_len || state.to.chars().count() != to_len {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "phase {} (complete: {}): from {:?} to {:?}, expected lengths {from_len}/{to_len}",
                    state.phase, state.complete, state.from, state.to
                ),
            });
        }
        Ok(())
    }
}

/// Buffers hold a file letter followed by a rank digit.
pub struct BuffersAreCoordinates;

impl BuffersAreCoordinates {
    fn well_formed(buffer: &str) -> bool {
        let mut chars = buffer.chars();
        let file_ok = chars.next().is_none_or(|c| File::try_from(c).is_ok());
        let rank_ok = chars.next().is_none_or(|c| Rank::try_from(c).is_ok());
        file_ok && rank_ok && chars.next().is_none()
    }
}

impl Invariant for BuffersAreCoordinates {
    fn kind(&self) -> InvariantKind {
        InvariantKind::BuffersAreCoordinates
    }

    fn check(&self, state: &InputSnapshot) -> InvariantResult {
        for buffer in [&state.from, &state.to] {
            if !Self::well_formed(buffer) {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("buffer {buffer:?} is not a partial square"),
                });
            }
        }
        Ok(())
    }
}

/// While a move is in flight no new move is being typed.
///
/// The input either still holds the in-flight move or was cancelled back to
/// phase 0. Square tokens are locked until the replay finishes.
pub struct InFlightLocksInput;

impl Invariant for InFlightLocksInput {
    fn kind(&self) -> InvariantKind {
        InvariantKind::InFlightLocksInput
    }

    fn check(&self, state: &InputSnapshot) -> InvariantResult {
        let Some(mv) = state.in_flight else {
            return Ok(());
        };

        if state.completed == Some(mv) || state.phase == 0 {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "move {mv} in flight while input at phase {} ({:?} -> {:?})",
                    state.phase, state.from, state.to
                ),
            })
        }
    }
}
