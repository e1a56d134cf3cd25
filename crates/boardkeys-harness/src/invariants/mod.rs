//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during input handling.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible key sequences.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from the App into an
//! [`InputSnapshot`], then runs registered [`Invariant`] checks against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = InputSnapshot::from_app(&app);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{BufferLengths, BuffersAreCoordinates, InFlightLocksInput};
pub use snapshot::InputSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies a standard invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantKind {
    /// See [`BufferLengths`].
    BufferLengths,
    /// See [`BuffersAreCoordinates`].
    BuffersAreCoordinates,
    /// See [`InFlightLocksInput`].
    InFlightLocksInput,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BufferLengths => "buffer_lengths",
            Self::BuffersAreCoordinates => "buffers_are_coordinates",
            Self::InFlightLocksInput => "in_flight_locks_input",
        };
        f.write_str(name)
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Violated invariant.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against input state.
pub trait Invariant {
    /// Invariant identity for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the current state.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &InputSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Use [`InvariantRegistry::standard()`] for the input invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard input invariants.
    ///
    /// Includes:
    /// - [`BufferLengths`]: buffer lengths agree with the phase
    /// - [`BuffersAreCoordinates`]: buffers are partial squares
    /// - [`InFlightLocksInput`]: no new entry while a move replays
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(BufferLengths);
        registry.add(BuffersAreCoordinates);
        registry.add(InFlightLocksInput);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &InputSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking on first violation.
    ///
    /// Use this in tests where you want immediate failure with context.
    pub fn assert_all(&self, state: &InputSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn idle_snapshot_passes_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(registry.check_all(&InputSnapshot::default()).is_ok());
    }
}
