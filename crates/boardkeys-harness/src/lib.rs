//! Deterministic simulation harness for boardkeys testing.
//!
//! Virtual-time implementations of the Environment and Driver traits for
//! deterministic, reproducible tests of key handling and move replay.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all key sequences, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the input
//! invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    BufferLengths, BuffersAreCoordinates, InFlightLocksInput, InputSnapshot, Invariant,
    InvariantKind, InvariantRegistry, InvariantResult, Violation,
};
pub use sim_driver::{Burst, RecordedEvent, SQUARE_SIZE, ShownNotice, SimDriver, SimElement};
pub use sim_env::SimEnv;
