//! Core vocabulary for keyboard-driven board input.
//!
//! Pure types shared by the input state machine, the move executor and the
//! platform bindings. Nothing here performs I/O.
//!
//! # Components
//!
//! - [`Square`], [`File`], [`Rank`], [`Move`]: board coordinates
//! - [`KeyStroke`], [`Token`]: raw key input and its classification
//! - [`Control`], [`Notice`]: widget buttons and user feedback
//! - [`Config`], [`Timings`], [`Selectors`]: tunable behaviour
//! - [`Environment`]: clock and sleep abstraction

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod control;
pub mod env;
pub mod error;
pub mod key;
pub mod serde_millis;
pub mod square;

pub use config::{Config, Selectors, Timings};
pub use control::{Control, Notice, NoticeKind};
pub use env::Environment;
pub use error::{ControlError, MoveError, SquareError};
pub use key::{KeyStroke, Modifiers, Token};
pub use square::{File, Move, Rank, Square};
