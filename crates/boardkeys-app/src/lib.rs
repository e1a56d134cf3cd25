//! Application layer for keyboard-driven board input
//!
//! Pure state machine and generic runtime for turning typed squares into
//! synthetic pointer input, enabling deterministic simulation testing with the
//! same code that runs in the browser.
//!
//! # Components
//!
//! - [`App`]: key-stroke state machine (move entry, controls, cancel)
//! - [`MoveInput`]: four-step file/rank/file/rank entry
//! - [`MoveExecutor`]: replays a move as two pointer bursts
//! - [`Driver`]: Trait for platform-specific page access
//! - [`Runtime`]: Generic orchestration using Driver and Environment

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod burst;
mod controls;
mod driver;
mod executor;
mod input;
mod runtime;

pub use action::{AppAction, KeyResponse};
pub use app::{App, WELCOME};
pub use burst::{Point, PointerKind, SyntheticEvent};
pub use controls::click_control;
pub use driver::Driver;
pub use executor::MoveExecutor;
pub use input::{MoveInput, Step};
pub use runtime::{Dispatch, Runtime};
