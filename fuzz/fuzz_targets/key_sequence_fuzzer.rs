//! Fuzz target for the key-stroke state machine under replay
//!
//! Drive a Runtime on the simulated page with arbitrary strokes interleaved
//! with single polls of the in-flight move.
//!
//! # Strategy
//!
//! - Strokes: squares, controls, command chords, unknown keys
//! - Page: board present or missing, one square removed
//! - Replay: polled a step at a time, so typing lands mid-move
//!
//! # Invariants
//!
//! - Standard invariant registry holds after every step
//! - At most one move is in flight
//! - Every replayed move is exactly the move that was issued
//! - Never more than one notice on screen

#![no_main]

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use arbitrary::Arbitrary;
use boardkeys_app::Runtime;
use boardkeys_core::{File, KeyStroke, Modifiers, MoveError, Rank, Square, Timings};
use boardkeys_harness::{InputSnapshot, InvariantRegistry, SimDriver, SimEnv};
use futures::task::noop_waker_ref;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    File(u8),
    Rank(u8),
    Escape,
    Flip,
    Undo,
    Redo,
    CtrlZ,
    CtrlY,
    Other(char),
    Poll,
}

#[derive(Debug, Clone, Arbitrary)]
enum Page {
    Full,
    NoBoard,
    MissingSquare(u8),
}

#[derive(Debug, Clone, Arbitrary)]
struct Session {
    page: Page,
    ops: Vec<Op>,
}

fn stroke(op: &Op) -> Option<KeyStroke> {
    let stroke = match op {
        Op::File(i) => KeyStroke::typed(File::from_index(i % 8)?.as_char()),
        Op::Rank(i) => KeyStroke::typed(Rank::from_index(i % 8)?.as_char()),
        Op::Escape => KeyStroke::escape(),
        Op::Flip => KeyStroke::typed('z'),
        Op::Undo => KeyStroke::typed('u'),
        Op::Redo => KeyStroke::typed('y'),
        Op::CtrlZ => KeyStroke::new("KeyZ", "z", Modifiers::CTRL),
        Op::CtrlY => KeyStroke::new("KeyY", "y", Modifiers::META),
        Op::Other(c) => KeyStroke::new("", c.to_string(), Modifiers::NONE),
        Op::Poll => return None,
    };
    Some(stroke)
}

fn driver(page: &Page, env: SimEnv) -> SimDriver {
    let driver = SimDriver::new(env);
    match page {
        Page::Full => driver,
        Page::NoBoard => driver.without_board(),
        Page::MissingSquare(i) => {
            let square = Square::all().nth(usize::from(i % 64)).expect("64 squares");
            driver.without_square(square)
        }
    }
}

type Replay<'a> = Pin<Box<dyn Future<Output = Result<(), MoveError>> + 'a>>;

fuzz_target!(|session: Session| {
    let env = SimEnv::new();
    let runtime = Runtime::new(driver(&session.page, env.clone()), env, Timings::default());
    let registry = InvariantRegistry::standard();
    let mut cx = Context::from_waker(noop_waker_ref());

    let mut issued = Vec::new();
    let mut replay: Option<Replay<'_>> = None;

    for op in &session.ops {
        if let Some(stroke) = stroke(op) {
            if let Some(mv) = runtime.handle_key(&stroke).pending {
                assert!(replay.is_none(), "second move issued while {mv} in flight");
                issued.push(mv);
                replay = Some(Box::pin(runtime.execute_move(mv)));
            }
        } else if let Some(future) = replay.as_mut() {
            if let Poll::Ready(_) = future.as_mut().poll(&mut cx) {
                replay = None;
            }
        }

        if let Err(violations) = registry.check_all(&InputSnapshot::from_app(&runtime.app())) {
            panic!("invariant violations after {op:?}: {violations:?}");
        }
    }

    if let Some(future) = replay.take() {
        let _ = futures::executor::block_on(future);
    }

    assert!(!runtime.app().is_busy());
    assert!(runtime.driver().max_notices_on_screen() <= 1);

    // Each burst lands on a square of an issued move, in issue order
    let mut expected = issued.iter().flat_map(|mv| [mv.from, mv.to]);
    for burst in runtime.driver().bursts() {
        let square = expected.find(|sq| *sq == burst.square);
        assert!(square.is_some(), "burst on {} not part of any issued move", burst.square);
    }
});
