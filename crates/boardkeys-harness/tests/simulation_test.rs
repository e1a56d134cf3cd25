//! Randomized simulation of whole sessions on the simulated page.
//!
//! Each case interleaves key strokes with single polls of the pending move
//! replay, checks the invariant registry after every step, and compares the
//! bursts on the page with the moves that were issued once the session drains.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use boardkeys_app::{PointerKind, Runtime};
use boardkeys_core::{KeyStroke, Move, MoveError, Timings};
use boardkeys_harness::{Burst, InputSnapshot, InvariantRegistry, SimDriver, SimEnv};
use futures::task::noop_waker_ref;
use proptest::prelude::*;

/// One step of a simulated session.
#[derive(Debug, Clone)]
enum Op {
    Type(char),
    Escape,
    /// Poll the pending replay once, if there is one.
    Poll,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => prop::sample::select("abcdefgh12345678zuyq".chars().collect::<Vec<_>>()).prop_map(Op::Type),
        1 => Just(Op::Escape),
        3 => Just(Op::Poll),
    ]
}

type Replay<'a> = Pin<Box<dyn Future<Output = Result<(), MoveError>> + 'a>>;

/// Run `ops` against a fresh page. Returns the issued moves and the bursts
/// that reached the board.
fn run_session(ops: &[Op]) -> (Vec<Move>, Vec<Burst>) {
    let env = SimEnv::new();
    let runtime = Runtime::new(SimDriver::new(env.clone()), env, Timings::default());
    let registry = InvariantRegistry::standard();
    let mut cx = Context::from_waker(noop_waker_ref());

    let mut issued = Vec::new();
    let mut replay: Option<Replay<'_>> = None;

    for (i, op) in ops.iter().enumerate() {
        let pending = match op {
            Op::Type(c) => runtime.handle_key(&KeyStroke::typed(*c)).pending,
            Op::Escape => runtime.handle_key(&KeyStroke::escape()).pending,
            Op::Poll => {
                if let Some(future) = replay.as_mut()
                    && let Poll::Ready(result) = future.as_mut().poll(&mut cx)
                {
                    result.expect("full board replays every move");
                    replay = None;
                }
                None
            },
        };

        if let Some(mv) = pending {
            assert!(replay.is_none(), "move {mv} issued while another is in flight");
            issued.push(mv);
            replay = Some(Box::pin(runtime.execute_move(mv)));
        }

        registry.assert_all(&InputSnapshot::from_app(&runtime.app()), &format!("after op {i} {op:?}"));
    }

    if let Some(future) = replay.take() {
        futures::executor::block_on(future).expect("full board replays every move");
    }

    assert!(!runtime.app().is_busy());
    (issued, runtime.driver().bursts())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_session_replays_issued_moves_in_order(ops in prop::collection::vec(arb_op(), 0..64)) {
        let (issued, bursts) = run_session(&ops);

        let expected: Vec<_> = issued.iter().flat_map(|mv| [mv.from, mv.to]).collect();
        let replayed: Vec<_> = bursts.iter().map(|b| b.square).collect();
        prop_assert_eq!(replayed, expected);
        prop_assert!(bursts.iter().all(|b| b.kinds == PointerKind::BURST));
    }
}

#[test]
fn scripted_session_with_interleaved_typing() {
    let ops: Vec<Op> = "e2e4"
        .chars()
        .map(Op::Type)
        .chain([Op::Poll, Op::Type('d'), Op::Type('7'), Op::Escape, Op::Poll])
        .chain("d7d5".chars().map(Op::Type))
        .collect();

    let (issued, bursts) = run_session(&ops);
    let squares: Vec<String> = bursts.iter().map(|b| b.square.to_string()).collect();

    assert_eq!(issued.len(), 2);
    assert_eq!(squares, ["e2", "e4", "d7", "d5"]);
}
