//! Fuzz target for key stroke classification
//!
//! Arbitrary `code`/`key` strings from any keyboard layout or IME.
//!
//! # Invariants
//!
//! - Classification never panics on any UTF-8 input
//! - A stroke with a command modifier resolves to undo, redo or nothing
//! - Square tokens only come from `a`-`h` / `1`-`8`

#![no_main]

use arbitrary::Arbitrary;
use boardkeys_core::{KeyStroke, Modifiers, Token};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    code: String,
    key: String,
    ctrl: bool,
    meta: bool,
    shift: bool,
    alt: bool,
}

fuzz_target!(|input: Input| {
    let modifiers = Modifiers { ctrl: input.ctrl, meta: input.meta, shift: input.shift, alt: input.alt };
    let stroke = KeyStroke::new(input.code, input.key, modifiers);

    match stroke.command_chord() {
        Some(Token::Undo | Token::Redo) => assert!(modifiers.command()),
        Some(other) => panic!("chord resolved to {other:?}"),
        None => {}
    }

    match stroke.token() {
        Token::File(file) => assert!(('a'..='h').contains(&file.as_char())),
        Token::Rank(rank) => assert!(('1'..='8').contains(&rank.as_char())),
        _ => {}
    }
});
