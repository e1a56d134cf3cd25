//! `KeyboardEvent` to [`KeyStroke`].

use boardkeys_core::{KeyStroke, Modifiers};
use web_sys::KeyboardEvent;

/// Platform-agnostic view of a keydown event.
pub fn stroke(event: &KeyboardEvent) -> KeyStroke {
    let modifiers = Modifiers {
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
        alt: event.alt_key(),
    };
    KeyStroke::new(event.code(), event.key(), modifiers)
}
