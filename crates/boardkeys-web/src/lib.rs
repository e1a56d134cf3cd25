//! Browser binding for boardkeys.
//!
//! Attaches a capture-phase `keydown` listener to the document so typed
//! squares become moves on the page's chessboard widget before the page sees
//! the keys. The module starts itself with the default [`Config`] once the
//! document has finished loading; `startWithConfig` re-attaches with
//! overrides and `stop` detaches.
//!
//! # Components
//!
//! - [`DomDriver`]: web-sys implementation of [`boardkeys_app::Driver`]
//! - [`WebEnv`]: `performance.now()` clock and timer-backed sleep
//! - [`notice`]: toast renderer
//! - [`logging`]: tracing subscriber writing to the console

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod driver;
pub mod env;
pub mod error;
pub mod keys;
pub mod logging;
pub mod notice;

use std::{cell::RefCell, rc::Rc};

use boardkeys_app::{Dispatch, Runtime};
use boardkeys_core::Config;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Event, KeyboardEvent, Window};

pub use driver::DomDriver;
pub use env::{WebEnv, WebInstant};
pub use error::WebError;

/// Keeps the listener attached for as long as it is held.
struct Session {
    _listener: EventListener,
    _runtime: Rc<Runtime<DomDriver, WebEnv>>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Parse a JSON config; missing fields take their defaults.
///
/// # Errors
///
/// Returns [`WebError::Config`] if the JSON is malformed.
pub fn parse_config(json: &str) -> Result<Config, WebError> {
    Ok(serde_json::from_str(json)?)
}

/// Attach with the default config, replacing any previous session.
///
/// # Errors
///
/// Returns an error if there is no window or document.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    attach(Config::default()).map_err(JsValue::from)
}

/// Attach with a JSON config, replacing any previous session.
///
/// `log_level` applies to the console subscriber even if an earlier start
/// already installed it.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or there is no window or
/// document.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = parse_config(json)?;
    attach(config).map_err(JsValue::from)
}

/// Detach the key listener. Moves already in flight still finish.
#[wasm_bindgen]
pub fn stop() {
    let previous = SESSION.with(|session| session.borrow_mut().take());
    if previous.is_some() {
        tracing::info!("keyboard input detached");
    }
}

/// Start once the document has loaded.
#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    when_loaded(&window, &document.ready_state(), || {
        if let Err(e) = attach(Config::default()) {
            tracing::error!(error = %e, "failed to attach keyboard input");
        }
    });
    Ok(())
}

/// Run `f` now if the document is `complete`, otherwise on the window's
/// `load` event.
pub fn when_loaded(window: &Window, state: &str, f: impl FnOnce() + 'static) {
    if state == "complete" {
        f();
        return;
    }
    tracing::debug!(?state, "deferring start until load");
    EventListener::once(window, "load", move |_| f()).forget();
}

/// Route one `keydown` event through `runtime`.
///
/// Suppressed strokes have their default action prevented and stop
/// propagating; command chords reach the page untouched. A completed move is
/// spawned onto the event loop.
pub fn handle_keydown(runtime: &Rc<Runtime<DomDriver, WebEnv>>, event: &KeyboardEvent) -> Dispatch {
    let dispatch = runtime.handle_key(&keys::stroke(event));
    if dispatch.suppress {
        event.prevent_default();
        event.stop_propagation();
    }

    if let Some(mv) = dispatch.pending {
        let runtime = Rc::clone(runtime);
        wasm_bindgen_futures::spawn_local(async move {
            // Outcome already reported through the notice surface
            let _ = runtime.execute_move(mv).await;
        });
    }
    dispatch
}

fn attach(config: Config) -> Result<(), WebError> {
    logging::init(&config.log_level);
    stop();

    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let env = WebEnv::new(&window);
    let driver = DomDriver::new(window, document.clone(), config.selectors.clone());
    let runtime = Rc::new(Runtime::new(driver, env, config.timings));

    let handler = Rc::clone(&runtime);
    let listener = EventListener::new_with_options(
        &document,
        "keydown",
        EventListenerOptions { phase: EventListenerPhase::Capture, passive: false },
        move |event: &Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handle_keydown(&handler, event);
            }
        },
    );

    runtime.start(config.focus_board, config.welcome);
    SESSION.with(|session| {
        *session.borrow_mut() = Some(Session { _listener: listener, _runtime: runtime });
    });
    Ok(())
}
