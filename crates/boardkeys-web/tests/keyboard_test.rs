//! Browser tests for keydown routing and start-up scheduling.
//!
//! Run with `wasm-pack test --headless --firefox crates/boardkeys-web`.

#![cfg(target_arch = "wasm32")]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use boardkeys_app::Runtime;
use boardkeys_core::{Selectors, Timings};
use boardkeys_web::{DomDriver, WebEnv, handle_keydown, start_with_config, stop, when_loaded};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, Event, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn keydown(code: &str, key: &str, ctrl: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_code(code);
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
}

fn runtime() -> Rc<Runtime<DomDriver, WebEnv>> {
    let window = web_sys::window().expect("window");
    let document = window.document().expect("document");
    let env = WebEnv::new(&window);
    Rc::new(Runtime::new(DomDriver::new(window, document, Selectors::default()), env, Timings::default()))
}

/// Detached `parent > child` pair with a counter for keydowns reaching the
/// parent. The child routes keydowns through `handle_keydown`.
struct Target {
    child: Element,
    reached_parent: Rc<Cell<u32>>,
    _listeners: [EventListener; 2],
}

impl Target {
    fn new(runtime: &Rc<Runtime<DomDriver, WebEnv>>) -> Self {
        let document = web_sys::window().and_then(|w| w.document()).expect("document");
        let parent = document.create_element("div").expect("div");
        let child = document.create_element("div").expect("div");
        parent.append_child(&child).expect("append");

        let reached_parent = Rc::new(Cell::new(0));
        let counter = Rc::clone(&reached_parent);
        let on_parent = EventListener::new(&parent, "keydown", move |_| counter.set(counter.get() + 1));

        let handler = Rc::clone(runtime);
        let on_child = EventListener::new(&child, "keydown", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handle_keydown(&handler, event);
            }
        });

        Self { child, reached_parent, _listeners: [on_parent, on_child] }
    }

    /// Dispatch `event` on the child. Returns true if it was not cancelled.
    fn send(&self, event: &KeyboardEvent) -> bool {
        self.child.dispatch_event(event).expect("dispatch")
    }
}

#[wasm_bindgen_test]
fn handled_strokes_are_swallowed() {
    let runtime = runtime();
    let target = Target::new(&runtime);

    for (code, key) in [("KeyE", "e"), ("Digit2", "2"), ("KeyQ", "q"), ("Escape", "Escape")] {
        let event = keydown(code, key, false);
        assert!(!target.send(&event), "{code} default not prevented");
        assert!(event.default_prevented());
    }
    assert_eq!(target.reached_parent.get(), 0);
}

#[wasm_bindgen_test]
fn command_chords_reach_the_page() {
    let runtime = runtime();
    let target = Target::new(&runtime);

    let undo = keydown("KeyZ", "z", true);
    let redo = keydown("KeyY", "y", true);
    assert!(target.send(&undo));
    assert!(target.send(&redo));
    assert!(!undo.default_prevented());
    assert_eq!(target.reached_parent.get(), 2);
}

#[wasm_bindgen_test]
fn typed_square_advances_input() {
    let runtime = runtime();
    let target = Target::new(&runtime);

    target.send(&keydown("KeyE", "e", false));
    target.send(&keydown("Digit2", "2", false));
    assert_eq!(runtime.app().input().from(), "e2");
    assert_eq!(runtime.app().input().phase(), 2);
}

#[wasm_bindgen_test]
fn start_waits_for_load_event() {
    let window = web_sys::window().expect("window");
    let ran = Rc::new(Cell::new(false));

    let flag = Rc::clone(&ran);
    when_loaded(&window, "loading", move || flag.set(true));
    assert!(!ran.get());

    window.dispatch_event(&Event::new("load").expect("event")).expect("dispatch");
    assert!(ran.get());
}

#[wasm_bindgen_test]
fn start_runs_immediately_when_complete() {
    let window = web_sys::window().expect("window");
    let ran = Rc::new(Cell::new(false));

    let flag = Rc::clone(&ran);
    when_loaded(&window, "complete", move || flag.set(true));
    assert!(ran.get());
}

#[wasm_bindgen_test]
fn session_listener_captures_until_stopped() {
    let window = web_sys::window().expect("window");
    let body = window.document().and_then(|d| d.body()).expect("body");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&seen);
    let _on_window = EventListener::new(&window, "keydown", move |event: &Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            record.borrow_mut().push(event.code());
        }
    });

    start_with_config(r#"{"welcome":false,"focus_board":false}"#).expect("attached");
    assert!(!body.dispatch_event(&keydown("KeyQ", "q", false)).expect("dispatch"));
    assert!(body.dispatch_event(&keydown("KeyY", "y", true)).expect("dispatch"));

    stop();
    assert!(body.dispatch_event(&keydown("KeyQ", "q", false)).expect("dispatch"));

    assert_eq!(*seen.borrow(), ["KeyY", "KeyQ"]);
}
