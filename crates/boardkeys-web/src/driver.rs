//! DOM driver implementing the Driver trait.
//!
//! Implements [`Driver`] against the live page with web-sys: selector lookups
//! for the board, squares and controls, `MouseEvent` dispatch for bursts,
//! inline `box-shadow` for highlights, and a toast element for notices.

use std::time::Duration;

use boardkeys_app::{Driver, Point, SyntheticEvent};
use boardkeys_core::{Control, Notice, Selectors, Square};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, MouseEvent, MouseEventInit, Window};

use crate::notice;

const HIGHLIGHT_SHADOW: &str = "0 0 10px 5px rgba(255, 255, 0, 0.7)";

/// Selector for `square` given the square class prefix (`square-` -> `.square-52`).
pub fn square_selector(prefix: &str, square: Square) -> String {
    format!(".{prefix}{}", square.lookup_key())
}

/// Browser page driver.
pub struct DomDriver {
    window: Window,
    document: Document,
    selectors: Selectors,
}

impl DomDriver {
    /// Driver over `document` using `selectors`.
    pub fn new(window: Window, document: Document, selectors: Selectors) -> Self {
        Self { window, document, selectors }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(element) => element,
            Err(e) => {
                tracing::warn!(selector, error = ?e, "invalid selector");
                None
            },
        }
    }

    fn board(&self) -> Option<Element> {
        self.query(&self.selectors.board)
    }

    fn control_selector(&self, control: Control) -> &str {
        match control {
            Control::Undo => &self.selectors.undo,
            Control::Redo => &self.selectors.redo,
            Control::Flip => &self.selectors.flip,
        }
    }

    fn mouse_event(&self, event: &SyntheticEvent) -> Option<MouseEvent> {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_view(Some(&self.window));
        init.set_client_x(event.at.x.round() as i32);
        init.set_client_y(event.at.y.round() as i32);
        init.set_buttons(event.buttons);

        match MouseEvent::new_with_mouse_event_init_dict(event.kind.event_type(), &init) {
            Ok(mouse_event) => Some(mouse_event),
            Err(e) => {
                tracing::warn!(kind = %event.kind, error = ?e, "failed to build mouse event");
                None
            },
        }
    }
}

impl Driver for DomDriver {
    type Element = Element;

    fn board_present(&self) -> bool {
        self.board().is_some()
    }

    fn find_square(&self, square: Square) -> Option<Element> {
        let selector = square_selector(&self.selectors.square_class_prefix, square);
        self.board()?.query_selector(&selector).ok().flatten()
    }

    fn find_control(&self, control: Control) -> Option<Element> {
        self.query(self.control_selector(control))
    }

    fn center(&self, element: &Element) -> Point {
        let rect = element.get_bounding_client_rect();
        Point::new(rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0)
    }

    fn dispatch(&self, element: &Element, event: &SyntheticEvent) {
        if let Some(mouse_event) = self.mouse_event(event)
            && let Err(e) = element.dispatch_event(&mouse_event)
        {
            tracing::warn!(kind = %event.kind, error = ?e, "dispatch threw");
        }
    }

    fn highlight(&self, element: &Element, duration: Duration) {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        if element.style().set_property("box-shadow", HIGHLIGHT_SHADOW).is_err() {
            return;
        }

        let element = element.clone();
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            let _ = element.style().remove_property("box-shadow");
        })
        .forget();
    }

    fn is_enabled(&self, element: &Element) -> bool {
        match element.dyn_ref::<HtmlButtonElement>() {
            Some(button) => !button.disabled(),
            None => !element.has_attribute("disabled"),
        }
    }

    fn click(&self, element: &Element) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            element.click();
        }
    }

    fn notify(&self, notice: &Notice, duration: Duration) {
        if let Err(e) = notice::show(&self.document, &self.selectors.notice_class, notice, duration) {
            tracing::warn!(error = %e, text = %notice.text, "failed to show notice");
        }
    }

    fn focus_board(&self) {
        let Some(board) = self.query(&self.selectors.board_focus) else {
            return;
        };
        let _ = board.set_attribute("tabindex", "-1");
        if let Some(board) = board.dyn_ref::<HtmlElement>() {
            let _ = board.focus();
        }
    }
}
