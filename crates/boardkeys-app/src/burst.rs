//! Synthetic pointer bursts.
//!
//! The board widget reacts to real pointer input, so a square is "clicked" by
//! dispatching the same sequence a mouse would produce, in a fixed order, at
//! the element's centre. Every event in the burst fires; nothing short-circuits
//! on whether a listener consumed an earlier one.

use std::fmt;

/// Viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl Point {
    /// Point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One event type in a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// `pointerover`
    PointerOver,
    /// `mouseover`
    MouseOver,
    /// `pointerdown`
    PointerDown,
    /// `mousedown`
    MouseDown,
    /// `mouseup`
    MouseUp,
    /// `pointerup`
    PointerUp,
    /// `click`
    Click,
}

impl PointerKind {
    /// Dispatch order for one square.
    pub const BURST: [PointerKind; 7] = [
        Self::PointerOver,
        Self::MouseOver,
        Self::PointerDown,
        Self::MouseDown,
        Self::MouseUp,
        Self::PointerUp,
        Self::Click,
    ];

    /// DOM event type name.
    pub fn event_type(self) -> &'static str {
        match self {
            Self::PointerOver => "pointerover",
            Self::MouseOver => "mouseover",
            Self::PointerDown => "pointerdown",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::PointerUp => "pointerup",
            Self::Click => "click",
        }
    }

    /// Pressed-button mask: primary button held for the two "down" events.
    pub fn buttons(self) -> u16 {
        match self {
            Self::PointerDown | Self::MouseDown => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

/// A fully described synthetic event. Always bubbling and cancelable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticEvent {
    /// Event type.
    pub kind: PointerKind,
    /// Where the pointer is.
    pub at: Point,
    /// Pressed-button mask.
    pub buttons: u16,
}

impl SyntheticEvent {
    /// Event of `kind` at `at`.
    pub fn new(kind: PointerKind, at: Point) -> Self {
        Self { kind, at, buttons: kind.buttons() }
    }

    /// The full burst at `at`, in dispatch order.
    pub fn burst(at: Point) -> impl Iterator<Item = SyntheticEvent> {
        PointerKind::BURST.into_iter().map(move |kind| Self::new(kind, at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_down_events_hold_the_button() {
        let held: Vec<_> = SyntheticEvent::burst(Point::default())
            .filter(|e| e.buttons == 1)
            .map(|e| e.kind.event_type())
            .collect();
        assert_eq!(held, ["pointerdown", "mousedown"]);
    }

    #[test]
    fn burst_ends_with_click() {
        let last = SyntheticEvent::burst(Point::new(10.0, 20.0)).last();
        assert_eq!(last.map(|e| (e.kind, e.at)), Some((PointerKind::Click, Point::new(10.0, 20.0))));
    }
}
