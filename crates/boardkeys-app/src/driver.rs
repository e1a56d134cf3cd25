//! Driver trait for abstracting the host page.
//!
//! The [`Driver`] trait decouples the state machine and executor from the
//! concrete board widget. Each platform implements it against its own element
//! handles, while the generic [`crate::Runtime`] handles all orchestration.
//!
//! # Implementations
//!
//! - **Browser**: web-sys DOM lookups, synthetic `MouseEvent`s, toast element
//! - **Simulation**: recording board with virtual time for tests

use std::time::Duration;

use boardkeys_core::{Control, Notice, Square};

use crate::burst::{Point, SyntheticEvent};

/// Narrow capability interface onto the host page.
///
/// Lookups return `None` when the page has no matching element. All methods
/// take `&self`: the host is single-threaded and implementations use interior
/// mutability where they record anything.
pub trait Driver {
    /// Handle to an opaque page element.
    type Element: Clone;

    /// Returns true if the board container exists.
    fn board_present(&self) -> bool;

    /// Element for `square` inside the board container.
    fn find_square(&self, square: Square) -> Option<Self::Element>;

    /// Element for one of the widget's controls.
    fn find_control(&self, control: Control) -> Option<Self::Element>;

    /// Centre of the element in viewport coordinates.
    fn center(&self, element: &Self::Element) -> Point;

    /// Dispatch one synthetic event directly on the element.
    fn dispatch(&self, element: &Self::Element, event: &SyntheticEvent);

    /// Outline the element; cleared automatically after `duration`.
    fn highlight(&self, element: &Self::Element, duration: Duration);

    /// Returns true if the element accepts clicks.
    fn is_enabled(&self, element: &Self::Element) -> bool;

    /// Click the element.
    fn click(&self, element: &Self::Element);

    /// Show `notice`, replacing any visible one; removed after `duration`.
    fn notify(&self, notice: &Notice, duration: Duration);

    /// Give the board keyboard focus, if it exists.
    fn focus_board(&self);
}
