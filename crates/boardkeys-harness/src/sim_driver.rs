//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` stands in for the board page. It implements [`Driver`] so the
//! same [`boardkeys_app::Runtime`] orchestration code runs in both the browser
//! and simulation. Every effect is recorded with its virtual timestamp for
//! oracle checks.
//!
//! The default page is a full board in white orientation with 80px squares,
//! enabled undo/redo/flip controls, and an empty notice area.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    fmt::Write as _,
    time::Duration,
};

use boardkeys_app::{Driver, Point, PointerKind, SyntheticEvent};
use boardkeys_core::{Control, Environment, Notice, Square};

use crate::SimEnv;

/// Side length of one simulated square, in pixels.
pub const SQUARE_SIZE: f64 = 80.0;

/// Element handle on the simulated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimElement {
    /// A board square.
    Square(Square),
    /// A widget control.
    Control(Control),
}

/// A synthetic event as it reached a square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedEvent {
    /// Virtual time of dispatch.
    pub at: Duration,
    /// Target square.
    pub square: Square,
    /// The event.
    pub event: SyntheticEvent,
}

/// Consecutive events dispatched on one square.
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    /// Target square.
    pub square: Square,
    /// Time of the first event.
    pub at: Duration,
    /// Event types in dispatch order.
    pub kinds: Vec<PointerKind>,
}

/// A notice as shown on the simulated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownNotice {
    /// The notice.
    pub notice: Notice,
    /// When it appeared.
    pub shown_at: Duration,
    /// When it is removed.
    pub expires_at: Duration,
}

/// Simulated page state.
#[derive(Debug, Default)]
struct SharedState {
    board: bool,
    squares: HashSet<Square>,
    /// Present controls and whether each is enabled.
    controls: HashMap<Control, bool>,
    events: Vec<RecordedEvent>,
    highlights: Vec<(Square, Duration)>,
    clicks: Vec<Control>,
    /// Every notice ever shown, in order.
    history: Vec<ShownNotice>,
    /// Notice elements currently attached to the page.
    on_screen: Vec<ShownNotice>,
    max_on_screen: usize,
    focused: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] so the same [`boardkeys_app::Runtime`] orchestration
/// code runs in both the browser and simulation tests.
#[derive(Debug)]
pub struct SimDriver {
    env: SimEnv,
    state: RefCell<SharedState>,
}

impl SimDriver {
    /// Full board with all controls enabled, timestamped by `env`.
    pub fn new(env: SimEnv) -> Self {
        let state = SharedState {
            board: true,
            squares: Square::all().collect(),
            controls: [(Control::Undo, true), (Control::Redo, true), (Control::Flip, true)]
                .into_iter()
                .collect(),
            ..SharedState::default()
        };
        Self { env, state: RefCell::new(state) }
    }

    /// Remove the board container.
    #[must_use]
    pub fn without_board(self) -> Self {
        self.state.borrow_mut().board = false;
        self
    }

    /// Remove one square's element.
    #[must_use]
    pub fn without_square(self, square: Square) -> Self {
        self.state.borrow_mut().squares.remove(&square);
        self
    }

    /// Remove a control.
    #[must_use]
    pub fn without_control(self, control: Control) -> Self {
        self.state.borrow_mut().controls.remove(&control);
        self
    }

    /// Enable or disable a control, adding it if missing.
    pub fn set_enabled(&self, control: Control, enabled: bool) {
        self.state.borrow_mut().controls.insert(control, enabled);
    }

    /// Every synthetic event dispatched so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.state.borrow().events.clone()
    }

    /// Dispatched events grouped into per-square bursts.
    pub fn bursts(&self) -> Vec<Burst> {
        let state = self.state.borrow();
        let mut bursts: Vec<Burst> = Vec::new();
        for recorded in &state.events {
            match bursts.last_mut() {
                Some(burst)
                    if burst.square == recorded.square
                        && burst.kinds.len() < PointerKind::BURST.len() =>
                {
                    burst.kinds.push(recorded.event.kind);
                },
                _ => bursts.push(Burst {
                    square: recorded.square,
                    at: recorded.at,
                    kinds: vec![recorded.event.kind],
                }),
            }
        }
        bursts
    }

    /// One line per dispatched event: time, square, type, position, buttons.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for recorded in &self.state.borrow().events {
            let _ = writeln!(
                out,
                "{}ms {} {} ({}, {}) buttons={}",
                recorded.at.as_millis(),
                recorded.square,
                recorded.event.kind,
                recorded.event.at.x,
                recorded.event.at.y,
                recorded.event.buttons,
            );
        }
        out
    }

    /// Squares outlined so far, with their durations.
    pub fn highlights(&self) -> Vec<(Square, Duration)> {
        self.state.borrow().highlights.clone()
    }

    /// Controls clicked so far.
    pub fn clicks(&self) -> Vec<Control> {
        self.state.borrow().clicks.clone()
    }

    /// Every notice shown so far.
    pub fn notices(&self) -> Vec<ShownNotice> {
        self.state.borrow().history.clone()
    }

    /// Most recently shown notice, visible or not.
    pub fn last_notice(&self) -> Option<Notice> {
        self.state.borrow().history.last().map(|shown| shown.notice.clone())
    }

    /// Notices attached to the page at the current virtual time.
    pub fn visible_notices(&self) -> Vec<Notice> {
        let now = self.env.now();
        let mut state = self.state.borrow_mut();
        state.on_screen.retain(|shown| shown.expires_at > now);
        state.on_screen.iter().map(|shown| shown.notice.clone()).collect()
    }

    /// Largest number of notices ever attached at once.
    pub fn max_notices_on_screen(&self) -> usize {
        self.state.borrow().max_on_screen
    }

    /// Returns true once the board has been focused.
    pub fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }

    fn square_center(square: Square) -> Point {
        let x = f64::from(square.file.index()) * SQUARE_SIZE + SQUARE_SIZE / 2.0;
        let y = f64::from(7 - square.rank.index()) * SQUARE_SIZE + SQUARE_SIZE / 2.0;
        Point::new(x, y)
    }
}

impl Driver for SimDriver {
    type Element = SimElement;

    fn board_present(&self) -> bool {
        self.state.borrow().board
    }

    fn find_square(&self, square: Square) -> Option<SimElement> {
        let state = self.state.borrow();
        (state.board && state.squares.contains(&square)).then_some(SimElement::Square(square))
    }

    fn find_control(&self, control: Control) -> Option<SimElement> {
        self.state.borrow().controls.contains_key(&control).then_some(SimElement::Control(control))
    }

    fn center(&self, element: &SimElement) -> Point {
        match element {
            SimElement::Square(square) => Self::square_center(*square),
            SimElement::Control(_) => Point::default(),
        }
    }

    fn dispatch(&self, element: &SimElement, event: &SyntheticEvent) {
        // Controls are clicked through `click`, never through bursts
        if let SimElement::Square(square) = element {
            let at = self.env.now();
            self.state.borrow_mut().events.push(RecordedEvent { at, square: *square, event: *event });
        }
    }

    fn highlight(&self, element: &SimElement, duration: Duration) {
        if let SimElement::Square(square) = element {
            self.state.borrow_mut().highlights.push((*square, duration));
        }
    }

    fn is_enabled(&self, element: &SimElement) -> bool {
        match element {
            SimElement::Control(control) => {
                self.state.borrow().controls.get(control).copied().unwrap_or(false)
            },
            SimElement::Square(_) => true,
        }
    }

    fn click(&self, element: &SimElement) {
        if let SimElement::Control(control) = element {
            tracing::trace!(%control, "sim click");
            self.state.borrow_mut().clicks.push(*control);
        }
    }

    fn notify(&self, notice: &Notice, duration: Duration) {
        let now = self.env.now();
        let shown = ShownNotice { notice: notice.clone(), shown_at: now, expires_at: now + duration };

        let mut state = self.state.borrow_mut();
        state.on_screen.clear();
        state.on_screen.push(shown.clone());
        state.max_on_screen = state.max_on_screen.max(state.on_screen.len());
        state.history.push(shown);
    }

    fn focus_board(&self) {
        let mut state = self.state.borrow_mut();
        if state.board {
            state.focused = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn missing_board_hides_squares() {
        let driver = SimDriver::new(SimEnv::new()).without_board();
        assert!(!driver.board_present());
        assert_eq!(driver.find_square(square("e2")), None);
    }

    #[test]
    fn square_centers_follow_white_orientation() {
        let driver = SimDriver::new(SimEnv::new());
        assert_eq!(driver.center(&SimElement::Square(square("a1"))), Point::new(40.0, 600.0));
        assert_eq!(driver.center(&SimElement::Square(square("h8"))), Point::new(600.0, 40.0));
    }

    #[test]
    fn notices_expire_on_virtual_time() {
        let env = SimEnv::new();
        let driver = SimDriver::new(env.clone());
        driver.notify(&Notice::info("hello"), Duration::from_millis(3000));

        env.advance(Duration::from_millis(2999));
        assert_eq!(driver.visible_notices(), [Notice::info("hello")]);

        env.advance(Duration::from_millis(1));
        assert!(driver.visible_notices().is_empty());
    }

    #[test]
    fn disabled_control_is_found_but_not_enabled() {
        let driver = SimDriver::new(SimEnv::new());
        driver.set_enabled(Control::Undo, false);

        let element = driver.find_control(Control::Undo);
        assert_eq!(element, Some(SimElement::Control(Control::Undo)));
        assert!(!driver.is_enabled(&SimElement::Control(Control::Undo)));
    }
}
