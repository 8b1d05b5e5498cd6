#![forbid(unsafe_code)]

//! Off-canvas drawer controller.
//!
//! A sibling headless controller for the page's slide-in menu: a trigger
//! button toggles it, a close button closes it, and a press anywhere outside
//! the drawer (and not on its trigger) dismisses it. The host mirrors the
//! open flag as a class name and the hidden flag as `aria-hidden`.
//!
//! No coupling to the sheet controller; the two share only the idiom.

use tracing::debug;

use crate::observer::{Subscribers, Subscription};

// ---------------------------------------------------------------------------
// State and events
// ---------------------------------------------------------------------------

/// Whether the drawer is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    /// Whether the drawer is open.
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Input events for the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    /// The trigger (burger) button was pressed.
    ToggleTrigger,
    /// The drawer's close button was pressed.
    CloseButton,
    /// A press landed somewhere on the page.
    ///
    /// Dismisses an open drawer unless the press was inside the drawer or
    /// on its trigger (the trigger already toggled).
    BackdropPress {
        inside_drawer: bool,
        on_trigger: bool,
    },
}

/// What the host applies: the open class and the `aria-hidden` analogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerSnapshot {
    pub state: DrawerState,
    /// `true` exactly when the drawer is closed.
    pub hidden: bool,
}

impl DrawerSnapshot {
    const fn of(state: DrawerState) -> Self {
        Self {
            state,
            hidden: !state.is_open(),
        }
    }
}

// ---------------------------------------------------------------------------
// DrawerController
// ---------------------------------------------------------------------------

/// Owns the drawer's open/closed state.
pub struct DrawerController {
    state: DrawerState,
    subscribers: Subscribers<DrawerSnapshot>,
}

impl Default for DrawerController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DrawerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerController")
            .field("state", &self.state)
            .finish()
    }
}

impl DrawerController {
    /// Create a controller with the drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DrawerState::Closed,
            subscribers: Subscribers::new(),
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DrawerSnapshot {
        DrawerSnapshot::of(self.state)
    }

    /// Register a change callback; dropping the guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&DrawerSnapshot) + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// Process one event, returning the new snapshot when the state changed.
    pub fn process(&mut self, event: &DrawerEvent) -> Option<DrawerSnapshot> {
        let next = match *event {
            DrawerEvent::ToggleTrigger => match self.state {
                DrawerState::Closed => DrawerState::Open,
                DrawerState::Open => DrawerState::Closed,
            },
            DrawerEvent::CloseButton => DrawerState::Closed,
            DrawerEvent::BackdropPress {
                inside_drawer,
                on_trigger,
            } => {
                if self.state.is_open() && !inside_drawer && !on_trigger {
                    DrawerState::Closed
                } else {
                    self.state
                }
            }
        };

        if next == self.state {
            return None;
        }
        self.state = next;
        let snapshot = DrawerSnapshot::of(next);
        debug!(state = ?next, "drawer state changed");
        self.subscribers.notify(&snapshot);
        Some(snapshot)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
