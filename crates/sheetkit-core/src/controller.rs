#![forbid(unsafe_code)]

//! The draggable bottom-sheet state machine.
//!
//! [`SheetController`] translates pointer input, discrete taps, and resize
//! events into transitions between the three resting states of a sheet
//! presented over a map ([`SheetState::Split`] / [`SheetState::Peek`] /
//! [`SheetState::Full`]), and into [`SheetCommand`]s the host applies to its
//! view layer.
//!
//! # State Machine
//!
//! Discrete taps move between resting states directly: a map tap toggles
//! `Split ↔ Peek` (ignored while `Full`), a handle tap promotes to `Full`
//! from anywhere else and demotes `Full → Peek`.
//!
//! A drag session begins on a primary-button press over the handle, or over
//! the content region only while the content is scrolled to its top. During
//! the session the sheet tracks the pointer with transitions suspended; on
//! release the travelled distance `dy` is resolved against a fixed threshold:
//!
//! 1. `dy < -threshold` → commit `Full`.
//! 2. `dy > threshold` → commit `Peek` (from `Full`, `Peek`, and `Split` alike).
//! 3. otherwise → snap back to the state the drag started in.
//!
//! # Invariants
//!
//! 1. Exactly one resting state is committed at any time; taps and releases
//!    are the only commit points.
//! 2. At most one drag session exists, locked to the pointer id that opened
//!    it; events from other pointers are ignored until it ends.
//! 3. A `PointerCancel` resolves exactly like a `PointerUp` at the last
//!    observed y.
//! 4. Subscribers observe committed snapshots only, never live drag offsets.
//!
//! # Failure Modes
//!
//! There is no failure channel by contract: every operation is a best-effort
//! visual adjustment. Commands that a host cannot honor (for example a
//! pointer release after capture was lost) are dropped by the host without
//! affecting the committed state.

use tracing::{debug, trace};

use crate::event::{DragSource, PointerButton, PointerId, SheetEvent};
use crate::observer::{Subscribers, Subscription};
use crate::state::{PresentationFlags, SheetOffset, SheetSnapshot, SheetState};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Geometry thresholds for the sheet gesture.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Height of the peek strip in pixels (default: 80.0).
    ///
    /// Read once at attach time; a host-provided value (the CSS custom
    /// property analogue) overrides this default.
    pub peek_height: f64,
    /// Minimum drag distance in pixels before a release commits a state
    /// change instead of snapping back (default: 80.0).
    pub drag_threshold: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            peek_height: 80.0,
            drag_threshold: 80.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Imperative output applied by the host, in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetCommand {
    /// Apply or clear the sheet's inline vertical translation.
    SetOffset(SheetOffset),
    /// Replace the full presentation flag set (class-name analogues).
    SetFlags(PresentationFlags),
    /// Enable or disable the sheet's transition animation. Disabled for the
    /// duration of a drag so the sheet tracks the finger with zero lag.
    SetTransitions(bool),
    /// Capture subsequent events of this pointer on the initiating element.
    CapturePointer(PointerId),
    /// Release a previously captured pointer. Best-effort: hosts swallow
    /// release failures.
    ReleasePointer(PointerId),
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Tracks an active drag between pointer-down and up/cancel.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    pointer: PointerId,
    start_y: f64,
    current_y: f64,
}

// ---------------------------------------------------------------------------
// SheetController
// ---------------------------------------------------------------------------

/// Owns the sheet's committed state and resolves input into commands.
///
/// The controller is the single writer of the state, the derived
/// presentation flags, and the canonical offset; hosts never write back.
/// Deliberately `!Send`: it models a single-threaded UI surface.
pub struct SheetController {
    config: SheetConfig,
    viewport_height: f64,
    state: SheetState,
    /// Canonical resting offset currently applied (live drag offsets are
    /// command-stream only).
    offset: SheetOffset,
    session: Option<DragSession>,
    subscribers: Subscribers<SheetSnapshot>,
}

impl std::fmt::Debug for SheetController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetController")
            .field("state", &self.state)
            .field("dragging", &self.session.is_some())
            .finish()
    }
}

impl SheetController {
    /// Create a controller in the initial `Split` state.
    #[must_use]
    pub fn new(config: SheetConfig, viewport_height: f64) -> Self {
        Self {
            config,
            viewport_height,
            state: SheetState::Split,
            offset: SheetOffset::Auto,
            session: None,
            subscribers: Subscribers::new(),
        }
    }

    /// The committed resting state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Whether a drag session is active.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The current committed snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SheetSnapshot {
        SheetSnapshot {
            state: self.state,
            flags: self.state.flags(),
            offset: self.offset,
        }
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Register a callback invoked after every committed snapshot change.
    ///
    /// Dropping the returned guard unsubscribes the callback.
    pub fn subscribe(&self, callback: impl Fn(&SheetSnapshot) + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// Process one input event, returning the commands for the host to apply
    /// in order.
    pub fn process(&mut self, event: &SheetEvent) -> Vec<SheetCommand> {
        match *event {
            SheetEvent::PointerDown {
                pointer,
                button,
                y,
                source,
            } => self.on_pointer_down(pointer, button, y, source),
            SheetEvent::PointerMove { pointer, y } => self.on_pointer_move(pointer, y),
            SheetEvent::PointerUp { pointer, y } => self.on_release(pointer, Some(y)),
            SheetEvent::PointerCancel { pointer } => self.on_release(pointer, None),
            SheetEvent::TapMap => self.on_tap_map(),
            SheetEvent::TapHandle => self.on_tap_handle(),
            SheetEvent::Resize { viewport_height } => self.on_resize(viewport_height),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl SheetController {
    fn on_pointer_down(
        &mut self,
        pointer: PointerId,
        button: PointerButton,
        y: f64,
        source: DragSource,
    ) -> Vec<SheetCommand> {
        // First-pointer lock: one session at a time.
        if self.session.is_some() {
            return Vec::new();
        }
        if button != PointerButton::Primary {
            return Vec::new();
        }
        // Content presses only begin a drag when the content is scrolled to
        // its top, so the gesture never hijacks normal inner scrolling.
        if let DragSource::Content { scroll_top } = source
            && scroll_top > 0.0
        {
            return Vec::new();
        }

        self.session = Some(DragSession {
            pointer,
            start_y: y,
            current_y: y,
        });
        debug!(pointer = pointer.0, start_y = y, "drag session started");

        vec![
            SheetCommand::SetTransitions(false),
            SheetCommand::CapturePointer(pointer),
        ]
    }

    fn on_pointer_move(&mut self, pointer: PointerId, y: f64) -> Vec<SheetCommand> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if session.pointer != pointer {
            return Vec::new();
        }

        session.current_y = y;
        let dy = session.current_y - session.start_y;
        let live = match self.state {
            // Full and Split only track downward; an upward promote gesture
            // is resolved from raw dy at release.
            SheetState::Full | SheetState::Split => dy.max(0.0),
            SheetState::Peek => {
                let baseline = self.viewport_height - self.config.peek_height;
                (baseline + dy).max(0.0).min(baseline)
            }
        };
        trace!(dy, live, "drag move");
        vec![SheetCommand::SetOffset(SheetOffset::Px(live))]
    }

    /// Shared release path for pointer-up and pointer-cancel. A cancel has no
    /// release coordinate and resolves at the last observed y.
    fn on_release(&mut self, pointer: PointerId, y: Option<f64>) -> Vec<SheetCommand> {
        let Some(session) = self.session.take_if(|s| s.pointer == pointer) else {
            return Vec::new();
        };

        let end_y = y.unwrap_or(session.current_y);
        let dy = end_y - session.start_y;
        let threshold = self.config.drag_threshold;

        let target = if dy < -threshold {
            SheetState::Full
        } else if dy > threshold {
            SheetState::Peek
        } else {
            // Below threshold: discard the aborted drag's live offset and
            // re-commit the state the session started in.
            self.state
        };
        debug!(pointer = pointer.0, dy, ?target, "drag session resolved");

        let mut commands = vec![SheetCommand::SetTransitions(true)];
        commands.extend(self.commit(target));
        // Capture release comes last and is best-effort on the host side.
        commands.push(SheetCommand::ReleasePointer(pointer));
        commands
    }

    fn on_tap_map(&mut self) -> Vec<SheetCommand> {
        match self.state {
            // Taps on the map are inert while the sheet covers it.
            SheetState::Full => Vec::new(),
            SheetState::Split => self.commit(SheetState::Peek),
            SheetState::Peek => self.commit(SheetState::Split),
        }
    }

    fn on_tap_handle(&mut self) -> Vec<SheetCommand> {
        match self.state {
            SheetState::Full => self.commit(SheetState::Peek),
            SheetState::Split | SheetState::Peek => self.commit(SheetState::Full),
        }
    }

    fn on_resize(&mut self, viewport_height: f64) -> Vec<SheetCommand> {
        self.viewport_height = viewport_height;

        // Clear the inline transform and any animation override and let the
        // host stylesheet re-establish the resting visual for the current
        // flags. Logical state and flags are unchanged.
        let before = self.snapshot();
        self.offset = SheetOffset::Auto;
        let after = self.snapshot();
        if after != before {
            self.subscribers.notify(&after);
        }

        vec![
            SheetCommand::SetTransitions(true),
            SheetCommand::SetOffset(SheetOffset::Auto),
        ]
    }

    /// Commit `target` as the resting state, re-applying its canonical
    /// offset, and notify subscribers if the snapshot changed.
    ///
    /// Committing the current state is how an aborted drag snaps back: the
    /// flag set is re-emitted and the canonical offset replaces whatever
    /// live transform the drag left behind.
    fn commit(&mut self, target: SheetState) -> Vec<SheetCommand> {
        let before = self.snapshot();

        self.state = target;
        self.offset = self.rest_offset(target);

        let after = self.snapshot();
        if after != before {
            debug!(state = ?after.state, "sheet state committed");
            self.subscribers.notify(&after);
        }

        vec![
            SheetCommand::SetFlags(target.flags()),
            SheetCommand::SetOffset(self.offset),
        ]
    }

    /// The canonical offset a state rests at absent any active drag.
    fn rest_offset(&self, state: SheetState) -> SheetOffset {
        match state {
            // Full-screen and split visuals are governed by the stylesheet.
            SheetState::Full | SheetState::Split => SheetOffset::Auto,
            SheetState::Peek => {
                SheetOffset::Px(self.viewport_height - self.config.peek_height)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
