#![forbid(unsafe_code)]

//! Input events consumed by the sheet controller.
//!
//! The host layer translates its native input (DOM pointer events, a test
//! script, a replay log) into [`SheetEvent`] values and feeds them to
//! [`SheetController::process`](crate::controller::SheetController::process).
//! Coordinates are viewport-relative pixels with y growing downward.
//!
//! Discrete taps ([`SheetEvent::TapMap`], [`SheetEvent::TapHandle`]) arrive
//! independently of the pointer stream: a host click layer typically
//! synthesizes them after the matching pointer-up, so a below-threshold drag
//! on the handle followed by a handle tap is a normal sequence, not an error.

/// Identifies one pointer (finger, pen, or mouse) across a
/// down → move → up/cancel sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// Which button initiated a pointer-down.
///
/// Touch contacts and pen tips map to `Primary`. Only `Primary` presses can
/// begin a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, touch contact, or pen tip.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button or other auxiliary button.
    Auxiliary,
}

/// Where a drag-initiating pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSource {
    /// The dedicated drag handle strip.
    Handle,
    /// The scrollable content region.
    ///
    /// Carries the region's scroll offset at press time: a drag only begins
    /// when the content is scrolled to its top (`scroll_top <= 0`), so the
    /// gesture never hijacks normal inner scrolling.
    Content {
        /// Scroll offset of the content region, in pixels.
        scroll_top: f64,
    },
}

/// An input event for the sheet controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    /// A pointer was pressed over the handle or content region.
    PointerDown {
        pointer: PointerId,
        button: PointerButton,
        /// Viewport-relative y coordinate of the press.
        y: f64,
        source: DragSource,
    },

    /// The pointer moved while pressed.
    PointerMove { pointer: PointerId, y: f64 },

    /// The pointer was released.
    PointerUp { pointer: PointerId, y: f64 },

    /// The platform aborted the gesture (scroll takeover, window blur).
    ///
    /// Treated identically to [`SheetEvent::PointerUp`] at the last observed
    /// y, so a session never leaks an active drag.
    PointerCancel { pointer: PointerId },

    /// Discrete tap on the map surface.
    TapMap,

    /// Discrete tap on the drag handle.
    TapHandle,

    /// The viewport was resized.
    Resize {
        /// New viewport height in pixels.
        viewport_height: f64,
    },
}

impl SheetEvent {
    /// Convenience constructor for a primary-button handle press.
    #[must_use]
    pub const fn handle_down(pointer: PointerId, y: f64) -> Self {
        Self::PointerDown {
            pointer,
            button: PointerButton::Primary,
            y,
            source: DragSource::Handle,
        }
    }

    /// Convenience constructor for a primary-button content press.
    #[must_use]
    pub const fn content_down(pointer: PointerId, y: f64, scroll_top: f64) -> Self {
        Self::PointerDown {
            pointer,
            button: PointerButton::Primary,
            y,
            source: DragSource::Content { scroll_top },
        }
    }

    /// The pointer id this event belongs to, if it is a pointer event.
    #[must_use]
    pub const fn pointer(&self) -> Option<PointerId> {
        match self {
            Self::PointerDown { pointer, .. }
            | Self::PointerMove { pointer, .. }
            | Self::PointerUp { pointer, .. }
            | Self::PointerCancel { pointer } => Some(*pointer),
            Self::TapMap | Self::TapHandle | Self::Resize { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
