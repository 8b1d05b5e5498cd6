#![forbid(unsafe_code)]

//! Sheet state model: resting states, presentation flags, and snapshots.
//!
//! # Invariants
//!
//! 1. Exactly one [`SheetState`] is active at any time; the initial state is
//!    [`SheetState::Split`].
//! 2. [`PresentationFlags`] are a pure function of the state
//!    ([`SheetState::flags`]). The controller is the single writer of both;
//!    hosts consume the flags (e.g. as CSS class names) and never write back.
//! 3. A snapshot's offset is the *canonical* resting offset for its state;
//!    live drag tracking is delivered through commands only and never appears
//!    in a snapshot.

use bitflags::bitflags;

#[cfg(feature = "state-persistence")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SheetState
// ---------------------------------------------------------------------------

/// One of the three resting states of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "state-persistence", derive(Serialize, Deserialize))]
pub enum SheetState {
    /// Map and sheet content share the screen; no inline transform.
    #[default]
    Split,
    /// Sheet collapsed to a thin strip at the bottom; the map has focus.
    Peek,
    /// Sheet covers the entire viewport; page scroll is disabled.
    Full,
}

impl SheetState {
    /// Presentation flags this state exposes to the host.
    #[must_use]
    pub const fn flags(self) -> PresentationFlags {
        match self {
            Self::Split => PresentationFlags::empty(),
            Self::Peek => PresentationFlags::MAP_FOCUSED,
            Self::Full => PresentationFlags::SHEET_FULL.union(PresentationFlags::NO_SCROLL),
        }
    }

    /// Whether the sheet covers the viewport.
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Whether the map has focus (sheet collapsed to its peek strip).
    #[inline]
    #[must_use]
    pub const fn is_map_focused(self) -> bool {
        matches!(self, Self::Peek)
    }
}

// ---------------------------------------------------------------------------
// PresentationFlags
// ---------------------------------------------------------------------------

bitflags! {
    /// Boolean presentation hooks the host keys styling off of.
    ///
    /// These correspond one-to-one to class names a web host would toggle:
    /// `map-focused` on a page-level container, `sheet-full` and `no-scroll`
    /// on or near the sheet element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PresentationFlags: u8 {
        /// The map has focus; the sheet rests at its peek strip.
        const MAP_FOCUSED = 1 << 0;
        /// The sheet covers the entire viewport.
        const SHEET_FULL = 1 << 1;
        /// Page-level scrolling is disabled while the sheet is full.
        const NO_SCROLL = 1 << 2;
    }
}

// ---------------------------------------------------------------------------
// SheetOffset
// ---------------------------------------------------------------------------

/// The sheet's vertical translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(Serialize, Deserialize))]
pub enum SheetOffset {
    /// No inline transform; the host stylesheet governs the resting visual
    /// for the current flags.
    Auto,
    /// Inline translation downward from the viewport top, in pixels.
    Px(f64),
}

impl SheetOffset {
    /// The pixel value, if an inline translation is applied.
    #[inline]
    #[must_use]
    pub const fn px(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Px(v) => Some(v),
        }
    }
}

// ---------------------------------------------------------------------------
// SheetSnapshot
// ---------------------------------------------------------------------------

/// What subscribers receive when the sheet's committed state changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSnapshot {
    /// The committed resting state.
    pub state: SheetState,
    /// Presentation flags derived from the state.
    pub flags: PresentationFlags,
    /// The canonical resting offset currently applied ([`SheetOffset::Auto`]
    /// after a resize even in `Peek`, until the next commit re-snaps).
    pub offset: SheetOffset,
}

impl SheetSnapshot {
    /// Whether the map has focus.
    #[inline]
    #[must_use]
    pub fn map_focused(&self) -> bool {
        self.flags.contains(PresentationFlags::MAP_FOCUSED)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
