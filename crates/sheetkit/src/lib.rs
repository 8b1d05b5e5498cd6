#![forbid(unsafe_code)]

//! Sheetkit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the core types and offers a lightweight prelude for
//! day-to-day usage.
//!
//! ```
//! use sheetkit::prelude::*;
//!
//! let mut driver = SheetDriver::attach(RecordingHost::new(800.0));
//! driver.handle(&SheetEvent::TapMap);
//! assert_eq!(driver.controller().state(), SheetState::Peek);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use sheetkit_core::controller::{SheetCommand, SheetConfig, SheetController};
pub use sheetkit_core::drawer::{DrawerController, DrawerEvent, DrawerSnapshot, DrawerState};
pub use sheetkit_core::event::{DragSource, PointerButton, PointerId, SheetEvent};
pub use sheetkit_core::host::{RecordingHost, Regions, SheetDriver, SheetHost};
pub use sheetkit_core::observer::{Subscribers, Subscription};
pub use sheetkit_core::state::{PresentationFlags, SheetOffset, SheetSnapshot, SheetState};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DragSource, PointerButton, PointerId, PresentationFlags, RecordingHost, SheetCommand,
        SheetConfig, SheetController, SheetDriver, SheetEvent, SheetHost, SheetOffset,
        SheetSnapshot, SheetState,
    };

    pub use crate::core;
}

pub use sheetkit_core as core;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
