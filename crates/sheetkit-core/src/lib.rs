#![forbid(unsafe_code)]

//! Core: state model, gesture resolution, and host binding for sheetkit.
//!
//! # Role in sheetkit
//! `sheetkit-core` is the whole machine. It owns the committed sheet state,
//! resolves pointer gestures and taps into state transitions, and emits the
//! commands a host applies to its view layer.
//!
//! # Primary responsibilities
//! - **SheetController**: the drag/tap/resize state machine.
//! - **SheetEvent / SheetCommand**: the input and output vocabulary.
//! - **SheetHost / SheetDriver**: attach contract and command pumping.
//! - **Subscribers**: change notification for committed snapshots.
//! - **DrawerController**: the page's off-canvas menu, same idiom.
//!
//! # How it fits in the system
//! The facade crate (`sheetkit`) re-exports this surface. Hosts translate
//! their native input into [`event::SheetEvent`] values, feed them through a
//! [`host::SheetDriver`], and style off the resulting
//! [`state::PresentationFlags`].

pub mod controller;
pub mod drawer;
pub mod event;
pub mod host;
pub mod observer;
pub mod state;

pub use controller::{SheetCommand, SheetConfig, SheetController};
pub use drawer::{DrawerController, DrawerEvent, DrawerSnapshot, DrawerState};
pub use event::{DragSource, PointerButton, PointerId, SheetEvent};
pub use host::{RecordingHost, Regions, SheetDriver, SheetHost};
pub use observer::{Subscribers, Subscription};
pub use state::{PresentationFlags, SheetOffset, SheetSnapshot, SheetState};
