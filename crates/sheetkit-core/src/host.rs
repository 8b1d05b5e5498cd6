#![forbid(unsafe_code)]

//! Host binding: the surface a sheet controller drives.
//!
//! A [`SheetHost`] is the embedding layer's view of the page: it reports
//! which structural roles exist (panel, handle, content, map), supplies the
//! peek height and viewport height at attach time, and applies
//! [`SheetCommand`]s to its view layer.
//!
//! [`SheetDriver::attach`] wires a controller to a host. When the host is
//! missing any required region the driver comes up **inert**: attach still
//! succeeds, every event is a no-op, and nothing surfaces to the embedder.
//! This is a deliberate defensive contract ("feature unavailable"), not an
//! error.

use tracing::debug;

use crate::controller::{SheetCommand, SheetConfig, SheetController};
use crate::event::SheetEvent;

use bitflags::bitflags;

bitflags! {
    /// Structural roles a host must expose for the sheet gesture to work.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Regions: u8 {
        /// The sheet element itself.
        const PANEL = 1 << 0;
        /// The drag handle strip.
        const HANDLE = 1 << 1;
        /// The scrollable content region.
        const CONTENT = 1 << 2;
        /// The underlying map surface.
        const MAP = 1 << 3;
    }
}

/// The embedding layer a [`SheetDriver`] applies commands to.
///
/// Every method is infallible by contract: command application is a
/// best-effort visual adjustment, and a host that cannot honor one (for
/// example releasing a pointer whose capture was already lost) swallows the
/// failure.
pub trait SheetHost {
    /// Which structural roles the page exposes.
    fn regions(&self) -> Regions;

    /// Peek-strip height in pixels, if the page declares one (the CSS
    /// custom property analogue). `None` falls back to the configured
    /// default.
    fn peek_height(&self) -> Option<f64>;

    /// Current viewport height in pixels.
    fn viewport_height(&self) -> f64;

    /// Apply one command to the view layer.
    fn apply(&mut self, command: &SheetCommand);
}

/// Wires a [`SheetController`] to a [`SheetHost`] and pumps commands.
pub struct SheetDriver<H: SheetHost> {
    controller: SheetController,
    host: H,
    enabled: bool,
}

impl<H: SheetHost> SheetDriver<H> {
    /// Attach with the default configuration.
    #[must_use]
    pub fn attach(host: H) -> Self {
        Self::attach_with(host, SheetConfig::default())
    }

    /// Attach with an explicit configuration.
    ///
    /// The host's declared peek height overrides `config.peek_height`. If
    /// the host is missing any required region the driver is inert.
    #[must_use]
    pub fn attach_with(host: H, mut config: SheetConfig) -> Self {
        let enabled = host.regions().contains(Regions::all());
        if !enabled {
            debug!(regions = ?host.regions(), "sheet driver attached inert");
        }
        if let Some(peek) = host.peek_height() {
            config.peek_height = peek;
        }
        let controller = SheetController::new(config, host.viewport_height());
        Self {
            controller,
            host,
            enabled,
        }
    }

    /// Whether the driver is live. An inert driver ignores every event.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feed one event through the controller and apply the resulting
    /// commands to the host.
    pub fn handle(&mut self, event: &SheetEvent) {
        if !self.enabled {
            return;
        }
        for command in self.controller.process(event) {
            self.host.apply(&command);
        }
    }

    /// The underlying controller (for snapshots and subscriptions).
    #[inline]
    #[must_use]
    pub fn controller(&self) -> &SheetController {
        &self.controller
    }

    /// The host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Detach, returning the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}

// ---------------------------------------------------------------------------
// RecordingHost
// ---------------------------------------------------------------------------

/// A host that records every applied command, for tests and headless
/// embedding experiments.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    regions: Regions,
    peek_height: Option<f64>,
    viewport_height: f64,
    /// Commands applied so far, in order.
    pub commands: Vec<SheetCommand>,
}

impl RecordingHost {
    /// A complete host with the given viewport height and no declared peek
    /// height (the attach fallback applies).
    #[must_use]
    pub fn new(viewport_height: f64) -> Self {
        Self {
            regions: Regions::all(),
            peek_height: None,
            viewport_height,
            commands: Vec::new(),
        }
    }

    /// Override the regions the host reports.
    #[must_use]
    pub fn with_regions(mut self, regions: Regions) -> Self {
        self.regions = regions;
        self
    }

    /// Declare a peek height.
    #[must_use]
    pub fn with_peek_height(mut self, peek_height: f64) -> Self {
        self.peek_height = Some(peek_height);
        self
    }

    /// Drain the recorded commands.
    pub fn take_commands(&mut self) -> Vec<SheetCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl SheetHost for RecordingHost {
    fn regions(&self) -> Regions {
        self.regions
    }

    fn peek_height(&self) -> Option<f64> {
        self.peek_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn apply(&mut self, command: &SheetCommand) {
        self.commands.push(*command);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
