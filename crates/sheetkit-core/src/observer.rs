#![forbid(unsafe_code)]

//! Change-notification registry for controller snapshots.
//!
//! [`Subscribers<T>`] is the callback half of an observable value: the
//! controller owns the value and decides *when* it changed; the registry
//! fans the new value out to live subscribers.
//!
//! # Design
//!
//! Callbacks are stored as `Weak` references. [`Subscribers::subscribe`]
//! hands back a [`Subscription`] guard holding the only strong reference;
//! dropping the guard unsubscribes the callback (it is pruned lazily on the
//! next notification cycle).
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. A dropped [`Subscription`] guard's callback is never invoked again.
//! 3. Dead entries are pruned during [`Subscribers::notify`], never eagerly.
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: a callback that feeds an event back into the
//!   controller that is mid-notification indicates a design bug in the host's
//!   subscriber graph; the registry itself tolerates it (callbacks are
//!   collected before any is invoked), but the resulting event ordering is
//!   the host's problem.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

/// A registry of change callbacks for a value of type `T`.
///
/// Deliberately `!Send`: this models a single-threaded UI surface.
pub struct Subscribers<T> {
    entries: RefCell<Vec<CallbackWeak<T>>>,
}

impl<T: 'static> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.borrow().len())
            .finish()
    }
}

impl<T: 'static> Subscribers<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback, returning the guard that keeps it alive.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.entries.borrow_mut().push(weak);
        // `Rc<dyn Fn(&T)>` cannot coerce to `Rc<dyn Any>` directly, so the
        // guard boxes the strong reference instead.
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Invoke every live callback with `value`, pruning dead entries.
    pub fn notify(&self, value: &T) {
        // Collect live callbacks first so the borrow is not held while
        // callbacks run (a callback may subscribe).
        let callbacks: Vec<CallbackRc<T>> = {
            let mut entries = self.entries.borrow_mut();
            entries.retain(|w| w.strong_count() > 0);
            entries.iter().filter_map(Weak::upgrade).collect()
        };

        for cb in &callbacks {
            cb(value);
        }
    }

    /// Number of registered entries, including dead ones not yet pruned.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.borrow().len()
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the guard drops the only strong reference to the callback, so
/// the registry's `Weak` fails to upgrade on the next notification.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
