//! Event — the subscriber-facing view of a dispatcher.
//!
//! An [`Event`] can add and remove listeners but cannot dispatch:
//!
//! ```compile_fail
//! use typed_event_dispatcher::EventDispatcher;
//!
//! let dispatcher = EventDispatcher::<u32>::new();
//! dispatcher.getter().dispatch(&1);
//! ```
//!
//! The view holds a weak handle. It never keeps the registry alive on its
//! own; once the owning [`EventDispatcher`](crate::EventDispatcher) is
//! dropped the view is detached and every call becomes a no-op.

use std::fmt;
use std::sync::Weak;

use parking_lot::Mutex;

use crate::listener::Listener;
use crate::registry::Registry;

/// Subscribe/unsubscribe access to one dispatcher's listeners.
///
/// Obtained from [`EventDispatcher::getter`](crate::EventDispatcher::getter).
/// Every view issued by the same dispatcher shares the same listener set.
pub struct Event<T> {
    registry: Weak<Mutex<Registry<T>>>,
}

impl<T> Event<T> {
    pub(crate) fn new(registry: Weak<Mutex<Registry<T>>>) -> Self {
        Self { registry }
    }

    /// Register a persistent listener.
    pub fn subscribe(&self, listener: &Listener<T>) {
        self.subscribe_with(listener, false);
    }

    /// Register a listener that is removed after its first invocation.
    pub fn subscribe_once(&self, listener: &Listener<T>) {
        self.subscribe_with(listener, true);
    }

    /// Register `listener`, optionally as one-shot.
    ///
    /// Under the default [`DuplicatePolicy::Ignore`](crate::DuplicatePolicy)
    /// re-registering a listener is a no-op and the first one-shot flag stays.
    pub fn subscribe_with(&self, listener: &Listener<T>, fire_once: bool) {
        let Some(registry) = self.registry.upgrade() else {
            tracing::debug!(?listener, "subscribe on detached event ignored");
            return;
        };
        let inserted = registry.lock().insert(listener, fire_once);
        if !inserted {
            tracing::debug!(?listener, fire_once, "listener already subscribed");
        }
    }

    /// Remove the oldest registration of `listener`. Absent listeners are
    /// ignored.
    pub fn unsubscribe(&self, listener: &Listener<T>) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().remove(listener);
        }
    }

    /// Whether `listener` is currently registered.
    pub fn contains(&self, listener: &Listener<T>) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.lock().contains(listener))
    }

    pub fn listener_count(&self) -> usize {
        self.registry
            .upgrade()
            .map_or(0, |registry| registry.lock().len())
    }

    pub fn is_empty(&self) -> bool {
        self.listener_count() == 0
    }

    /// `false` once the owning dispatcher has been dropped.
    pub fn is_attached(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl<T> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Weak::clone(&self.registry),
        }
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("attached", &self.is_attached())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
