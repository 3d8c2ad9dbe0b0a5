//! EventDispatcher<T> — the producer side of a typed event.
//!
//! Snapshot-on-dispatch semantics:
//!   - A listener added *during* dispatch is NOT called until the next one.
//!   - A persistent listener removed *during* dispatch is still called in
//!     that round.
//!   - A one-shot listener is called only if this dispatch is the one that
//!     removes it. It is claimed right before its call, so a nested dispatch
//!     or an earlier `unsubscribe` in the same round means it is skipped.
//!
//! Panics inside a listener propagate to the caller of [`dispatch`]. Records
//! visited before the panic keep their bookkeeping; later ones are untouched.
//! [`try_dispatch`] converts the panic into a [`DispatchError`] instead.
//!
//! The registry lock is released before any listener runs, so listeners may
//! subscribe, unsubscribe or dispatch again on the same dispatcher.
//!
//! [`dispatch`]: EventDispatcher::dispatch
//! [`try_dispatch`]: EventDispatcher::try_dispatch

use std::convert::Infallible;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::DispatcherConfig;
use crate::error::{DispatchError, Result};
use crate::event::Event;
use crate::listener::Listener;
use crate::registry::Registry;

/// Owns the listeners of one event and is the only thing that can fire it.
///
/// Keep the dispatcher private to the producing type and hand out
/// [`getter`](Self::getter) views to consumers.
pub struct EventDispatcher<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> EventDispatcher<T> {
    /// Create a dispatcher with no listeners and the default config.
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new(config))),
        }
    }

    pub fn config(&self) -> DispatcherConfig {
        self.registry.lock().config()
    }

    /// The subscriber-facing view of this dispatcher.
    pub fn getter(&self) -> Event<T> {
        Event::new(Arc::downgrade(&self.registry))
    }

    /// Call every listener registered at this point, oldest first, with
    /// `data`.
    pub fn dispatch(&self, data: &T) {
        self.each_listener(|_, listener| {
            listener.call(data);
            Ok::<(), Infallible>(())
        })
        .unwrap_or_else(|never| match never {});
    }

    /// Like [`dispatch`](Self::dispatch), but a panicking listener stops the
    /// round and is reported as [`DispatchError::ListenerPanicked`].
    pub fn try_dispatch(&self, data: &T) -> Result<()> {
        self.each_listener(|position, listener| {
            panic::catch_unwind(AssertUnwindSafe(|| listener.call(data))).map_err(|payload| {
                let err = DispatchError::from_panic(position, payload.as_ref());
                tracing::warn!(position, error = %err, "listener panicked during dispatch");
                err
            })
        })
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listener_count() == 0
    }

    fn each_listener<E>(
        &self,
        mut visit: impl FnMut(usize, &Listener<T>) -> Result<(), E>,
    ) -> Result<(), E> {
        // Snapshot under the lock; the guard is dropped before any callback.
        let snapshot = self.registry.lock().snapshot();
        tracing::trace!(listeners = snapshot.len(), "dispatching event");

        for (position, record) in snapshot.iter().enumerate() {
            if record.fire_once && !self.registry.lock().claim(record.id) {
                continue;
            }
            visit(position, &record.listener)?;
        }
        Ok(())
    }
}

impl EventDispatcher<()> {
    /// Dispatch a payload-less event.
    pub fn notify(&self) {
        self.dispatch(&());
    }
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock();
        f.debug_struct("EventDispatcher")
            .field("listeners", &registry.len())
            .field("config", &registry.config())
            .finish()
    }
}
