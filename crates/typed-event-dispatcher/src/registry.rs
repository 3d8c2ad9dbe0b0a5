//! Registry — the ordered record sequence behind one dispatcher.
//!
//! Records are kept oldest first. Each record gets an id that is never
//! reused, so dispatch bookkeeping can claim one exact record even when the
//! same listener has been removed and re-added in the meantime.
//!
//! Nothing here calls a listener. The registry lives behind the dispatcher's
//! lock and every method is a short, non-reentrant critical section.

use crate::config::{DispatcherConfig, DuplicatePolicy};
use crate::listener::Listener;

pub(crate) type RecordId = u64;

/// One registration.
pub(crate) struct Record<T> {
    pub(crate) id: RecordId,
    pub(crate) listener: Listener<T>,
    pub(crate) fire_once: bool,
}

impl<T> Clone for Record<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            listener: self.listener.clone(),
            fire_once: self.fire_once,
        }
    }
}

pub(crate) struct Registry<T> {
    records: Vec<Record<T>>,
    next_id: RecordId,
    config: DispatcherConfig,
}

impl<T> Registry<T> {
    pub(crate) fn new(config: DispatcherConfig) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            config,
        }
    }

    pub(crate) fn config(&self) -> DispatcherConfig {
        self.config
    }

    /// Append a record for `listener`. Returns `false` when the duplicate
    /// policy turned the call into a no-op.
    pub(crate) fn insert(&mut self, listener: &Listener<T>, fire_once: bool) -> bool {
        if self.config.duplicates == DuplicatePolicy::Ignore && self.contains(listener) {
            return false;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Record {
            id,
            listener: listener.clone(),
            fire_once,
        });
        true
    }

    /// Remove the oldest record for `listener`, if any.
    pub(crate) fn remove(&mut self, listener: &Listener<T>) -> bool {
        match self.records.iter().position(|r| r.listener.same(listener)) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns `false` if it is already gone.
    pub(crate) fn claim(&mut self, id: RecordId) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Copy of the current records in dispatch order.
    pub(crate) fn snapshot(&self) -> Vec<Record<T>> {
        self.records.clone()
    }

    pub(crate) fn contains(&self, listener: &Listener<T>) -> bool {
        self.records.iter().any(|r| r.listener.same(listener))
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
