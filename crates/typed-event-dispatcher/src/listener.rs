//! Listener — a shared, reference-identified callback handle.
//!
//! A [`Listener`] wraps its closure in an `Arc`, so clones are cheap and all
//! clones refer to the same callback. Identity is the `Arc` allocation: two
//! listeners are equal only when one was cloned from the other, never because
//! their closures happen to do the same thing.

use std::fmt;
use std::sync::Arc;

/// Closure type stored behind a [`Listener`].
pub type ListenerFn<T> = dyn Fn(&T) + Send + Sync;

/// A callback registered to receive event payloads of type `T`.
///
/// Keep a clone of the handle around if you intend to unsubscribe it later;
/// [`Event::unsubscribe`](crate::Event::unsubscribe) matches by reference.
pub struct Listener<T> {
    callback: Arc<ListenerFn<T>>,
}

impl<T> Listener<T> {
    /// Wrap `callback` in a new listener with its own identity.
    pub fn new(callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the callback with `data`.
    pub fn call(&self, data: &T) {
        (self.callback)(data)
    }

    /// Whether `self` and `other` refer to the same callback.
    pub fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.callback), Arc::as_ptr(&other.callback))
    }
}

impl Listener<()> {
    /// Build a listener for a payload-less event from a zero-argument closure.
    pub fn unit(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self::new(move |_: &()| callback())
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<T> PartialEq for Listener<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<T> Eq for Listener<T> {}

impl<T> From<Arc<ListenerFn<T>>> for Listener<T> {
    fn from(callback: Arc<ListenerFn<T>>) -> Self {
        Self { callback }
    }
}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Arc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}
