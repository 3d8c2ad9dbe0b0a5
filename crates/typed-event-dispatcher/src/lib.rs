//! Typed, synchronous event dispatch with a split between the producer and
//! its subscribers.
//!
//! # Overview
//!
//! A producer owns an [`EventDispatcher<T>`] and keeps it private. Consumers
//! only ever see the [`Event<T>`] returned by [`EventDispatcher::getter`],
//! which can subscribe and unsubscribe [`Listener`]s but cannot dispatch.
//!
//! ```
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use typed_event_dispatcher::{Event, EventDispatcher, Listener};
//!
//! #[derive(Default)]
//! struct Counter {
//!     count: u32,
//!     on_count_increased: EventDispatcher<u32>,
//! }
//!
//! impl Counter {
//!     fn on_count_increased(&self) -> Event<u32> {
//!         self.on_count_increased.getter()
//!     }
//!
//!     fn increase(&mut self) {
//!         self.count += 1;
//!         self.on_count_increased.dispatch(&self.count);
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! let last = Arc::new(AtomicU32::new(0));
//! let seen = Arc::clone(&last);
//! counter
//!     .on_count_increased()
//!     .subscribe(&Listener::new(move |count: &u32| seen.store(*count, Ordering::SeqCst)));
//!
//! counter.increase();
//! counter.increase();
//! assert_eq!(last.load(Ordering::SeqCst), 2);
//! ```
//!
//! # Modules
//!
//! - [`listener`] — [`Listener<T>`], the reference-identified callback.
//! - [`event`] — [`Event<T>`], the dispatch-less view.
//! - [`dispatcher`] — [`EventDispatcher<T>`] and its dispatch semantics.
//! - [`config`] — [`DispatcherConfig`] and [`DuplicatePolicy`].
//! - [`error`] — [`DispatchError`].

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod listener;

mod registry;

pub use config::{DispatcherConfig, DuplicatePolicy};
pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, Result};
pub use event::Event;
pub use listener::{Listener, ListenerFn};
