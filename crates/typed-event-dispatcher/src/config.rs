//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// What [`Event::subscribe`](crate::Event::subscribe) does with a listener
/// that is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first registration; later ones are no-ops, whatever their
    /// one-shot flag.
    #[default]
    Ignore,
    /// Append another record. Each record is invoked on dispatch and
    /// `unsubscribe` removes one record per call.
    Allow,
}

/// Options fixed at dispatcher construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    pub duplicates: DuplicatePolicy,
}

impl DispatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}
