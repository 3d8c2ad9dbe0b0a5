use std::any::Any;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DispatchError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A listener panicked; `position` is its index in the dispatch snapshot.
    #[error("Listener at position {position} panicked: {message}")]
    ListenerPanicked { position: usize, message: String },
}

impl DispatchError {
    pub(crate) fn from_panic(position: usize, payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::ListenerPanicked { position, message }
    }
}

/// Convenience alias — the default error type is `DispatchError`.
pub type Result<T, E = DispatchError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
