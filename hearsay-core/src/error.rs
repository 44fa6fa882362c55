//! Error types for Hearsay.
//!
//! Removal operations fail when their target does not exist; dispatch fails
//! when a listener fails. Everything is surfaced synchronously to the direct
//! caller through [`EmitterError`] — there is no retry or recovery layer.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by emitter operations.
#[derive(Error, Debug)]
pub enum EmitterError {
    /// No listeners have ever been registered (or all were bulk-removed)
    /// for the named event.
    #[error("no listeners registered for event \"{0}\"")]
    NoSuchEvent(String),

    /// The event exists but the given listener handle was never added to it.
    #[error("listener is not registered for event \"{0}\"")]
    ListenerNotFound(String),

    /// A listener failed during dispatch.
    ///
    /// Dispatch stops at the first failing listener; listeners registered
    /// after it in the same call are not invoked.
    #[error("listener error")]
    Listener(#[source] BoxError),
}

impl From<BoxError> for EmitterError {
    fn from(err: BoxError) -> Self {
        EmitterError::Listener(err)
    }
}
