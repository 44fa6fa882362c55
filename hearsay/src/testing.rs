//! Testing utilities for Hearsay.
//!
//! - [`RecordingListener`]: records every argument list it receives
//! - [`CountingListener`]: counts invocations
//! - [`FailingListener`]: always fails, for abort-mid-dispatch tests
//! - [`with_warn_capture`]: runs a closure under a warn-counting `tracing`
//!   subscriber, for asserting on threshold diagnostics

use crate::{Arg, BoxError, Listener, ListenerHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A listener that records every argument list it receives.
///
/// Clones share state, so keep one clone for assertions and wrap another
/// into a handle:
///
/// ```rust,ignore
/// let recorder = RecordingListener::new();
/// emitter.on("save", recorder.handle());
/// emitter.emit("save", &args!["a"])?;
/// assert_eq!(recorder.call_count(), 1);
/// ```
pub struct RecordingListener {
    calls: Rc<RefCell<Vec<Vec<Arg>>>>,
}

impl RecordingListener {
    /// Create a new recording listener.
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Wrap this listener into a registration handle.
    ///
    /// Each call produces a handle with a fresh identity; clone the handle
    /// itself when a test needs to remove it later.
    pub fn handle(&self) -> ListenerHandle {
        ListenerHandle::new(self.clone())
    }

    /// Argument lists received so far, in invocation order.
    pub fn calls(&self) -> Vec<Vec<Arg>> {
        self.calls.borrow().clone()
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Forget all recorded invocations.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Default for RecordingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingListener {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl Listener for RecordingListener {
    fn call(&self, args: &[Arg]) -> Result<(), BoxError> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(())
    }
}

/// A listener that counts invocations.
pub struct CountingListener {
    count: Rc<Cell<usize>>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self {
            count: Rc::new(Cell::new(0)),
        }
    }

    /// Wrap this listener into a registration handle.
    pub fn handle(&self) -> ListenerHandle {
        ListenerHandle::new(self.clone())
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl Default for CountingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingListener {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Listener for CountingListener {
    fn call(&self, _args: &[Arg]) -> Result<(), BoxError> {
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}

/// A listener that always fails with the given message.
pub struct FailingListener {
    message: String,
}

impl FailingListener {
    /// Create a listener failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap this listener into a registration handle.
    pub fn handle(self) -> ListenerHandle {
        ListenerHandle::new(self)
    }
}

impl Listener for FailingListener {
    fn call(&self, _args: &[Arg]) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

/// A `tracing` subscriber that counts warn-level events and ignores
/// everything else.
struct WarnCounter {
    warnings: Arc<AtomicUsize>,
}

impl tracing::Subscriber for WarnCounter {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        *metadata.level() == tracing::Level::WARN
    }

    fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _id: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _id: &tracing::span::Id, _follows: &tracing::span::Id) {}

    fn event(&self, _event: &tracing::Event<'_>) {
        self.warnings.fetch_add(1, Ordering::SeqCst);
    }

    fn enter(&self, _id: &tracing::span::Id) {}

    fn exit(&self, _id: &tracing::span::Id) {}
}

/// Run a closure with warn-level diagnostics captured, returning the
/// closure's result and the number of warnings observed.
///
/// ```rust,ignore
/// let (_, warnings) = with_warn_capture(|| {
///     emitter.on("click", listener);
/// });
/// assert_eq!(warnings, 1);
/// ```
pub fn with_warn_capture<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = WarnCounter {
        warnings: warnings.clone(),
    };
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, warnings.load(Ordering::SeqCst))
}
