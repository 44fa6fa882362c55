//! The listener registry and its two-phase dispatch.
//!
//! [`EventEmitter`] maps event names to insertion-ordered listener
//! sequences. Emission runs an exact-name phase and then a wildcard phase;
//! `"*"` is an ordinary key in the same map, so emitting on `"*"` itself
//! fires wildcard listeners in both phases. That double fire is preserved
//! deliberately.
//!
//! All operations take `&self`. State lives behind `RefCell`/`Cell`, which
//! keeps the emitter single-threaded (`!Sync`) while allowing a listener to
//! re-enter the emitter mid-dispatch.

use crate::{Arg, EmitterError, ListenerHandle};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// The reserved wildcard event name.
///
/// Listeners registered under this name run for every emission, receiving
/// the triggering event name prepended to the argument list.
pub const WILDCARD: &str = "*";

/// Default soft threshold above which registration warns.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// A registry of named-event listeners with synchronous dispatch.
///
/// # Example
/// ```rust,ignore
/// let emitter = EventEmitter::new();
/// let hello = ListenerHandle::from_fn(|args| {
///     let who = args[0].downcast_ref::<String>().unwrap();
///     println!("hello, {who}");
/// });
/// emitter.on("greet", hello.clone());
/// emitter.emit("greet", &args!["world".to_string()])?;
/// emitter.off("greet", &hello)?;
/// ```
pub struct EventEmitter {
    events: RefCell<HashMap<String, Vec<ListenerHandle>>>,
    max_listeners: Cell<usize>,
}

impl EventEmitter {
    /// Create an emitter with the default listener threshold.
    pub fn new() -> Self {
        Self::with_max_listeners(DEFAULT_MAX_LISTENERS)
    }

    /// Create an emitter with the given soft listener threshold.
    pub fn with_max_listeners(max_listeners: usize) -> Self {
        Self {
            events: RefCell::new(HashMap::new()),
            max_listeners: Cell::new(max_listeners),
        }
    }

    /// Register a listener for an event name.
    ///
    /// Listeners fire in registration order. Registering the same handle
    /// twice creates two independent entries. Crossing the soft threshold
    /// logs a warning but never blocks the registration.
    pub fn on(&self, event: impl Into<String>, listener: ListenerHandle) {
        let event = event.into();
        let mut events = self.events.borrow_mut();
        let count = events.get(&event).map_or(0, Vec::len);
        if count >= self.max_listeners.get() {
            tracing::warn!(
                event = %event,
                count,
                "possible listener leak detected; call set_max_listeners to raise the limit"
            );
        }
        events.entry(event).or_default().push(listener);
    }

    /// Dispatch an event synchronously.
    ///
    /// Runs two phases: listeners registered under `event` receive `args`
    /// unchanged, then listeners registered under [`WILDCARD`] receive the
    /// event name prepended as a `String` argument. Each phase iterates a
    /// snapshot taken when the phase starts, so listeners may re-enter the
    /// emitter; the wildcard snapshot is taken only after the exact phase
    /// finishes.
    ///
    /// The first listener to return an error aborts the remaining dispatch
    /// of this call, surfacing as [`EmitterError::Listener`].
    pub fn emit(&self, event: &str, args: &[Arg]) -> Result<(), EmitterError> {
        let exact = self.events.borrow().get(event).cloned();
        if let Some(listeners) = exact {
            for listener in &listeners {
                listener.call(args)?;
            }
        }

        let wildcard = self.events.borrow().get(WILDCARD).cloned();
        if let Some(listeners) = wildcard {
            let mut prefixed = Vec::with_capacity(args.len() + 1);
            prefixed.push(Arg::new(event.to_string()));
            prefixed.extend_from_slice(args);
            for listener in &listeners {
                listener.call(&prefixed)?;
            }
        }

        Ok(())
    }

    /// Remove one previously registered listener.
    ///
    /// Removes the earliest entry pointer-equal to `listener`. The event's
    /// sequence is kept even when this empties it; only
    /// [`remove_all_listeners`](Self::remove_all_listeners) deletes entries.
    pub fn off(&self, event: &str, listener: &ListenerHandle) -> Result<(), EmitterError> {
        let mut events = self.events.borrow_mut();
        let listeners = events
            .get_mut(event)
            .ok_or_else(|| EmitterError::NoSuchEvent(event.to_string()))?;
        let index = listeners
            .iter()
            .position(|entry| entry.ptr_eq(listener))
            .ok_or_else(|| EmitterError::ListenerNotFound(event.to_string()))?;
        listeners.remove(index);
        Ok(())
    }

    /// Remove listeners in bulk.
    ///
    /// With `None`, clears the entire registry and always succeeds. With an
    /// event name, deletes that event's entry outright, failing with
    /// [`EmitterError::NoSuchEvent`] when the name was never registered.
    pub fn remove_all_listeners(&self, event: Option<&str>) -> Result<(), EmitterError> {
        let mut events = self.events.borrow_mut();
        match event {
            None => {
                events.clear();
                Ok(())
            }
            Some(name) => match events.remove(name) {
                Some(_) => Ok(()),
                None => Err(EmitterError::NoSuchEvent(name.to_string())),
            },
        }
    }

    /// Replace the soft listener threshold used by future registrations.
    ///
    /// No retroactive effect on existing registrations or past warnings.
    pub fn set_max_listeners(&self, max_listeners: usize) {
        self.max_listeners.set(max_listeners);
    }

    /// Number of listeners currently registered under an event name.
    pub fn listener_count(&self, event: &str) -> usize {
        self.events.borrow().get(event).map_or(0, Vec::len)
    }

    /// Number of event names with a live entry.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Check whether the registry holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}
