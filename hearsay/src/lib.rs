//! # hearsay - Synchronous Named-Event Emitter
//!
//! `hearsay` is a minimal in-process publish/subscribe utility: register
//! listeners under string event names, then [`emit`](EventEmitter::emit)
//! delivers an argument list synchronously to every listener for that name,
//! followed by every listener registered under the [`WILDCARD`] name `"*"`
//! (which additionally receives the triggering name prepended).
//!
//! Delivery is fully synchronous and single-threaded: no queues, no
//! background tasks, no locking. A failing listener aborts the rest of that
//! dispatch and the error surfaces to the `emit` caller.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hearsay::{EventEmitter, ListenerHandle, args};
//!
//! let emitter = EventEmitter::new();
//! emitter.on("save", ListenerHandle::from_fn(|args| {
//!     let path = args[0].downcast_ref::<String>().unwrap();
//!     println!("saved {path}");
//! }));
//! emitter.emit("save", &args!["notes.txt".to_string()])?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hearsay_core::{Arg, BoxError, EmitterError, Listener, ListenerHandle, args};

mod emitter;

pub use emitter::{DEFAULT_MAX_LISTENERS, EventEmitter, WILDCARD};

pub mod testing;

/// Prelude module - common imports for Hearsay.
///
/// # Usage
///
/// ```rust,ignore
/// use hearsay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Arg,
        BoxError,
        EmitterError,
        EventEmitter,
        Listener,
        ListenerHandle,
        WILDCARD,
        args,
    };
}
