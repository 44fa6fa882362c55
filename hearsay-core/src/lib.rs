//! # hearsay-core
//!
//! Core types for the Hearsay event emitter.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that defines listeners without needing the full `hearsay` emitter.
//!
//! - [`Arg`] — a dynamically typed positional argument; emissions carry
//!   `&[Arg]` and the [`args!`] macro builds the list.
//! - [`Listener`] / [`ListenerHandle`] — the callable and the clonable,
//!   pointer-identity handle the emitter stores and removes by.
//! - [`EmitterError`] — the error hierarchy for removal and dispatch
//!   failures.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod arg;
mod error;
mod listener;

// Re-exports
pub use arg::Arg;
pub use error::{BoxError, EmitterError};
pub use listener::{Listener, ListenerHandle};
