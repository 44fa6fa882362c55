//! Re-entrant use of the emitter from inside listeners.
//!
//! Each dispatch phase iterates a snapshot taken when that phase starts:
//! mutations made by a listener never affect the phase currently running,
//! and the wildcard snapshot is taken only after the exact phase finishes.
//! These tests pin that contract.

use hearsay::{
    EventEmitter, ListenerHandle, WILDCARD, args,
    testing::{CountingListener, RecordingListener},
};
use std::rc::Rc;

#[test]
fn test_listener_added_mid_phase_waits_for_next_emit() {
    let emitter = Rc::new(EventEmitter::new());
    let late = CountingListener::new();

    let emitter2 = emitter.clone();
    let late2 = late.clone();
    emitter.on(
        "grow",
        ListenerHandle::from_fn(move |_| {
            emitter2.on("grow", late2.handle());
        }),
    );

    emitter.emit("grow", &args![]).unwrap();
    assert_eq!(late.count(), 0, "Added mid-phase, not in this snapshot");

    emitter.emit("grow", &args![]).unwrap();
    assert_eq!(late.count(), 1, "Present in the next emit's snapshot");
}

#[test]
fn test_listener_removed_mid_phase_still_fires_this_emit() {
    let emitter = Rc::new(EventEmitter::new());
    let victim = CountingListener::new();
    let victim_handle = victim.handle();

    let emitter2 = emitter.clone();
    let target = victim_handle.clone();
    emitter.on(
        "shrink",
        ListenerHandle::from_fn(move |_| {
            // Already gone on the second emit.
            let _ = emitter2.off("shrink", &target);
        }),
    );
    emitter.on("shrink", victim_handle);

    emitter.emit("shrink", &args![]).unwrap();
    assert_eq!(victim.count(), 1, "Snapshot was taken before the removal");

    emitter.emit("shrink", &args![]).unwrap();
    assert_eq!(victim.count(), 1, "Removal applies from the next emit on");
}

#[test]
fn test_wildcard_added_during_exact_phase_fires_same_emit() {
    // The wildcard snapshot is read after the exact phase completes, so a
    // wildcard listener registered by an exact-phase listener joins the
    // current dispatch.
    let emitter = Rc::new(EventEmitter::new());
    let wildcard = RecordingListener::new();

    let emitter2 = emitter.clone();
    let wildcard2 = wildcard.clone();
    emitter.on(
        "spawn",
        ListenerHandle::from_fn(move |_| {
            emitter2.on(WILDCARD, wildcard2.handle());
        }),
    );

    emitter.emit("spawn", &args![]).unwrap();

    let calls = wildcard.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0][0].downcast_ref::<String>().map(String::as_str),
        Some("spawn")
    );
}

#[test]
fn test_nested_emit_from_listener() {
    let emitter = Rc::new(EventEmitter::new());
    let inner = RecordingListener::new();
    emitter.on("inner", inner.handle());

    let emitter2 = emitter.clone();
    emitter.on(
        "outer",
        ListenerHandle::from_fn(move |_| {
            emitter2.emit("inner", &args![true]).unwrap();
        }),
    );

    emitter.emit("outer", &args![]).unwrap();

    let calls = inner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].downcast_ref::<bool>(), Some(&true));
}
