//! The soft max-listeners threshold: advisory warnings that never block.

use hearsay::{
    EventEmitter, ListenerHandle, args,
    testing::{RecordingListener, with_warn_capture},
};

#[test]
fn test_eleventh_listener_warns_once_and_still_registers() {
    let emitter = EventEmitter::new();
    let recorders: Vec<RecordingListener> =
        (0..11).map(|_| RecordingListener::new()).collect();

    let (_, warnings) = with_warn_capture(|| {
        for recorder in &recorders {
            emitter.on("click", recorder.handle());
        }
    });

    assert_eq!(warnings, 1, "Only the 11th registration should warn");
    assert_eq!(emitter.listener_count("click"), 11);

    emitter.emit("click", &args![42u32]).unwrap();
    for recorder in &recorders {
        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[0][0].downcast_ref::<u32>(), Some(&42));
    }
}

#[test]
fn test_warning_repeats_per_excess_registration() {
    let emitter = EventEmitter::with_max_listeners(2);

    let (_, warnings) = with_warn_capture(|| {
        for _ in 0..5 {
            emitter.on("tick", ListenerHandle::from_fn(|_| {}));
        }
    });

    assert_eq!(warnings, 3);
}

#[test]
fn test_zero_threshold_warns_on_first_registration() {
    let emitter = EventEmitter::new();
    emitter.set_max_listeners(0);

    let (_, warnings) = with_warn_capture(|| {
        emitter.on("anything", ListenerHandle::from_fn(|_| {}));
    });

    assert_eq!(warnings, 1);
    assert_eq!(emitter.listener_count("anything"), 1);
}

#[test]
fn test_threshold_is_per_event_sequence() {
    let emitter = EventEmitter::with_max_listeners(1);

    let (_, warnings) = with_warn_capture(|| {
        emitter.on("a", ListenerHandle::from_fn(|_| {}));
        emitter.on("b", ListenerHandle::from_fn(|_| {}));
    });

    assert_eq!(warnings, 0, "Counts are per event name, not global");
}

#[test]
fn test_set_max_listeners_only_affects_future_registrations() {
    let emitter = EventEmitter::with_max_listeners(1);

    let (_, warnings) = with_warn_capture(|| {
        emitter.on("x", ListenerHandle::from_fn(|_| {}));
        emitter.on("x", ListenerHandle::from_fn(|_| {}));
    });
    assert_eq!(warnings, 1);

    // Raising the threshold silences future registrations but does not
    // retract anything.
    emitter.set_max_listeners(100);
    let (_, warnings) = with_warn_capture(|| {
        emitter.on("x", ListenerHandle::from_fn(|_| {}));
    });
    assert_eq!(warnings, 0);
    assert_eq!(emitter.listener_count("x"), 3);
}
