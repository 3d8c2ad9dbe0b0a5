//! Tests for listeners that mutate or re-dispatch the dispatcher they were
//! called from.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use typed_event_dispatcher::{EventDispatcher, Listener};

fn make_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

fn logging(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> Listener<i32> {
    let log = Arc::clone(log);
    Listener::new(move |e: &i32| log.lock().unwrap().push(format!("{tag}:{e}")))
}

// ============================================================================
// Snapshot semantics
// ============================================================================

#[test]
fn listener_added_during_dispatch_waits_for_next_round() {
    let dispatcher: EventDispatcher<i32> = EventDispatcher::new();
    let log = make_log();
    let event = dispatcher.getter();
    let late = logging(&log, "late");

    {
        let event = event.clone();
        let late = late.clone();
        let log = Arc::clone(&log);
        dispatcher.getter().subscribe(&Listener::new(move |e: &i32| {
            log.lock().unwrap().push(format!("first:{e}"));
            event.subscribe(&late);
        }));
    }

    dispatcher.dispatch(&1);
    assert_eq!(*log.lock().unwrap(), vec!["first:1"]);

    dispatcher.dispatch(&2);
    assert_eq!(*log.lock().unwrap(), vec!["first:1", "first:2", "late:2"]);
}

#[test]
fn persistent_listener_removed_during_dispatch_still_runs_that_round() {
    let dispatcher: EventDispatcher<i32> = EventDispatcher::new();
    let log = make_log();
    let event = dispatcher.getter();
    let victim = logging(&log, "victim");

    {
        let event = event.clone();
        let victim = victim.clone();
        dispatcher.getter().subscribe(&Listener::new(move |_: &i32| {
            event.unsubscribe(&victim);
        }));
    }
    event.subscribe(&victim);

    dispatcher.dispatch(&1);
    assert_eq!(*log.lock().unwrap(), vec!["victim:1"]);

    dispatcher.dispatch(&2);
    assert_eq!(
        *log.lock().unwrap(),
        vec!["victim:1"],
        "removed listener should not fire in later rounds"
    );
}

#[test]
fn one_shot_removed_during_dispatch_is_skipped() {
    let dispatcher: EventDispatcher<i32> = EventDispatcher::new();
    let log = make_log();
    let event = dispatcher.getter();
    let once = logging(&log, "once");

    {
        let event = event.clone();
        let once = once.clone();
        dispatcher.getter().subscribe(&Listener::new(move |_: &i32| {
            event.unsubscribe(&once);
        }));
    }
    event.subscribe_once(&once);

    dispatcher.dispatch(&1);
    dispatcher.dispatch(&2);

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn one_shot_may_resubscribe_itself() {
    let dispatcher: EventDispatcher<i32> = EventDispatcher::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let event = dispatcher.getter();

    // The listener needs its own handle to re-register; fill it in after
    // construction.
    let slot: Arc<Mutex<Option<Listener<i32>>>> = Arc::new(Mutex::new(None));
    let listener = {
        let calls = Arc::clone(&calls);
        let slot = Arc::clone(&slot);
        let event = event.clone();
        Listener::new(move |_: &i32| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 {
                if let Some(me) = slot.lock().unwrap().as_ref() {
                    event.subscribe_once(me);
                }
            }
        })
    };
    *slot.lock().unwrap() = Some(listener.clone());
    event.subscribe_once(&listener);

    for _ in 0..5 {
        dispatcher.dispatch(&0);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(dispatcher.is_empty());
    // Break the slot -> listener -> slot cycle.
    slot.lock().unwrap().take();
}

// ============================================================================
// Nested dispatch
// ============================================================================

#[test]
fn nested_dispatch_does_not_deadlock_and_runs_one_shot_once() {
    let dispatcher: Arc<EventDispatcher<i32>> = Arc::new(EventDispatcher::new());
    let log = make_log();
    let nested = Arc::new(AtomicBool::new(false));

    {
        let weak = Arc::downgrade(&dispatcher);
        let log = Arc::clone(&log);
        let nested = Arc::clone(&nested);
        dispatcher.getter().subscribe(&Listener::new(move |e: &i32| {
            log.lock().unwrap().push(format!("outer:{e}"));
            if !nested.swap(true, Ordering::SeqCst) {
                if let Some(dispatcher) = weak.upgrade() {
                    dispatcher.dispatch(&(e + 100));
                }
            }
        }));
    }
    dispatcher.getter().subscribe_once(&logging(&log, "once"));
    dispatcher.getter().subscribe(&logging(&log, "tail"));

    dispatcher.dispatch(&1);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "outer:1",
            // inner round
            "outer:101",
            "once:101",
            "tail:101",
            // back in the outer round; the one-shot was consumed above
            "tail:1",
        ]
    );
    assert_eq!(dispatcher.listener_count(), 2);
}

#[test]
fn nested_dispatch_from_one_shot_listener() {
    let dispatcher: Arc<EventDispatcher<i32>> = Arc::new(EventDispatcher::new());
    let log = make_log();

    {
        let weak = Arc::downgrade(&dispatcher);
        let log = Arc::clone(&log);
        dispatcher.getter().subscribe_once(&Listener::new(move |e: &i32| {
            log.lock().unwrap().push(format!("once:{e}"));
            // Already claimed, so the inner round cannot reach this listener.
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.dispatch(&(e + 1));
            }
        }));
    }
    dispatcher.getter().subscribe(&logging(&log, "after"));

    dispatcher.dispatch(&1);

    assert_eq!(*log.lock().unwrap(), vec!["once:1", "after:2", "after:1"]);
    assert_eq!(dispatcher.listener_count(), 1);
}
