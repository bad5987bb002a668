//! Synchronous broadcast of events to registered handlers.

use crate::prelude::*;

#[test]
fn order_placed_reaches_a_then_b_with_same_event() {
    let dispatcher = EventDispatcher::new();
    let journal = Journal::new();
    dispatcher.register("OrderPlaced", journal.handler("A")).unwrap();
    dispatcher.register("OrderPlaced", journal.handler("B")).unwrap();

    let event = order_placed("o-1");
    dispatcher.notify(&event).unwrap();

    assert_eq!(journal.labels(), vec!["A", "B"]);
    assert_eq!(
        journal.event_addresses(),
        vec![address_of(&event), address_of(&event)]
    );
}

#[test]
fn event_without_handlers_is_a_noop() {
    let dispatcher = EventDispatcher::new();
    assert!(dispatcher.notify(&order_placed("o-1")).is_ok());
}

#[test]
fn duplicate_registration_runs_twice() {
    let dispatcher = EventDispatcher::new();
    let journal = Journal::new();
    let handler = journal.handler("twice");
    dispatcher.register("OrderPlaced", handler.clone()).unwrap();
    dispatcher.register("OrderPlaced", handler).unwrap();

    dispatcher.notify(&order_placed("o-1")).unwrap();

    assert_eq!(journal.labels(), vec!["twice", "twice"]);
}

#[test]
fn first_failure_propagates_and_aborts() {
    let dispatcher = EventDispatcher::new();
    let journal = Journal::new();
    dispatcher.register("OrderPlaced", journal.failing("A")).unwrap();
    dispatcher.register("OrderPlaced", journal.handler("B")).unwrap();

    let err = dispatcher.notify(&order_placed("o-1")).unwrap_err();

    assert_eq!(err.to_string(), "handler #0 for OrderPlaced failed: A failed");
    assert_eq!(journal.labels(), vec!["A"]);
}

#[test]
fn run_all_reports_every_failure() {
    let dispatcher = EventDispatcher::with_config(
        DispatcherConfig::default().with_failure_policy(FailurePolicy::RunAll),
    );
    let journal = Journal::new();
    dispatcher.register("OrderPlaced", journal.failing("A")).unwrap();
    dispatcher.register("OrderPlaced", journal.handler("B")).unwrap();
    dispatcher.register("OrderPlaced", journal.failing("C")).unwrap();

    let err = dispatcher.notify(&order_placed("o-1")).unwrap_err();

    assert_eq!(err.to_string(), "2 handler(s) for OrderPlaced failed");
    assert_eq!(journal.labels(), vec!["A", "B", "C"]);
}

#[test]
fn event_keeps_its_timestamp_and_data() {
    let dispatcher = EventDispatcher::new();
    let journal = Journal::new();
    dispatcher.register("OrderPlaced", journal.handler("h")).unwrap();

    let event = order_placed("o-1");
    let occurred_at = event.occurred_at();
    dispatcher.notify(&event).unwrap();

    assert_eq!(event.occurred_at(), occurred_at);
    assert_eq!(event.data().order_id, "o-1");
}
