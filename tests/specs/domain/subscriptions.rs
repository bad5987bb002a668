//! Subscription files wiring handlers to a dispatcher.

use crate::prelude::*;
use herald_domain::ConfigError;
use similar_asserts::assert_eq;
use std::io::Write;

#[test]
fn file_selects_handlers_and_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[subscription]]
event = "CustomerCreatedEvent"
handlers = ["customer-created-log-two"]
"#
    )
    .unwrap();

    let config = SubscriptionConfig::load(file.path()).unwrap();
    let dispatcher = config.build(&default_catalog()).unwrap();

    let (logs, customer) = with_logs(|| Customer::create("1", "Customer 1", &dispatcher));

    customer.unwrap();
    assert!(logs.contains("second log"), "logs: {logs}");
    assert!(!logs.contains("first log"), "logs: {logs}");
    assert_eq!(dispatcher.event_names(), vec!["CustomerCreatedEvent".to_string()]);
}

#[test]
fn custom_handlers_can_be_added_to_catalog() {
    let journal = Journal::new();
    let catalog = default_catalog().with("audit", journal.handler("audit"));
    let config = SubscriptionConfig::parse(
        r#"
[[subscription]]
event = "ProductCreatedEvent"
handlers = ["audit", "audit"]
"#,
    )
    .unwrap();

    let dispatcher = config.build(&catalog).unwrap();
    Product::create("p-1", "Product 1", "", 1.0, &dispatcher).unwrap();

    assert_eq!(journal.labels(), vec!["audit", "audit"]);
}

#[test]
fn unknown_handler_is_reported() {
    let config = SubscriptionConfig::parse(
        r#"
[[subscription]]
event = "ProductCreatedEvent"
handlers = ["does-not-exist"]
"#,
    )
    .unwrap();

    let err = config.build(&default_catalog()).unwrap_err();

    assert!(matches!(err, ConfigError::UnknownHandler { .. }));
    assert_eq!(
        err.to_string(),
        "unknown handler 'does-not-exist' for event ProductCreatedEvent"
    );
}
