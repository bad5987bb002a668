// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handlers and events shared by the crate's unit tests

use crate::error::HandlerError;
use crate::event::{AnyEvent, EventData};
use crate::handler::{EventHandler, HandlerRef};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlaced {
    pub order_id: String,
}

impl EventData for OrderPlaced {
    const NAME: &'static str = "OrderPlaced";
}

pub fn order(id: &str) -> OrderPlaced {
    OrderPlaced {
        order_id: id.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreated {
    pub name: String,
}

impl EventData for ProductCreated {
    const NAME: &'static str = "ProductCreatedEvent";
}

/// One handler invocation: who ran, and which event object it saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub handler: &'static str,
    pub event: &'static str,
    pub event_addr: usize,
}

pub fn addr_of(event: &dyn AnyEvent) -> usize {
    std::ptr::from_ref(event).cast::<()>() as usize
}

/// Ordered log of calls, shared by every recorder in a test
#[derive(Clone, Default)]
pub struct Journal {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn handlers(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|c| c.handler).collect()
    }

    /// A handler named `label` that records into this journal
    pub fn recorder(&self, label: &'static str) -> HandlerRef {
        HandlerRef::new(Recorder {
            label,
            journal: self.clone(),
            fail_with: None,
        })
    }

    /// Like `recorder`, but fails after recording
    pub fn failing(&self, label: &'static str, message: &'static str) -> HandlerRef {
        HandlerRef::new(Recorder {
            label,
            journal: self.clone(),
            fail_with: Some(message),
        })
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

struct Recorder {
    label: &'static str,
    journal: Journal,
    fail_with: Option<&'static str>,
}

impl EventHandler for Recorder {
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        self.journal.push(Call {
            handler: self.label,
            event: event.name(),
            event_addr: addr_of(event),
        });
        match self.fail_with {
            Some(message) => Err(HandlerError::failed(message)),
            None => Ok(()),
        }
    }
}

/// A writer that captures log output for testing
#[derive(Clone, Default)]
pub struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with tracing output captured at debug level
pub fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}
