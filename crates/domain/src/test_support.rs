// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spies and log capture shared by the crate's unit tests

use herald_core::{AnyEvent, EventData, EventHandler, HandlerError, HandlerRef};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Handler that keeps a copy of every `D` payload it receives
pub struct Capture<D> {
    seen: Mutex<Vec<D>>,
}

impl<D: EventData + Clone> Capture<D> {
    /// Returns the spy and a ref to register with a dispatcher
    pub fn install() -> (Arc<Self>, HandlerRef) {
        let spy = Arc::new(Self {
            seen: Mutex::new(Vec::new()),
        });
        let handler = HandlerRef::from_arc(Arc::clone(&spy));
        (spy, handler)
    }

    pub fn seen(&self) -> Vec<D> {
        self.seen.lock().unwrap().clone()
    }
}

impl<D: EventData + Clone> EventHandler for Capture<D> {
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        let event = event.try_as::<D>()?;
        self.seen.lock().unwrap().push(event.data().clone());
        Ok(())
    }
}

/// A handler that always fails
pub fn failing(message: &'static str) -> HandlerRef {
    HandlerRef::new(move |_event: &dyn AnyEvent| -> Result<(), HandlerError> {
        Err(HandlerError::failed(message))
    })
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

/// Run `f` with info-level tracing output captured
pub fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}
