// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event dispatcher mapping event names to ordered handler lists

use super::config::{DispatcherConfig, FailurePolicy};
use crate::error::{DispatchError, HandlerFailure};
use crate::event::{AnyEvent, EventData};
use crate::handler::HandlerRef;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

type HandlerMap = HashMap<String, Vec<HandlerRef>>;

/// Routes events to the handlers registered under their name.
///
/// Every `new()` dispatcher owns an independent mapping. Clones share it,
/// which is how one dispatcher is injected into several producers.
pub struct EventDispatcher {
    handlers: Arc<RwLock<HandlerMap>>,
    config: DispatcherConfig,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Append a handler to the list for `event_name`.
    ///
    /// Registering the same handler twice is allowed; it will then run twice.
    pub fn register(&self, event_name: &str, handler: HandlerRef) -> Result<(), DispatchError> {
        if event_name.trim().is_empty() {
            return Err(DispatchError::EmptyEventName);
        }

        let mut map = self.write();
        let list = map.entry(event_name.to_string()).or_default();
        tracing::debug!(
            event = event_name,
            handler = handler.label(),
            handlers = list.len() + 1,
            "handler registered"
        );
        list.push(handler);

        Ok(())
    }

    /// Register a handler under the name of the `D` payload type
    pub fn register_for<D: EventData>(&self, handler: HandlerRef) -> Result<(), DispatchError> {
        self.register(D::NAME, handler)
    }

    /// Remove the first registration of `handler` under `event_name`.
    ///
    /// Unknown names and handlers are ignored. The name stays registered
    /// even when its list becomes empty.
    pub fn unregister(&self, event_name: &str, handler: &HandlerRef) {
        let mut map = self.write();
        let Some(list) = map.get_mut(event_name) else {
            tracing::debug!(event = event_name, "unregister ignored, no such event");
            return;
        };

        match list.iter().position(|h| h == handler) {
            Some(index) => {
                list.remove(index);
                tracing::debug!(
                    event = event_name,
                    handler = handler.label(),
                    handlers = list.len(),
                    "handler unregistered"
                );
            }
            None => tracing::debug!(
                event = event_name,
                handler = handler.label(),
                "unregister ignored, handler not registered"
            ),
        }
    }

    /// Forget every event name and handler
    pub fn unregister_all(&self) {
        let mut map = self.write();
        let events = map.len();
        map.clear();
        tracing::debug!(events, "all handlers unregistered");
    }

    /// Invoke every handler registered for the event's name, in order.
    ///
    /// The handler list is captured before the first handler runs, so
    /// handlers may register or unregister on this dispatcher; the change
    /// applies from the next `notify`.
    pub fn notify(&self, event: &dyn AnyEvent) -> Result<(), DispatchError> {
        let name = event.name();
        let span = tracing::debug_span!("dispatcher.notify", event = name);
        let _guard = span.enter();

        let handlers = self.handlers_for(name).unwrap_or_default();
        if handlers.is_empty() {
            tracing::debug!("no handlers registered");
            return Ok(());
        }

        let start = Instant::now();
        match self.config.failure_policy {
            FailurePolicy::AbortOnFirst => {
                for (position, handler) in handlers.iter().enumerate() {
                    tracing::debug!(position, handler = handler.label(), "invoking handler");
                    handler
                        .handle(event)
                        .map_err(|source| DispatchError::Handler {
                            event: name.to_string(),
                            position,
                            source,
                        })?;
                }
            }
            FailurePolicy::RunAll => {
                let failures: Vec<HandlerFailure> = handlers
                    .iter()
                    .enumerate()
                    .filter_map(|(position, handler)| {
                        tracing::debug!(position, handler = handler.label(), "invoking handler");
                        handler
                            .handle(event)
                            .err()
                            .map(|source| HandlerFailure { position, source })
                    })
                    .collect();
                if !failures.is_empty() {
                    return Err(DispatchError::Handlers {
                        event: name.to_string(),
                        failures,
                    });
                }
            }
        }

        tracing::debug!(
            handlers = handlers.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "notified"
        );
        Ok(())
    }

    /// Copy of the whole mapping
    pub fn handlers(&self) -> HashMap<String, Vec<HandlerRef>> {
        self.read().clone()
    }

    /// Handlers for one name: `None` if the name was never registered
    /// (or was cleared), `Some` with a possibly empty list otherwise.
    pub fn handlers_for(&self, event_name: &str) -> Option<Vec<HandlerRef>> {
        self.read().get(event_name).cloned()
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.read().get(event_name).map_or(0, Vec::len)
    }

    /// Whether the name is present in the mapping, even with an empty list
    pub fn is_registered(&self, event_name: &str) -> bool {
        self.read().contains_key(event_name)
    }

    /// Registered event names, sorted
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn read(&self) -> RwLockReadGuard<'_, HandlerMap> {
        self.handlers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HandlerMap> {
        self.handlers.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventDispatcher {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            config: self.config.clone(),
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(String, usize)> = self
            .event_names()
            .into_iter()
            .map(|name| {
                let count = self.handler_count(&name);
                (name, count)
            })
            .collect();
        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
