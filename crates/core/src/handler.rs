// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event handler capability

use crate::error::HandlerError;
use crate::event::AnyEvent;
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// A unit of side-effecting logic run when a matching event is dispatched
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError>;
}

impl<F> EventHandler for F
where
    F: Fn(&dyn AnyEvent) -> Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        self(event)
    }
}

/// Shared handle to a handler instance.
///
/// Two refs are equal only when they point at the same instance, so a
/// handler registered twice can be removed one registration at a time.
#[derive(Clone)]
pub struct HandlerRef {
    inner: Arc<dyn EventHandler>,
    label: &'static str,
}

impl HandlerRef {
    pub fn new<H: EventHandler + 'static>(handler: H) -> Self {
        Self::from_arc(Arc::new(handler))
    }

    /// Wrap an existing `Arc`, so the caller can keep typed access to the handler
    pub fn from_arc<H: EventHandler + 'static>(handler: Arc<H>) -> Self {
        Self {
            inner: handler,
            label: type_name::<H>(),
        }
    }

    /// Type name of the wrapped handler, for logs
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        self.inner.handle(event)
    }

    /// Identity comparison; the vtable half of the fat pointer is ignored
    pub fn same_instance(&self, other: &HandlerRef) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.inner) as *const (),
            Arc::as_ptr(&other.inner) as *const (),
        )
    }
}

impl PartialEq for HandlerRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for HandlerRef {}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRef")
            .field("handler", &self.label)
            .field("at", &(Arc::as_ptr(&self.inner) as *const ()))
            .finish()
    }
}

impl<H: EventHandler + 'static> From<Arc<H>> for HandlerRef {
    fn from(handler: Arc<H>) -> Self {
        Self::from_arc(handler)
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
