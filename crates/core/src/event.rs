// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Domain events
//!
//! An event is an immutable record of something that happened: a timestamp
//! plus a payload. The payload type decides the event's name, which is the
//! key the dispatcher routes on.

use crate::clock::{Clock, SystemClock};
use crate::error::HandlerError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// Payload of a concrete event variant.
///
/// `NAME` is the dispatch key. It must not change for the lifetime of the type.
pub trait EventData: fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;
}

/// An event carrying `data`, stamped when it was constructed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event<D> {
    occurred_at: DateTime<Utc>,
    data: D,
}

impl<D: EventData> Event<D> {
    /// Create an event stamped with the system clock
    pub fn new(data: D) -> Self {
        Self::with_clock(data, &SystemClock)
    }

    /// Create an event stamped with the given clock
    pub fn with_clock(data: D, clock: &impl Clock) -> Self {
        Self {
            occurred_at: clock.now(),
            data,
        }
    }

    pub fn name(&self) -> &'static str {
        D::NAME
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }
}

/// Object-safe view of an event, used by the dispatcher and by handlers
pub trait AnyEvent: fmt::Debug + Send + Sync {
    /// Dispatch key
    fn name(&self) -> &'static str;

    fn occurred_at(&self) -> DateTime<Utc>;

    fn as_any(&self) -> &dyn Any;
}

impl<D: EventData> AnyEvent for Event<D> {
    fn name(&self) -> &'static str {
        D::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn AnyEvent + '_ {
    /// Returns true if this event carries a `D` payload
    pub fn is<D: EventData>(&self) -> bool {
        self.as_any().is::<Event<D>>()
    }

    /// Typed access to the event, if it carries a `D` payload
    pub fn downcast<D: EventData>(&self) -> Option<&Event<D>> {
        self.as_any().downcast_ref::<Event<D>>()
    }

    /// Like [`downcast`](Self::downcast), but reports a mismatch as a handler error
    pub fn try_as<D: EventData>(&self) -> Result<&Event<D>, HandlerError> {
        self.downcast::<D>()
            .ok_or_else(|| HandlerError::UnexpectedEvent {
                expected: D::NAME,
                actual: self.name(),
            })
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
