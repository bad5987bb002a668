// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for handlers and the dispatcher

use thiserror::Error;

/// Errors raised by an event handler
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("handler expected {expected} but received {actual}")]
    UnexpectedEvent {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A handler failure collected while running every handler
#[derive(Debug)]
pub struct HandlerFailure {
    /// Position of the handler in the event's list
    pub position: usize,
    pub source: HandlerError,
}

/// Errors returned by the dispatcher
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("event name must not be empty")]
    EmptyEventName,
    #[error("handler #{position} for {event} failed: {source}")]
    Handler {
        event: String,
        position: usize,
        source: HandlerError,
    },
    #[error("{} handler(s) for {event} failed", .failures.len())]
    Handlers {
        event: String,
        failures: Vec<HandlerFailure>,
    },
}
