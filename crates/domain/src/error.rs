// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for domain entities

use herald_core::DispatchError;
use thiserror::Error;

/// Errors raised by entity and value-object operations
#[derive(Debug, Error)]
pub enum DomainError {
    /// An invariant of the entity was violated
    #[error("{0}")]
    Validation(&'static str),
    /// The entity changed, but a handler of its event failed
    #[error("event dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

impl DomainError {
    /// Validation message, if this is a validation error
    pub fn validation_message(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation(message) => Some(message),
            DomainError::Dispatch(_) => None,
        }
    }
}
