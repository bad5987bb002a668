// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named handlers that subscription files can refer to

use crate::customer::{CustomerAddressChangedLog, CustomerCreatedLogOne, CustomerCreatedLogTwo};
use crate::product::SendEmailWhenProductIsCreated;
use herald_core::HandlerRef;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct HandlerCatalog {
    handlers: BTreeMap<String, HandlerRef>,
}

impl HandlerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler under `name`, replacing any previous one
    pub fn with(mut self, name: impl Into<String>, handler: HandlerRef) -> Self {
        self.insert(name, handler);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, handler: HandlerRef) -> Option<HandlerRef> {
        self.handlers.insert(name.into(), handler)
    }

    pub fn get(&self, name: &str) -> Option<&HandlerRef> {
        self.handlers.get(name)
    }

    /// Handler names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

/// Catalog holding every handler this crate ships
pub fn default_catalog() -> HandlerCatalog {
    HandlerCatalog::new()
        .with(
            "customer-created-log-one",
            HandlerRef::new(CustomerCreatedLogOne),
        )
        .with(
            "customer-created-log-two",
            HandlerRef::new(CustomerCreatedLogTwo),
        )
        .with(
            "customer-address-changed-log",
            HandlerRef::new(CustomerAddressChangedLog),
        )
        .with(
            "send-email-when-product-is-created",
            HandlerRef::new(SendEmailWhenProductIsCreated),
        )
}
