// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Customer factory and identifier generation

use super::entity::Customer;
use crate::address::Address;
use crate::error::DomainError;
use herald_core::EventDispatcher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Produces identifiers for new entities
pub trait IdGenerator: Clone + Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// `{prefix}-1`, `{prefix}-2`, ... shared between clones
#[derive(Clone, Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: Arc<AtomicU64>,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

/// Creates customers with generated ids against one injected dispatcher
#[derive(Clone, Debug)]
pub struct CustomerFactory<G = UuidGenerator> {
    ids: G,
    dispatcher: EventDispatcher,
}

impl CustomerFactory<UuidGenerator> {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self::with_ids(UuidGenerator, dispatcher)
    }
}

impl<G: IdGenerator> CustomerFactory<G> {
    pub fn with_ids(ids: G, dispatcher: EventDispatcher) -> Self {
        Self { ids, dispatcher }
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    pub fn create(&self, name: impl Into<String>) -> Result<Customer, DomainError> {
        Customer::create(self.ids.generate(), name, &self.dispatcher)
    }

    /// Create a customer and give it an address; only `CustomerCreatedEvent` is raised
    pub fn create_with_address(
        &self,
        name: impl Into<String>,
        address: Address,
    ) -> Result<Customer, DomainError> {
        let mut customer = self.create(name)?;
        customer.set_address(address);
        Ok(customer)
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
