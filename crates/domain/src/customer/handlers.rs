// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handlers for customer events

use super::events::{CustomerAddressChanged, CustomerCreated};
use herald_core::{AnyEvent, EventHandler, HandlerError};

/// First log line for a new customer
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerCreatedLogOne;

impl EventHandler for CustomerCreatedLogOne {
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        let event = event.try_as::<CustomerCreated>()?;
        tracing::info!(
            customer_id = %event.data().id,
            "this is the first log of the CustomerCreated event"
        );
        Ok(())
    }
}

/// Second log line for a new customer
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerCreatedLogTwo;

impl EventHandler for CustomerCreatedLogTwo {
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        let event = event.try_as::<CustomerCreated>()?;
        tracing::info!(
            customer_id = %event.data().id,
            "this is the second log of the CustomerCreated event"
        );
        Ok(())
    }
}

/// Logs the customer's new address as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerAddressChangedLog;

impl EventHandler for CustomerAddressChangedLog {
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        let changed = event.try_as::<CustomerAddressChanged>()?.data();
        let address = serde_json::to_string(&changed.address)
            .map_err(|e| HandlerError::Other(Box::new(e)))?;
        tracing::info!(
            customer_id = %changed.id,
            "address of customer {}, {} changed to {}",
            changed.id,
            changed.name,
            address
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
