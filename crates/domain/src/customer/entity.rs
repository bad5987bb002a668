// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Customer entity

use super::events::{CustomerAddressChanged, CustomerCreated};
use crate::address::Address;
use crate::error::DomainError;
use herald_core::{Event, EventDispatcher};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Build a customer without raising any event
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Build a customer and notify `CustomerCreatedEvent`
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        dispatcher: &EventDispatcher,
    ) -> Result<Self, DomainError> {
        let customer = Self::new(id, name)?;
        dispatcher.notify(&Event::new(CustomerCreated {
            id: customer.id.clone(),
            name: customer.name.clone(),
        }))?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::Validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(DomainError::Validation("Name is required"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Rename the customer; an empty name is rejected and the old one kept
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::Validation("Name is required"));
        }
        self.name = name;
        Ok(())
    }

    /// Set the address without raising an event
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Move the customer and notify `CustomerChangeAddressEvent`.
    ///
    /// The address is kept even if a handler fails.
    pub fn change_address(
        &mut self,
        address: Address,
        dispatcher: &EventDispatcher,
    ) -> Result<(), DomainError> {
        self.address = Some(address.clone());
        dispatcher.notify(&Event::new(CustomerAddressChanged {
            id: self.id.clone(),
            name: self.name.clone(),
            address,
        }))?;
        Ok(())
    }

    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::Validation(
                "Address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
