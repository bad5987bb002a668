// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Product entity

use super::events::ProductCreated;
use crate::error::DomainError;
use herald_core::{Event, EventDispatcher};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    description: String,
    price: f64,
}

impl Product {
    /// Build a product without raising any event
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, DomainError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Build a product and notify `ProductCreatedEvent`
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        dispatcher: &EventDispatcher,
    ) -> Result<Self, DomainError> {
        let product = Self::new(id, name, description, price)?;
        dispatcher.notify(&Event::new(ProductCreated {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }))?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::Validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(DomainError::Validation("Name is required"));
        }
        check_price(self.price)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::Validation("Name is required"));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), DomainError> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }
}

// NaN is rejected along with negatives
fn check_price(price: f64) -> Result<(), DomainError> {
    if price.is_nan() || price < 0.0 {
        return Err(DomainError::Validation("Price must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
