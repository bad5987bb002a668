// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Address value object

use crate::error::DomainError;
use serde::Serialize;
use std::fmt;

/// A postal address; valid by construction and immutable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.street.trim().is_empty() {
            return Err(DomainError::Validation("Street is required"));
        }
        if self.number == 0 {
            return Err(DomainError::Validation("Number is required"));
        }
        if self.zip.trim().is_empty() {
            return Err(DomainError::Validation("Zip is required"));
        }
        if self.city.trim().is_empty() {
            return Err(DomainError::Validation("City is required"));
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
