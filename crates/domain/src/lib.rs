// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herald-domain: entities and handlers built on herald-core
//!
//! This crate provides:
//! - The `Customer` and `Product` entities and the `Address` value object
//! - The events they raise and the handlers that react to them
//! - TOML subscription files wiring handlers to a dispatcher

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod address;
pub mod customer;
pub mod error;
pub mod product;
pub mod subscriptions;

#[cfg(test)]
mod test_support;

// Re-exports
pub use address::Address;
pub use customer::{
    Customer, CustomerAddressChanged, CustomerAddressChangedLog, CustomerCreated,
    CustomerCreatedLogOne, CustomerCreatedLogTwo, CustomerFactory, IdGenerator,
    SequentialGenerator, UuidGenerator,
};
pub use error::DomainError;
pub use product::{Product, ProductCreated, SendEmailWhenProductIsCreated};
pub use subscriptions::{
    default_catalog, ConfigError, HandlerCatalog, Subscription, SubscriptionConfig,
    SUBSCRIPTIONS_ENV,
};
