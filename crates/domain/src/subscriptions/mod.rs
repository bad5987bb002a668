// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription configuration
//!
//! Wires named handlers to event names on a dispatcher, from a TOML file
//! or from the built-in defaults.

mod catalog;
mod config;

pub use catalog::{default_catalog, HandlerCatalog};
pub use config::{ConfigError, Subscription, SubscriptionConfig, SUBSCRIPTIONS_ENV};
