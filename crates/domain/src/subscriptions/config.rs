// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML subscription file
//!
//! ```toml
//! [dispatcher]
//! failure_policy = "abort_on_first"
//!
//! [[subscription]]
//! event = "CustomerCreatedEvent"
//! handlers = ["customer-created-log-one", "customer-created-log-two"]
//! ```

use super::catalog::HandlerCatalog;
use crate::customer::{CustomerAddressChanged, CustomerCreated};
use crate::product::ProductCreated;
use herald_core::{DispatchError, DispatcherConfig, EventData, EventDispatcher, HandlerRef};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the path of a subscription file
pub const SUBSCRIPTIONS_ENV: &str = "HERALD_SUBSCRIPTIONS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid subscription file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown handler '{handler}' for event {event}")]
    UnknownHandler { event: String, handler: String },
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Handlers to register for one event name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subscription {
    pub event: String,
    pub handlers: Vec<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Subscription {
    pub fn new(event: impl Into<String>, handlers: &[&str]) -> Self {
        Self {
            event: event.into(),
            handlers: handlers.iter().map(|h| h.to_string()).collect(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionConfig {
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
    #[serde(default, rename = "subscription")]
    pub subscriptions: Vec<Subscription>,
}

impl SubscriptionConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load the file named by `HERALD_SUBSCRIPTIONS`, or use the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(SUBSCRIPTIONS_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::load_or_default(path.as_deref())
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default_config()),
        }
    }

    /// Every shipped handler subscribed to its event, log handlers first
    pub fn default_config() -> Self {
        Self {
            dispatcher: DispatcherConfig::default(),
            subscriptions: vec![
                Subscription::new(
                    CustomerCreated::NAME,
                    &["customer-created-log-one", "customer-created-log-two"],
                ),
                Subscription::new(
                    CustomerAddressChanged::NAME,
                    &["customer-address-changed-log"],
                ),
                Subscription::new(
                    ProductCreated::NAME,
                    &["send-email-when-product-is-created"],
                ),
            ],
        }
    }

    /// Register every enabled subscription on `dispatcher`, in file order.
    ///
    /// All names are resolved first; on error nothing is registered.
    /// Returns the number of registrations made.
    pub fn apply(
        &self,
        dispatcher: &EventDispatcher,
        catalog: &HandlerCatalog,
    ) -> Result<usize, ConfigError> {
        let mut plan: Vec<(&str, HandlerRef)> = Vec::new();
        for subscription in self.subscriptions.iter().filter(|s| s.enabled) {
            if subscription.event.trim().is_empty() {
                return Err(DispatchError::EmptyEventName.into());
            }
            for name in &subscription.handlers {
                let handler = catalog
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownHandler {
                        event: subscription.event.clone(),
                        handler: name.clone(),
                    })?;
                plan.push((subscription.event.as_str(), handler.clone()));
            }
        }

        let registered = plan.len();
        for (event, handler) in plan {
            dispatcher.register(event, handler)?;
        }

        tracing::info!(
            subscriptions = self.subscriptions.len(),
            registered,
            "subscriptions applied"
        );
        Ok(registered)
    }

    /// A new dispatcher with this file's policy and subscriptions
    pub fn build(&self, catalog: &HandlerCatalog) -> Result<EventDispatcher, ConfigError> {
        let dispatcher = EventDispatcher::with_config(self.dispatcher.clone());
        self.apply(&dispatcher, catalog)?;
        Ok(dispatcher)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
