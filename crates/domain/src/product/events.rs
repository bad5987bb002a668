// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events raised by the product aggregate

use herald_core::EventData;
use serde::Serialize;

/// A product was added to the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreated {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl EventData for ProductCreated {
    const NAME: &'static str = "ProductCreatedEvent";
}
