// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events raised by the customer aggregate

use crate::address::Address;
use herald_core::EventData;
use serde::Serialize;

/// A customer was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

impl EventData for CustomerCreated {
    const NAME: &'static str = "CustomerCreatedEvent";
}

/// A customer moved to a new address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerAddressChanged {
    pub id: String,
    pub name: String,
    pub address: Address,
}

impl EventData for CustomerAddressChanged {
    const NAME: &'static str = "CustomerChangeAddressEvent";
}
