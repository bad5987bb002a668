// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Customer aggregate, its events, handlers and factory

mod entity;
mod events;
mod factory;
mod handlers;

pub use entity::Customer;
pub use events::{CustomerAddressChanged, CustomerCreated};
pub use factory::{CustomerFactory, IdGenerator, SequentialGenerator, UuidGenerator};
pub use handlers::{CustomerAddressChangedLog, CustomerCreatedLogOne, CustomerCreatedLogTwo};
