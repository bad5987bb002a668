// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Product entity, its creation event and handler

mod entity;
mod events;
mod handlers;

pub use entity::Product;
pub use events::ProductCreated;
pub use handlers::SendEmailWhenProductIsCreated;
