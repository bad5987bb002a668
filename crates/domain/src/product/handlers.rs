// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handlers reacting to product events

use super::events::ProductCreated;
use herald_core::{AnyEvent, EventHandler, HandlerError};

/// Announces a new product by e-mail
#[derive(Debug, Clone, Copy, Default)]
pub struct SendEmailWhenProductIsCreated;

impl EventHandler for SendEmailWhenProductIsCreated {
    fn handle(&self, event: &dyn AnyEvent) -> Result<(), HandlerError> {
        let event = event.try_as::<ProductCreated>()?;
        let product = event.data();
        tracing::info!(
            product_id = %product.id,
            price = product.price,
            occurred_at = %event.occurred_at(),
            "sending email: product {} was created",
            product.name
        );
        Ok(())
    }
}
