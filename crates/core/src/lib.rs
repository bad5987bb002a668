// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herald-core: in-process domain event dispatch
//!
//! This crate provides:
//! - Immutable events keyed by the name of their payload type
//! - The single-method `EventHandler` capability
//! - `EventDispatcher`, which maps event names to ordered handler lists and
//!   notifies them synchronously

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod handler;

#[cfg(test)]
mod test_support;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use dispatch::{DispatcherConfig, EventDispatcher, FailurePolicy};
pub use error::{DispatchError, HandlerError, HandlerFailure};
pub use event::{AnyEvent, Event, EventData};
pub use handler::{EventHandler, HandlerRef};
