// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous event dispatch
//!
//! This module provides:
//! - `EventDispatcher` - Map event names to ordered handler lists and notify them
//! - `DispatcherConfig` - How the dispatcher reacts to failing handlers

mod config;
mod dispatcher;

pub use config::{DispatcherConfig, FailurePolicy};
pub use dispatcher::EventDispatcher;
