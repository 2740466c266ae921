// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! History event routing
//!
//! The router classifies each event by the two applicability flags its
//! variant declares and hands it to the recovery sink, the timeline sink,
//! both, or neither. Every routed event also produces one audit log line.

mod config;
mod error;
mod router;

pub use config::{ConfigError, HistoryConfig};
pub use error::RouterError;
pub use router::{HistoryEventRouter, ServiceState, Sinks};
