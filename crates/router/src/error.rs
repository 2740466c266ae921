// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the router

use crate::{ConfigError, ServiceState};
use dagh_adapters::SinkError;
use dagh_core::EventType;
use dagh_storage::StorageError;
use thiserror::Error;

/// Errors that can occur while building or driving the router
#[derive(Debug, Error)]
pub enum RouterError {
    /// The recovery sink rejected a recovery-applicable event
    #[error("recovery delivery failed for {event_type}: {source}")]
    Recovery {
        event_type: EventType,
        #[source]
        source: SinkError,
    },
    #[error("{0} is enabled but no sink was provided")]
    MissingSink(&'static str),
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: ServiceState, to: ServiceState },
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
