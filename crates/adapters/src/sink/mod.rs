// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Downstream sinks for history events
//!
//! A sink is called synchronously on the routing thread. Implementations
//! must be safe to call from several threads at once; any batching or
//! background writing is their own business.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSink, SinkCall};

use dagh_core::{CodecError, DagHistoryEvent};
use std::io;
use thiserror::Error;

/// Errors from delivering to a sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("encode error: {0}")]
    Codec(#[from] CodecError),
    #[error("sink unavailable: {0}")]
    Unavailable(String),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// A destination for history events (the timeline sink implements only this)
pub trait HistorySink: Send + Sync {
    /// Deliver one event
    fn handle(&self, event: &DagHistoryEvent) -> Result<(), SinkError>;

    fn start(&self) -> Result<(), SinkError> {
        Ok(())
    }

    fn stop(&self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// The durable recovery log
pub trait RecoverySink: HistorySink {
    /// Whether the sink hit an unrecoverable error
    ///
    /// Sticky: once true it stays true for the life of the sink.
    fn has_failed(&self) -> bool;
}
