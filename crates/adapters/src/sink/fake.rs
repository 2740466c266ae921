// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HistorySink, RecoverySink, SinkError};
use dagh_core::DagHistoryEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Start,
    Handle(DagHistoryEvent),
    Stop,
}

/// Fake sink that records every call
///
/// Clones share state, so a test can keep a handle after giving the sink
/// away to a router.
#[derive(Clone, Default)]
pub struct FakeSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
    failure: Arc<Mutex<Option<String>>>,
    failed: Arc<AtomicBool>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose deliveries always fail
    pub fn failing(reason: &str) -> Self {
        let sink = Self::new();
        sink.fail_with(reason);
        sink
    }

    /// Make subsequent deliveries fail with the given reason
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason.to_string());
    }

    /// Set the sticky failed flag reported through [`RecoverySink::has_failed`]
    pub fn set_failed(&self, failed: bool) {
        self.failed.store(failed, Ordering::SeqCst);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Events passed to `handle`, including failed deliveries
    pub fn handled(&self) -> Vec<DagHistoryEvent> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::Handle(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: SinkCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl HistorySink for FakeSink {
    fn handle(&self, event: &DagHistoryEvent) -> Result<(), SinkError> {
        self.record(SinkCall::Handle(event.clone()));
        match self
            .failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            Some(reason) => Err(SinkError::Delivery(reason.clone())),
            None => Ok(()),
        }
    }

    fn start(&self) -> Result<(), SinkError> {
        self.record(SinkCall::Start);
        Ok(())
    }

    fn stop(&self) -> Result<(), SinkError> {
        self.record(SinkCall::Stop);
        Ok(())
    }
}

impl RecoverySink for FakeSink {
    fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
