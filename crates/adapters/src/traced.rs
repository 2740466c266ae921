// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sink wrapper for consistent observability

use crate::sink::{HistorySink, RecoverySink, SinkError};
use dagh_core::DagHistoryEvent;

/// Wrapper that adds tracing to any sink
#[derive(Clone)]
pub struct TracedSink<S> {
    name: &'static str,
    inner: S,
}

impl<S> TracedSink<S> {
    /// Wrap `inner`, labelling its spans with `name` (e.g. "recovery", "timeline")
    pub fn new(name: &'static str, inner: S) -> Self {
        Self { name, inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: HistorySink> HistorySink for TracedSink<S> {
    fn handle(&self, event: &DagHistoryEvent) -> Result<(), SinkError> {
        let span = tracing::info_span!(
            "sink.handle",
            sink = self.name,
            event_type = %event.event_type()
        );
        let _guard = span.enter();

        tracing::debug!("delivering");

        let start = std::time::Instant::now();
        let result = self.inner.handle(event);
        let elapsed = start.elapsed();

        // Reported by the caller
        match &result {
            Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "delivered"),
            Err(e) => tracing::debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "delivery failed"
            ),
        }

        result
    }

    fn start(&self) -> Result<(), SinkError> {
        let span = tracing::info_span!("sink.start", sink = self.name);
        let _guard = span.enter();

        let result = self.inner.start();
        match &result {
            Ok(()) => tracing::info!("started"),
            Err(e) => tracing::error!(error = %e, "start failed"),
        }

        result
    }

    fn stop(&self) -> Result<(), SinkError> {
        let span = tracing::info_span!("sink.stop", sink = self.name);
        let _guard = span.enter();

        let result = self.inner.stop();
        // A failing stop is reported but the sink is gone either way
        match &result {
            Ok(()) => tracing::info!("stopped"),
            Err(e) => tracing::warn!(error = %e, "stop failed"),
        }

        result
    }
}

impl<S: RecoverySink> RecoverySink for TracedSink<S> {
    fn has_failed(&self) -> bool {
        let failed = self.inner.has_failed();
        tracing::trace!(sink = self.name, failed, "checked");
        failed
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
