// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The history event router
//!
//! ```text
//! route_critical(event)
//!   ├─ recovery enabled && event.is_recovery_event()  → recovery.handle   (failure returned)
//!   ├─ timeline enabled && event.is_history_event()   → timeline.handle   (failure logged)
//!   └─ audit line                                     (always)
//! ```
//!
//! Dispatch takes no lock. The sinks are fixed at construction and must be
//! safe to call from several threads at once.

use crate::{HistoryConfig, RouterError};
use dagh_adapters::{HistorySink, RecoverySink, TracedSink};
use dagh_core::{DagHistoryEvent, DagId};
use dagh_storage::{RecoveryLog, TimelineLog};
use std::fmt;
use std::sync::Mutex;

const MISSING_DAG_ID: &str = "N/A";

/// Sinks offered to the router; only those whose flag is enabled are kept
#[derive(Default)]
pub struct Sinks {
    pub recovery: Option<Box<dyn RecoverySink>>,
    pub timeline: Option<Box<dyn HistorySink>>,
}

impl Sinks {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_recovery(mut self, sink: impl RecoverySink + 'static) -> Self {
        self.recovery = Some(Box::new(sink));
        self
    }

    pub fn with_timeline(mut self, sink: impl HistorySink + 'static) -> Self {
        self.timeline = Some(Box::new(sink));
        self
    }
}

/// Lifecycle state of the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Initialized,
    Started,
    Stopped,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceState::Initialized => "initialized",
            ServiceState::Started => "started",
            ServiceState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// Routes history events to the recovery and timeline sinks
pub struct HistoryEventRouter {
    recovery: Option<Box<dyn RecoverySink>>,
    timeline: Option<Box<dyn HistorySink>>,
    state: Mutex<ServiceState>,
}

impl HistoryEventRouter {
    /// Build a router from the config flags and the offered sinks
    ///
    /// The flags are read once here. A sink offered for a disabled concern is
    /// dropped; an enabled concern with no sink is an error.
    pub fn new(config: &HistoryConfig, sinks: Sinks) -> Result<Self, RouterError> {
        let recovery = match (config.recovery_enabled, sinks.recovery) {
            (true, Some(sink)) => Some(sink),
            (true, None) => return Err(RouterError::MissingSink("recovery")),
            (false, _) => None,
        };
        let timeline = match (config.timeline_enabled, sinks.timeline) {
            (true, Some(sink)) => Some(sink),
            (true, None) => return Err(RouterError::MissingSink("timeline")),
            (false, _) => None,
        };

        tracing::info!(
            recovery_enabled = recovery.is_some(),
            timeline_enabled = timeline.is_some(),
            "history event router initialized"
        );

        Ok(Self {
            recovery,
            timeline,
            state: Mutex::new(ServiceState::Initialized),
        })
    }

    /// Build a router over the file-backed sinks named in the config
    pub fn open(config: &HistoryConfig) -> Result<Self, RouterError> {
        let mut sinks = Sinks::none();
        if config.recovery_enabled {
            let log = RecoveryLog::open(config.recovery_log_path()?)?;
            sinks = sinks.with_recovery(TracedSink::new("recovery", log));
        }
        if config.timeline_enabled {
            let log = TimelineLog::open(config.timeline_log_path()?)?;
            sinks = sinks.with_timeline(TracedSink::new("timeline", log));
        }
        Self::new(config, sinks)
    }

    pub fn recovery_enabled(&self) -> bool {
        self.recovery.is_some()
    }

    pub fn timeline_enabled(&self) -> bool {
        self.timeline.is_some()
    }

    pub fn state(&self) -> ServiceState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start the attached sinks
    pub fn start(&self) -> Result<(), RouterError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        transition(&state, ServiceState::Initialized, ServiceState::Started)?;

        if let Some(recovery) = &self.recovery {
            recovery.start()?;
        }
        if let Some(timeline) = &self.timeline {
            timeline.start()?;
        }

        *state = ServiceState::Started;
        Ok(())
    }

    /// Stop the attached sinks
    ///
    /// Both sinks are stopped even if the first one fails; the first failure
    /// is returned.
    pub fn stop(&self) -> Result<(), RouterError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        transition(&state, ServiceState::Started, ServiceState::Stopped)?;

        let recovery = self.recovery.as_ref().map_or(Ok(()), |s| s.stop());
        let timeline = self.timeline.as_ref().map_or(Ok(()), |s| s.stop());

        *state = ServiceState::Stopped;
        recovery?;
        timeline?;
        Ok(())
    }

    /// Route an event whose delivery is correctness-critical
    ///
    /// A recovery failure is returned to the caller. The timeline sink is
    /// still invoked, and its own failure is only logged.
    pub fn route_critical(&self, event: &DagHistoryEvent) -> Result<(), RouterError> {
        let event_type = event.event_type();
        let history_event = event.history_event();
        let dag = DagLabel(event.dag_id());

        let mut result = Ok(());
        if let Some(recovery) = &self.recovery {
            if history_event.is_recovery_event() {
                result = recovery
                    .handle(event)
                    .map_err(|source| RouterError::Recovery { event_type, source });
            }
        }

        if let Some(timeline) = &self.timeline {
            if history_event.is_history_event() {
                if let Err(e) = timeline.handle(event) {
                    tracing::warn!(
                        dag_id = %dag,
                        event_type = %event_type,
                        error = %e,
                        "timeline delivery failed"
                    );
                }
            }
        }

        tracing::info!(
            dag_id = %dag,
            event_type = %event_type,
            "[HISTORY][DAG:{}][Event:{}]: {}",
            dag,
            event_type,
            history_event
        );

        result
    }

    /// Route an event, logging instead of returning any delivery failure
    pub fn route(&self, event: &DagHistoryEvent) {
        if let Err(e) = self.route_critical(event) {
            tracing::warn!(
                event_type = %event.event_type(),
                error = %e,
                "error handling history event"
            );
        }
    }

    /// Whether the recovery sink has entered its failed state
    ///
    /// Always false when recovery is disabled.
    pub fn has_recovery_failed(&self) -> bool {
        self.recovery.as_ref().is_some_and(|r| r.has_failed())
    }
}

fn transition(
    current: &ServiceState,
    expected: ServiceState,
    to: ServiceState,
) -> Result<(), RouterError> {
    if *current != expected {
        return Err(RouterError::InvalidTransition {
            from: *current,
            to,
        });
    }
    tracing::debug!(from = %current, to = %to, "router transition");
    Ok(())
}

/// Display form of an optional DAG id for log lines
#[derive(Clone, Copy)]
struct DagLabel<'a>(Option<&'a DagId>);

impl fmt::Display for DagLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => f.write_str(MISSING_DAG_ID),
        }
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
