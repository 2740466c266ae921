// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History events emitted by the DAG engine
//!
//! Each variant declares, as constants, whether it belongs in the recovery
//! log and whether it belongs in the timeline. Variants encode themselves as
//! a single length-delimited record and project themselves into a
//! [`TimelineEntity`].
//!
//! ```text
//! engine ──► DagHistoryEvent { dag_id?, HistoryEvent }
//!                                   │
//!              ┌────────────────────┼─────────────────────┐
//!              ▼                    ▼                     ▼
//!        encode/decode      to_timeline_entity     Display (audit log)
//! ```

mod container_launched;
mod dag_commit_started;
mod dag_finished;
mod dag_submitted;
pub mod records;
mod state;
mod vertex_finished;

pub use container_launched::ContainerLaunchedEvent;
pub use dag_commit_started::DagCommitStartedEvent;
pub use dag_finished::DagFinishedEvent;
pub use dag_submitted::DagSubmittedEvent;
pub use state::TerminalState;
pub use vertex_finished::VertexFinishedEvent;

use crate::codec::{read_delimited, write_delimited, CodecError};
use crate::id::DagId;
use crate::timeline::TimelineEntity;
use prost::Message;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// Tag identifying a history event variant
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    prost::Enumeration,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum EventType {
    DagSubmitted = 1,
    DagFinished = 2,
    DagCommitStarted = 3,
    VertexFinished = 4,
    ContainerLaunched = 5,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::DagSubmitted,
        EventType::DagFinished,
        EventType::DagCommitStarted,
        EventType::VertexFinished,
        EventType::ContainerLaunched,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventType::DagSubmitted => "DAG_SUBMITTED",
            EventType::DagFinished => "DAG_FINISHED",
            EventType::DagCommitStarted => "DAG_COMMIT_STARTED",
            EventType::VertexFinished => "VERTEX_FINISHED",
            EventType::ContainerLaunched => "CONTAINER_LAUNCHED",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contract every history event variant fulfils
///
/// The tag and both applicability flags are associated constants, so they
/// cannot drift from the variant type.
pub trait HistoryRecord: Sized + fmt::Display {
    const EVENT_TYPE: EventType;
    /// Whether the event is written to the recovery log
    const RECOVERY_EVENT: bool;
    /// Whether the event is published to the timeline
    const HISTORY_EVENT: bool;

    type Record: Message + Default;

    fn to_record(&self) -> Self::Record;

    fn from_record(record: Self::Record) -> Result<Self, CodecError>;

    fn to_timeline_entity(&self) -> TimelineEntity;

    /// Write this event as one length-delimited record
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), CodecError> {
        write_delimited(sink, &self.to_record())
    }

    /// Read one length-delimited record and rebuild the event
    fn decode<R: Read + ?Sized>(source: &mut R) -> Result<Self, CodecError> {
        Self::from_record(read_delimited(source)?)
    }
}

/// Closed set of history event variants
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    DagSubmitted(DagSubmittedEvent),
    DagFinished(DagFinishedEvent),
    DagCommitStarted(DagCommitStartedEvent),
    VertexFinished(VertexFinishedEvent),
    ContainerLaunched(ContainerLaunchedEvent),
}

macro_rules! dispatch {
    ($event:expr, $inner:ident => $body:expr) => {
        match $event {
            HistoryEvent::DagSubmitted($inner) => $body,
            HistoryEvent::DagFinished($inner) => $body,
            HistoryEvent::DagCommitStarted($inner) => $body,
            HistoryEvent::VertexFinished($inner) => $body,
            HistoryEvent::ContainerLaunched($inner) => $body,
        }
    };
}

fn event_type_of<E: HistoryRecord>(_: &E) -> EventType {
    E::EVENT_TYPE
}

fn is_recovery<E: HistoryRecord>(_: &E) -> bool {
    E::RECOVERY_EVENT
}

fn is_history<E: HistoryRecord>(_: &E) -> bool {
    E::HISTORY_EVENT
}

impl HistoryEvent {
    pub fn event_type(&self) -> EventType {
        dispatch!(self, e => event_type_of(e))
    }

    pub fn is_recovery_event(&self) -> bool {
        dispatch!(self, e => is_recovery(e))
    }

    pub fn is_history_event(&self) -> bool {
        dispatch!(self, e => is_history(e))
    }

    pub fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), CodecError> {
        dispatch!(self, e => e.encode(sink))
    }

    /// Read one record of the given variant
    pub fn decode<R: Read + ?Sized>(
        event_type: EventType,
        source: &mut R,
    ) -> Result<Self, CodecError> {
        Ok(match event_type {
            EventType::DagSubmitted => DagSubmittedEvent::decode(source)?.into(),
            EventType::DagFinished => DagFinishedEvent::decode(source)?.into(),
            EventType::DagCommitStarted => DagCommitStartedEvent::decode(source)?.into(),
            EventType::VertexFinished => VertexFinishedEvent::decode(source)?.into(),
            EventType::ContainerLaunched => ContainerLaunchedEvent::decode(source)?.into(),
        })
    }

    pub fn to_timeline_entity(&self) -> TimelineEntity {
        dispatch!(self, e => e.to_timeline_entity())
    }
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, e => fmt::Display::fmt(e, f))
    }
}

impl From<DagSubmittedEvent> for HistoryEvent {
    fn from(e: DagSubmittedEvent) -> Self {
        HistoryEvent::DagSubmitted(e)
    }
}

impl From<DagFinishedEvent> for HistoryEvent {
    fn from(e: DagFinishedEvent) -> Self {
        HistoryEvent::DagFinished(e)
    }
}

impl From<DagCommitStartedEvent> for HistoryEvent {
    fn from(e: DagCommitStartedEvent) -> Self {
        HistoryEvent::DagCommitStarted(e)
    }
}

impl From<VertexFinishedEvent> for HistoryEvent {
    fn from(e: VertexFinishedEvent) -> Self {
        HistoryEvent::VertexFinished(e)
    }
}

impl From<ContainerLaunchedEvent> for HistoryEvent {
    fn from(e: ContainerLaunchedEvent) -> Self {
        HistoryEvent::ContainerLaunched(e)
    }
}

/// A history event addressed to a DAG
///
/// The DAG id is absent for events raised before any DAG was submitted. It
/// keys routing and logging only; it is not part of the event's record.
#[derive(Debug, Clone, PartialEq)]
pub struct DagHistoryEvent {
    dag_id: Option<DagId>,
    event: HistoryEvent,
}

impl DagHistoryEvent {
    pub fn new(dag_id: Option<DagId>, event: impl Into<HistoryEvent>) -> Self {
        Self {
            dag_id,
            event: event.into(),
        }
    }

    pub fn for_dag(dag_id: DagId, event: impl Into<HistoryEvent>) -> Self {
        Self::new(Some(dag_id), event)
    }

    /// An event not tied to any DAG
    pub fn unscoped(event: impl Into<HistoryEvent>) -> Self {
        Self::new(None, event)
    }

    pub fn dag_id(&self) -> Option<&DagId> {
        self.dag_id.as_ref()
    }

    pub fn history_event(&self) -> &HistoryEvent {
        &self.event
    }

    pub fn event_type(&self) -> EventType {
        self.event.event_type()
    }

    pub fn into_parts(self) -> (Option<DagId>, HistoryEvent) {
        (self.dag_id, self.event)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
