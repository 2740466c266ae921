// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dagh-core: history event model for the DAG engine
//!
//! This crate provides:
//! - The closed set of history event variants and their binary records
//! - Plan, counter and vertex-statistics snapshots
//! - Pure projections of those snapshots into ordered JSON objects
//! - The timeline entity structure events project into

pub mod codec;
pub mod dag;
pub mod history;
pub mod id;
pub mod projection;
pub mod timeline;

pub use codec::CodecError;
pub use history::{
    ContainerLaunchedEvent, DagCommitStartedEvent, DagFinishedEvent, DagHistoryEvent,
    DagSubmittedEvent, EventType, HistoryEvent, HistoryRecord, TerminalState,
    VertexFinishedEvent,
};
pub use id::{ApplicationAttemptId, ContainerId, DagId, VertexId};
pub use projection::{
    project_counters, project_plan, project_plan_versioned, project_vertex_stats, Projection,
};
pub use timeline::{EntityType, TimelineEntity, TimelineEvent};
