// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution plan, counter and statistics records
//!
//! These are the binary snapshots the engine hands to history events. They
//! are plain protobuf messages so they can be embedded in event records
//! without a translation layer.

mod counters;
mod plan;
mod stats;

pub use counters::{Counter, CounterGroup, Counters};
pub use plan::{
    DagPlan, DataMovementType, DataSourceType, EdgePlan, EntityDescriptor, PlanGroupInputEdgeInfo,
    PlanVertexGroupInfo, RootInputLeafOutput, SchedulingType, VertexPlan,
};
pub use stats::VertexStats;
