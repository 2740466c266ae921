// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plan and statistics projections
//!
//! Pure functions turning plan, counter and vertex-statistics snapshots into
//! ordered JSON objects. Output key order follows source order, and a
//! list-valued key is left out entirely when its list would be empty;
//! consumers treat a missing key differently from `[]`.

mod builder;
mod counters;
mod plan;
mod stats;

pub use builder::ProjectionBuilder;
pub use counters::project_counters;
pub use plan::{project_plan, project_plan_versioned, PLAN_VERSION};
pub use stats::project_vertex_stats;

/// An ordered JSON object
pub type Projection = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
