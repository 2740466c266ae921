// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counter projection

use super::{Projection, ProjectionBuilder};
use crate::dag::{Counter, CounterGroup, Counters};

const COUNTER_GROUPS: &str = "counterGroups";
const COUNTER_GROUP_NAME: &str = "counterGroupName";
const COUNTER_GROUP_DISPLAY_NAME: &str = "counterGroupDisplayName";
const COUNTERS: &str = "counters";
const COUNTER_NAME: &str = "counterName";
const COUNTER_DISPLAY_NAME: &str = "counterDisplayName";
const COUNTER_VALUE: &str = "counterValue";

/// Project counters into `{counterGroups: [...]}`
///
/// Absent counters project to an empty object.
pub fn project_counters(counters: Option<&Counters>) -> Projection {
    let Some(counters) = counters else {
        return Projection::new();
    };

    ProjectionBuilder::new()
        .put_if_non_empty(COUNTER_GROUPS, counters.groups.iter().map(group))
        .build()
}

fn group(group: &CounterGroup) -> ProjectionBuilder {
    ProjectionBuilder::new()
        .put(COUNTER_GROUP_NAME, group.name.as_str())
        .put(COUNTER_GROUP_DISPLAY_NAME, group.display_name.as_str())
        .put_if_non_empty(COUNTERS, group.counters.iter().map(counter))
}

fn counter(counter: &Counter) -> ProjectionBuilder {
    ProjectionBuilder::new()
        .put(COUNTER_NAME, counter.name.as_str())
        .put(COUNTER_DISPLAY_NAME, counter.display_name.as_str())
        .put(COUNTER_VALUE, counter.value)
}
