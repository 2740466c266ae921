// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vertex statistics projection

use super::{Projection, ProjectionBuilder};
use crate::dag::VertexStats;

const FIRST_TASK_START_TIME: &str = "firstTaskStartTime";
const FIRST_TASKS_TO_START: &str = "firstTasksToStart";
const LAST_TASK_FINISH_TIME: &str = "lastTaskFinishTime";
const LAST_TASKS_TO_FINISH: &str = "lastTasksToFinish";
const MIN_TASK_DURATION: &str = "minTaskDuration";
const MAX_TASK_DURATION: &str = "maxTaskDuration";
const AVG_TASK_DURATION: &str = "avgTaskDuration";
const SHORTEST_DURATION_TASKS: &str = "shortestDurationTasks";
const LONGEST_DURATION_TASKS: &str = "longestDurationTasks";

/// Project vertex statistics into a flat object
///
/// Timing scalars are always present; task lists only when non-empty.
/// Absent stats project to an empty object.
pub fn project_vertex_stats(stats: Option<&VertexStats>) -> Projection {
    let Some(stats) = stats else {
        return Projection::new();
    };

    ProjectionBuilder::new()
        .put(FIRST_TASK_START_TIME, stats.first_task_start_time)
        .put_if_non_empty(FIRST_TASKS_TO_START, stats.first_tasks_to_start.iter().map(String::as_str))
        .put(LAST_TASK_FINISH_TIME, stats.last_task_finish_time)
        .put_if_non_empty(LAST_TASKS_TO_FINISH, stats.last_tasks_to_finish.iter().map(String::as_str))
        .put(MIN_TASK_DURATION, stats.min_task_duration)
        .put(MAX_TASK_DURATION, stats.max_task_duration)
        .put(AVG_TASK_DURATION, stats.avg_task_duration)
        .put_if_non_empty(
            SHORTEST_DURATION_TASKS,
            stats.shortest_duration_tasks.iter().map(String::as_str),
        )
        .put_if_non_empty(
            LONGEST_DURATION_TASKS,
            stats.longest_duration_tasks.iter().map(String::as_str),
        )
        .build()
}
