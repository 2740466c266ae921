// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-vertex task timing statistics

/// Task timing summary for a finished vertex
///
/// The task lists name every task that tied for the respective extreme.
#[derive(Clone, PartialEq, prost::Message)]
pub struct VertexStats {
    #[prost(int64, tag = "1")]
    pub first_task_start_time: i64,
    #[prost(string, repeated, tag = "2")]
    pub first_tasks_to_start: Vec<String>,
    #[prost(int64, tag = "3")]
    pub last_task_finish_time: i64,
    #[prost(string, repeated, tag = "4")]
    pub last_tasks_to_finish: Vec<String>,
    #[prost(int64, tag = "5")]
    pub min_task_duration: i64,
    #[prost(int64, tag = "6")]
    pub max_task_duration: i64,
    #[prost(double, tag = "7")]
    pub avg_task_duration: f64,
    #[prost(string, repeated, tag = "8")]
    pub shortest_duration_tasks: Vec<String>,
    #[prost(string, repeated, tag = "9")]
    pub longest_duration_tasks: Vec<String>,
}
