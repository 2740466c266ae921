// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary records for each history event variant
//!
//! Identifier fields use explicit presence so a record missing one can be
//! rejected instead of silently decoding to an empty id. Tags are never
//! reused; new fields are only ever appended.

use super::TerminalState;
use crate::dag::{Counters, DagPlan, VertexStats};

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct ContainerLaunchedRecord {
    #[prost(string, optional, tag = "1")]
    pub container_id: Option<String>,
    #[prost(int64, tag = "2")]
    pub launch_time: i64,
    #[prost(string, optional, tag = "3")]
    pub application_attempt_id: Option<String>,
}

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct DagSubmittedRecord {
    #[prost(string, optional, tag = "1")]
    pub dag_id: Option<String>,
    #[prost(int64, tag = "2")]
    pub submit_time: i64,
    #[prost(string, tag = "3")]
    pub user: String,
    #[prost(string, optional, tag = "4")]
    pub application_attempt_id: Option<String>,
    #[prost(message, optional, tag = "5")]
    pub dag_plan: Option<DagPlan>,
}

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct DagFinishedRecord {
    #[prost(string, optional, tag = "1")]
    pub dag_id: Option<String>,
    #[prost(string, tag = "2")]
    pub dag_name: String,
    #[prost(string, tag = "3")]
    pub user: String,
    #[prost(int64, tag = "4")]
    pub start_time: i64,
    #[prost(int64, tag = "5")]
    pub finish_time: i64,
    #[prost(enumeration = "TerminalState", optional, tag = "6")]
    pub state: Option<i32>,
    #[prost(string, tag = "7")]
    pub diagnostics: String,
    #[prost(message, optional, tag = "8")]
    pub counters: Option<Counters>,
}

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct DagCommitStartedRecord {
    #[prost(string, optional, tag = "1")]
    pub dag_id: Option<String>,
    #[prost(int64, tag = "2")]
    pub commit_start_time: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VertexFinishedRecord {
    #[prost(string, optional, tag = "1")]
    pub vertex_id: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub dag_id: Option<String>,
    #[prost(string, tag = "3")]
    pub vertex_name: String,
    #[prost(int64, tag = "4")]
    pub start_time: i64,
    #[prost(int64, tag = "5")]
    pub finish_time: i64,
    #[prost(enumeration = "TerminalState", optional, tag = "6")]
    pub state: Option<i32>,
    #[prost(string, tag = "7")]
    pub diagnostics: String,
    #[prost(int32, tag = "8")]
    pub num_tasks: i32,
    #[prost(message, optional, tag = "9")]
    pub counters: Option<Counters>,
    #[prost(message, optional, tag = "10")]
    pub stats: Option<VertexStats>,
}
