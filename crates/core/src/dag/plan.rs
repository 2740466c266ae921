// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DAG plan records

/// Names a pluggable class (processor, input, output, edge endpoint)
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct EntityDescriptor {
    #[prost(string, optional, tag = "1")]
    pub class_name: Option<String>,
}

impl EntityDescriptor {
    pub fn named(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
        }
    }
}

/// A root input or leaf output attached to a vertex
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct RootInputLeafOutput {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub entity_descriptor: Option<EntityDescriptor>,
    #[prost(string, optional, tag = "3")]
    pub initializer_class_name: Option<String>,
}

/// One processing stage of the DAG
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct VertexPlan {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub processor_descriptor: Option<EntityDescriptor>,
    #[prost(string, repeated, tag = "3")]
    pub in_edge_ids: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub out_edge_ids: Vec<String>,
    #[prost(message, repeated, tag = "5")]
    pub inputs: Vec<RootInputLeafOutput>,
    #[prost(message, repeated, tag = "6")]
    pub outputs: Vec<RootInputLeafOutput>,
    #[prost(message, optional, tag = "7")]
    pub vertex_manager_plugin: Option<EntityDescriptor>,
}

/// How data moves across an edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DataMovementType {
    OneToOne = 0,
    Broadcast = 1,
    ScatterGather = 2,
    Custom = 3,
}

impl DataMovementType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataMovementType::OneToOne => "ONE_TO_ONE",
            DataMovementType::Broadcast => "BROADCAST",
            DataMovementType::ScatterGather => "SCATTER_GATHER",
            DataMovementType::Custom => "CUSTOM",
        }
    }
}

/// Durability of the data produced on an edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DataSourceType {
    Persisted = 0,
    PersistedReliable = 1,
    Ephemeral = 2,
}

impl DataSourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSourceType::Persisted => "PERSISTED",
            DataSourceType::PersistedReliable => "PERSISTED_RELIABLE",
            DataSourceType::Ephemeral => "EPHEMERAL",
        }
    }
}

/// When the consumer of an edge may be scheduled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SchedulingType {
    Sequential = 0,
    Concurrent = 1,
}

impl SchedulingType {
    pub fn as_str(self) -> &'static str {
        match self {
            SchedulingType::Sequential => "SEQUENTIAL",
            SchedulingType::Concurrent => "CONCURRENT",
        }
    }
}

/// Data movement between two vertices
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct EdgePlan {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub input_vertex_name: String,
    #[prost(string, tag = "3")]
    pub output_vertex_name: String,
    #[prost(enumeration = "DataMovementType", tag = "4")]
    pub data_movement_type: i32,
    #[prost(enumeration = "DataSourceType", tag = "5")]
    pub data_source_type: i32,
    #[prost(enumeration = "SchedulingType", tag = "6")]
    pub scheduling_type: i32,
    #[prost(message, optional, tag = "7")]
    pub edge_source: Option<EntityDescriptor>,
    #[prost(message, optional, tag = "8")]
    pub edge_destination: Option<EntityDescriptor>,
}

/// A group input merged into a destination vertex
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct PlanGroupInputEdgeInfo {
    #[prost(string, tag = "1")]
    pub dest_vertex_name: String,
    #[prost(message, optional, tag = "2")]
    pub merged_input: Option<EntityDescriptor>,
}

/// Vertices addressed together as a single logical input or output
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct PlanVertexGroupInfo {
    #[prost(string, tag = "1")]
    pub group_name: String,
    #[prost(string, repeated, tag = "2")]
    pub group_members: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub outputs: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub edge_merged_inputs: Vec<PlanGroupInputEdgeInfo>,
}

/// The complete execution plan submitted for a DAG
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct DagPlan {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub vertices: Vec<VertexPlan>,
    #[prost(message, repeated, tag = "3")]
    pub edges: Vec<EdgePlan>,
    #[prost(message, repeated, tag = "4")]
    pub vertex_groups: Vec<PlanVertexGroupInfo>,
}
