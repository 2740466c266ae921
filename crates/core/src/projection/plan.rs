// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DAG plan projection

use super::{Projection, ProjectionBuilder};
use crate::dag::{
    DagPlan, DataMovementType, DataSourceType, EdgePlan, EntityDescriptor, PlanVertexGroupInfo,
    RootInputLeafOutput, SchedulingType, VertexPlan,
};

/// Schema version stamped on the versioned projection
pub const PLAN_VERSION: i64 = 1;

const DAG_NAME: &str = "dagName";
const VERSION: &str = "version";
const VERTICES: &str = "vertices";
const EDGES: &str = "edges";
const VERTEX_GROUPS: &str = "vertexGroups";

const VERTEX_NAME: &str = "vertexName";
const PROCESSOR_CLASS: &str = "processorClass";
const IN_EDGE_IDS: &str = "inEdgeIds";
const OUT_EDGE_IDS: &str = "outEdgeIds";
const ADDITIONAL_INPUTS: &str = "additionalInputs";
const ADDITIONAL_OUTPUTS: &str = "additionalOutputs";
const VERTEX_MANAGER_PLUGIN_CLASS: &str = "vertexManagerPluginClass";

const EDGE_ID: &str = "edgeId";
const INPUT_VERTEX_NAME: &str = "inputVertexName";
const OUTPUT_VERTEX_NAME: &str = "outputVertexName";
const DATA_MOVEMENT_TYPE: &str = "dataMovementType";
const DATA_SOURCE_TYPE: &str = "dataSourceType";
const SCHEDULING_TYPE: &str = "schedulingType";
const EDGE_SOURCE_CLASS: &str = "edgeSourceClass";
const EDGE_DESTINATION_CLASS: &str = "edgeDestinationClass";

const NAME: &str = "name";
const CLASS: &str = "class";
const INITIALIZER: &str = "initializer";

const GROUP_NAME: &str = "groupName";
const GROUP_MEMBERS: &str = "groupMembers";
const GROUP_OUTPUTS: &str = "outputs";
const GROUP_EDGE_MERGED_INPUTS: &str = "edgeMergedInputs";
const DESTINATION_VERTEX_NAME: &str = "destinationVertexName";

/// Project a plan without version marker or vertex groups
///
/// Kept for consumers of the simpler plan document.
pub fn project_plan(plan: &DagPlan) -> Projection {
    ProjectionBuilder::new()
        .put(DAG_NAME, plan.name.as_str())
        .put_if_non_empty(VERTICES, plan.vertices.iter().map(vertex))
        .put_if_non_empty(EDGES, plan.edges.iter().map(edge))
        .build()
}

/// Project a plan with version marker and vertex groups
pub fn project_plan_versioned(plan: &DagPlan) -> Projection {
    ProjectionBuilder::new()
        .put(DAG_NAME, plan.name.as_str())
        .put(VERSION, PLAN_VERSION)
        .put_if_non_empty(VERTICES, plan.vertices.iter().map(vertex))
        .put_if_non_empty(EDGES, plan.edges.iter().map(edge))
        .put_if_non_empty(VERTEX_GROUPS, plan.vertex_groups.iter().map(vertex_group))
        .build()
}

fn class_of(descriptor: Option<&EntityDescriptor>) -> Option<&str> {
    descriptor.and_then(|d| d.class_name.as_deref())
}

fn vertex(plan: &VertexPlan) -> ProjectionBuilder {
    ProjectionBuilder::new()
        .put(VERTEX_NAME, plan.name.as_str())
        .put_opt(
            PROCESSOR_CLASS,
            plan.processor_descriptor
                .as_ref()
                .map(|d| d.class_name.clone().unwrap_or_default()),
        )
        .put_if_non_empty(IN_EDGE_IDS, plan.in_edge_ids.iter().map(String::as_str))
        .put_if_non_empty(OUT_EDGE_IDS, plan.out_edge_ids.iter().map(String::as_str))
        .put_if_non_empty(ADDITIONAL_INPUTS, plan.inputs.iter().map(root_io))
        .put_if_non_empty(ADDITIONAL_OUTPUTS, plan.outputs.iter().map(root_io))
        .put_opt(
            VERTEX_MANAGER_PLUGIN_CLASS,
            plan.vertex_manager_plugin
                .as_ref()
                .map(|d| d.class_name.clone().unwrap_or_default()),
        )
}

fn root_io(io: &RootInputLeafOutput) -> ProjectionBuilder {
    ProjectionBuilder::new()
        .put(NAME, io.name.as_str())
        .put(CLASS, class_of(io.entity_descriptor.as_ref()).unwrap_or_default())
        .put_opt(INITIALIZER, io.initializer_class_name.as_deref())
}

fn edge(plan: &EdgePlan) -> ProjectionBuilder {
    // Out-of-range enum values fall back to the default, as a protobuf getter would
    let movement = DataMovementType::try_from(plan.data_movement_type).unwrap_or_default();
    let source = DataSourceType::try_from(plan.data_source_type).unwrap_or_default();
    let scheduling = SchedulingType::try_from(plan.scheduling_type).unwrap_or_default();

    ProjectionBuilder::new()
        .put(EDGE_ID, plan.id.as_str())
        .put(INPUT_VERTEX_NAME, plan.input_vertex_name.as_str())
        .put(OUTPUT_VERTEX_NAME, plan.output_vertex_name.as_str())
        .put(DATA_MOVEMENT_TYPE, movement.as_str())
        .put(DATA_SOURCE_TYPE, source.as_str())
        .put(SCHEDULING_TYPE, scheduling.as_str())
        .put(
            EDGE_SOURCE_CLASS,
            class_of(plan.edge_source.as_ref()).unwrap_or_default(),
        )
        .put(
            EDGE_DESTINATION_CLASS,
            class_of(plan.edge_destination.as_ref()).unwrap_or_default(),
        )
}

fn vertex_group(group: &PlanVertexGroupInfo) -> ProjectionBuilder {
    ProjectionBuilder::new()
        .put(GROUP_NAME, group.group_name.as_str())
        .put_if_non_empty(GROUP_MEMBERS, group.group_members.iter().map(String::as_str))
        .put_if_non_empty(GROUP_OUTPUTS, group.outputs.iter().map(String::as_str))
        .put_if_non_empty(
            GROUP_EDGE_MERGED_INPUTS,
            group.edge_merged_inputs.iter().map(|input| {
                ProjectionBuilder::new()
                    .put(DESTINATION_VERTEX_NAME, input.dest_vertex_name.as_str())
                    .put_opt(PROCESSOR_CLASS, class_of(input.merged_input.as_ref()))
            }),
        )
}
