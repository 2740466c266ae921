// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline entity structure submitted to the timeline service
//!
//! Field names on the wire are fixed by the timeline service and must not
//! change between versions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Prefix applied to native identifiers to form timeline entity ids
pub const ENTITY_ID_PREFIX: &str = "tez_";

/// Build a timeline entity id from a native identifier
pub fn entity_id(native: impl std::fmt::Display) -> String {
    format!("{}{}", ENTITY_ID_PREFIX, native)
}

/// Keys used in related entities, primary filters and other info
pub mod keys {
    pub const CONTAINER_ID: &str = "containerId";
    pub const DAG_NAME: &str = "dagName";
    pub const DAG_PLAN: &str = "dagPlan";
    pub const USER: &str = "user";
    pub const VERTEX_NAME: &str = "vertexName";
    pub const START_TIME: &str = "startTime";
    pub const FINISH_TIME: &str = "finishTime";
    pub const TIME_TAKEN: &str = "timeTaken";
    pub const STATUS: &str = "status";
    pub const DIAGNOSTICS: &str = "diagnostics";
    pub const COUNTERS: &str = "counters";
    pub const STATS: &str = "stats";
    pub const NUM_TASKS: &str = "numTasks";
    pub const APPLICATION_ATTEMPT_ID: &str = "applicationAttemptId";
}

/// Entity type tags known to the timeline service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    ApplicationAttempt,
    Container,
    Dag,
    Vertex,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::ApplicationAttempt => "TEZ_APPLICATION_ATTEMPT",
            EntityType::Container => "TEZ_CONTAINER_ID",
            EntityType::Dag => "TEZ_DAG_ID",
            EntityType::Vertex => "TEZ_VERTEX_ID",
        }
    }
}

/// A timestamped occurrence attached to an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(rename = "eventtype")]
    pub event_type: String,
    pub timestamp: i64,
    #[serde(rename = "eventinfo", default, skip_serializing_if = "Map::is_empty")]
    pub event_info: Map<String, Value>,
}

impl TimelineEvent {
    pub fn new(event_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
            event_info: Map::new(),
        }
    }
}

/// The timeline-service view of one history event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntity {
    #[serde(rename = "entity")]
    pub entity_id: String,
    #[serde(rename = "entitytype")]
    pub entity_type: String,
    #[serde(
        rename = "relatedentities",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub related_entities: BTreeMap<String, BTreeSet<String>>,
    #[serde(
        rename = "primaryfilters",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub primary_filters: BTreeMap<String, BTreeSet<String>>,
    #[serde(rename = "otherinfo", default, skip_serializing_if = "Map::is_empty")]
    pub other_info: Map<String, Value>,
    #[serde(rename = "starttime")]
    pub start_time: i64,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl TimelineEntity {
    pub fn new(entity_id: impl Into<String>, entity_type: EntityType, start_time: i64) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_type: entity_type.as_str().to_string(),
            related_entities: BTreeMap::new(),
            primary_filters: BTreeMap::new(),
            other_info: Map::new(),
            start_time,
            events: Vec::new(),
        }
    }

    pub fn add_related_entity(&mut self, entity_type: &str, entity_id: impl Into<String>) {
        self.related_entities
            .entry(entity_type.to_string())
            .or_default()
            .insert(entity_id.into());
    }

    pub fn add_primary_filter(&mut self, key: &str, value: impl Into<String>) {
        self.primary_filters
            .entry(key.to_string())
            .or_default()
            .insert(value.into());
    }

    pub fn add_other_info(&mut self, key: &str, value: impl Into<Value>) {
        self.other_info.insert(key.to_string(), value.into());
    }

    pub fn add_event(&mut self, event: TimelineEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
