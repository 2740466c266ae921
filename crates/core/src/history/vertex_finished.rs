// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vertex completion event

use super::records::VertexFinishedRecord;
use super::{EventType, HistoryRecord, TerminalState};
use crate::codec::{required, CodecError};
use crate::dag::{Counters, VertexStats};
use crate::id::{DagId, VertexId};
use crate::projection::{project_counters, project_vertex_stats};
use crate::timeline::{entity_id, keys, EntityType, TimelineEntity, TimelineEvent};
use serde_json::Value;
use std::fmt;

/// A vertex reached a terminal state
#[derive(Debug, Clone, PartialEq)]
pub struct VertexFinishedEvent {
    pub vertex_id: VertexId,
    pub dag_id: DagId,
    pub vertex_name: String,
    pub start_time: i64,
    pub finish_time: i64,
    pub state: TerminalState,
    pub diagnostics: String,
    pub num_tasks: i32,
    pub counters: Option<Counters>,
    pub stats: Option<VertexStats>,
}

impl VertexFinishedEvent {
    /// Elapsed time, clamped at the `i64` bounds
    pub fn time_taken(&self) -> i64 {
        self.finish_time.saturating_sub(self.start_time)
    }
}

impl HistoryRecord for VertexFinishedEvent {
    const EVENT_TYPE: EventType = EventType::VertexFinished;
    const RECOVERY_EVENT: bool = true;
    const HISTORY_EVENT: bool = true;

    type Record = VertexFinishedRecord;

    fn to_record(&self) -> VertexFinishedRecord {
        VertexFinishedRecord {
            vertex_id: Some(self.vertex_id.to_string()),
            dag_id: Some(self.dag_id.to_string()),
            vertex_name: self.vertex_name.clone(),
            start_time: self.start_time,
            finish_time: self.finish_time,
            state: Some(self.state as i32),
            diagnostics: self.diagnostics.clone(),
            num_tasks: self.num_tasks,
            counters: self.counters.clone(),
            stats: self.stats.clone(),
        }
    }

    fn from_record(record: VertexFinishedRecord) -> Result<Self, CodecError> {
        Ok(Self {
            vertex_id: required(record.vertex_id, "vertex_id")?.into(),
            dag_id: required(record.dag_id, "dag_id")?.into(),
            vertex_name: record.vertex_name,
            start_time: record.start_time,
            finish_time: record.finish_time,
            state: TerminalState::from_record(record.state)?,
            diagnostics: record.diagnostics,
            num_tasks: record.num_tasks,
            counters: record.counters,
            stats: record.stats,
        })
    }

    fn to_timeline_entity(&self) -> TimelineEntity {
        let mut entity = TimelineEntity::new(
            entity_id(&self.vertex_id),
            EntityType::Vertex,
            self.start_time,
        );
        entity.add_related_entity(EntityType::Dag.as_str(), entity_id(&self.dag_id));
        entity.add_primary_filter(EntityType::Dag.as_str(), entity_id(&self.dag_id));
        entity.add_other_info(keys::VERTEX_NAME, self.vertex_name.as_str());
        entity.add_other_info(keys::START_TIME, self.start_time);
        entity.add_other_info(keys::FINISH_TIME, self.finish_time);
        entity.add_other_info(keys::TIME_TAKEN, self.time_taken());
        entity.add_other_info(keys::STATUS, self.state.as_str());
        entity.add_other_info(keys::DIAGNOSTICS, self.diagnostics.as_str());
        entity.add_other_info(keys::NUM_TASKS, self.num_tasks);
        entity.add_other_info(
            keys::COUNTERS,
            Value::Object(project_counters(self.counters.as_ref())),
        );
        entity.add_other_info(
            keys::STATS,
            Value::Object(project_vertex_stats(self.stats.as_ref())),
        );
        entity.add_event(TimelineEvent::new(Self::EVENT_TYPE.name(), self.finish_time));
        entity
    }
}

impl fmt::Display for VertexFinishedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vertexName={}, vertexId={}, startTime={}, finishTime={}, timeTaken={}, status={}, diagnostics={}, numTasks={}",
            self.vertex_name,
            self.vertex_id,
            self.start_time,
            self.finish_time,
            self.time_taken(),
            self.state,
            self.diagnostics,
            self.num_tasks
        )
    }
}
