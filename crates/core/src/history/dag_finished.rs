// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DAG completion event

use super::records::DagFinishedRecord;
use super::{EventType, HistoryRecord, TerminalState};
use crate::codec::{required, CodecError};
use crate::dag::Counters;
use crate::id::DagId;
use crate::projection::project_counters;
use crate::timeline::{entity_id, keys, EntityType, TimelineEntity, TimelineEvent};
use serde_json::Value;
use std::fmt;

/// A DAG reached a terminal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagFinishedEvent {
    pub dag_id: DagId,
    pub dag_name: String,
    pub user: String,
    pub start_time: i64,
    pub finish_time: i64,
    pub state: TerminalState,
    pub diagnostics: String,
    pub counters: Option<Counters>,
}

impl DagFinishedEvent {
    /// Elapsed time, clamped at the `i64` bounds
    pub fn time_taken(&self) -> i64 {
        self.finish_time.saturating_sub(self.start_time)
    }
}

impl HistoryRecord for DagFinishedEvent {
    const EVENT_TYPE: EventType = EventType::DagFinished;
    const RECOVERY_EVENT: bool = true;
    const HISTORY_EVENT: bool = true;

    type Record = DagFinishedRecord;

    fn to_record(&self) -> DagFinishedRecord {
        DagFinishedRecord {
            dag_id: Some(self.dag_id.to_string()),
            dag_name: self.dag_name.clone(),
            user: self.user.clone(),
            start_time: self.start_time,
            finish_time: self.finish_time,
            state: Some(self.state as i32),
            diagnostics: self.diagnostics.clone(),
            counters: self.counters.clone(),
        }
    }

    fn from_record(record: DagFinishedRecord) -> Result<Self, CodecError> {
        Ok(Self {
            dag_id: required(record.dag_id, "dag_id")?.into(),
            dag_name: record.dag_name,
            user: record.user,
            start_time: record.start_time,
            finish_time: record.finish_time,
            state: TerminalState::from_record(record.state)?,
            diagnostics: record.diagnostics,
            counters: record.counters,
        })
    }

    fn to_timeline_entity(&self) -> TimelineEntity {
        let mut entity =
            TimelineEntity::new(entity_id(&self.dag_id), EntityType::Dag, self.start_time);
        entity.add_primary_filter(keys::DAG_NAME, self.dag_name.as_str());
        entity.add_primary_filter(keys::USER, self.user.as_str());
        entity.add_primary_filter(keys::STATUS, self.state.as_str());
        entity.add_other_info(keys::START_TIME, self.start_time);
        entity.add_other_info(keys::FINISH_TIME, self.finish_time);
        entity.add_other_info(keys::TIME_TAKEN, self.time_taken());
        entity.add_other_info(keys::STATUS, self.state.as_str());
        entity.add_other_info(keys::DIAGNOSTICS, self.diagnostics.as_str());
        entity.add_other_info(
            keys::COUNTERS,
            Value::Object(project_counters(self.counters.as_ref())),
        );
        entity.add_event(TimelineEvent::new(Self::EVENT_TYPE.name(), self.finish_time));
        entity
    }
}

impl fmt::Display for DagFinishedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dagId={}, startTime={}, finishTime={}, timeTaken={}, status={}, diagnostics={}",
            self.dag_id,
            self.start_time,
            self.finish_time,
            self.time_taken(),
            self.state,
            self.diagnostics
        )
    }
}
