// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DAG commit start marker

use super::records::DagCommitStartedRecord;
use super::{EventType, HistoryRecord};
use crate::codec::{required, CodecError};
use crate::id::DagId;
use crate::timeline::{entity_id, EntityType, TimelineEntity, TimelineEvent};
use std::fmt;

/// Output commit began for a DAG
///
/// Recovery uses this marker to avoid re-running a commit that may have
/// partially completed. It is not interesting to the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagCommitStartedEvent {
    pub dag_id: DagId,
    pub commit_start_time: i64,
}

impl HistoryRecord for DagCommitStartedEvent {
    const EVENT_TYPE: EventType = EventType::DagCommitStarted;
    const RECOVERY_EVENT: bool = true;
    const HISTORY_EVENT: bool = false;

    type Record = DagCommitStartedRecord;

    fn to_record(&self) -> DagCommitStartedRecord {
        DagCommitStartedRecord {
            dag_id: Some(self.dag_id.to_string()),
            commit_start_time: self.commit_start_time,
        }
    }

    fn from_record(record: DagCommitStartedRecord) -> Result<Self, CodecError> {
        Ok(Self {
            dag_id: required(record.dag_id, "dag_id")?.into(),
            commit_start_time: record.commit_start_time,
        })
    }

    fn to_timeline_entity(&self) -> TimelineEntity {
        let mut entity = TimelineEntity::new(
            entity_id(&self.dag_id),
            EntityType::Dag,
            self.commit_start_time,
        );
        entity.add_event(TimelineEvent::new(
            Self::EVENT_TYPE.name(),
            self.commit_start_time,
        ));
        entity
    }
}

impl fmt::Display for DagCommitStartedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dagId={}", self.dag_id)
    }
}
