// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DAG submission event

use super::records::DagSubmittedRecord;
use super::{EventType, HistoryRecord};
use crate::codec::{required, CodecError};
use crate::dag::DagPlan;
use crate::id::{ApplicationAttemptId, DagId};
use crate::projection::project_plan_versioned;
use crate::timeline::{entity_id, keys, EntityType, TimelineEntity, TimelineEvent};
use serde_json::Value;
use std::fmt;

/// A DAG was accepted for execution
///
/// Carries the full plan so recovery can rebuild the DAG without the client.
#[derive(Debug, Clone, PartialEq)]
pub struct DagSubmittedEvent {
    pub dag_id: DagId,
    pub submit_time: i64,
    pub user: String,
    pub application_attempt_id: ApplicationAttemptId,
    pub plan: DagPlan,
}

impl DagSubmittedEvent {
    pub fn dag_name(&self) -> &str {
        &self.plan.name
    }
}

impl HistoryRecord for DagSubmittedEvent {
    const EVENT_TYPE: EventType = EventType::DagSubmitted;
    const RECOVERY_EVENT: bool = true;
    const HISTORY_EVENT: bool = true;

    type Record = DagSubmittedRecord;

    fn to_record(&self) -> DagSubmittedRecord {
        DagSubmittedRecord {
            dag_id: Some(self.dag_id.to_string()),
            submit_time: self.submit_time,
            user: self.user.clone(),
            application_attempt_id: Some(self.application_attempt_id.to_string()),
            dag_plan: Some(self.plan.clone()),
        }
    }

    fn from_record(record: DagSubmittedRecord) -> Result<Self, CodecError> {
        Ok(Self {
            dag_id: required(record.dag_id, "dag_id")?.into(),
            submit_time: record.submit_time,
            user: record.user,
            application_attempt_id: required(
                record.application_attempt_id,
                "application_attempt_id",
            )?
            .into(),
            plan: required(record.dag_plan, "dag_plan")?,
        })
    }

    fn to_timeline_entity(&self) -> TimelineEntity {
        let mut entity =
            TimelineEntity::new(entity_id(&self.dag_id), EntityType::Dag, self.submit_time);
        entity.add_related_entity(
            EntityType::ApplicationAttempt.as_str(),
            entity_id(&self.application_attempt_id),
        );
        entity.add_primary_filter(keys::DAG_NAME, self.dag_name());
        entity.add_primary_filter(keys::USER, self.user.as_str());
        entity.add_other_info(
            keys::DAG_PLAN,
            Value::Object(project_plan_versioned(&self.plan)),
        );
        entity.add_other_info(
            keys::APPLICATION_ATTEMPT_ID,
            self.application_attempt_id.to_string(),
        );
        entity.add_event(TimelineEvent::new(Self::EVENT_TYPE.name(), self.submit_time));
        entity
    }
}

impl fmt::Display for DagSubmittedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dagId={}, dagName={}, submitTime={}, user={}",
            self.dag_id,
            self.dag_name(),
            self.submit_time,
            self.user
        )
    }
}
