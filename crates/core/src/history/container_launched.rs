// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container launch event

use super::records::ContainerLaunchedRecord;
use super::{EventType, HistoryRecord};
use crate::codec::{required, CodecError};
use crate::id::{ApplicationAttemptId, ContainerId};
use crate::timeline::{entity_id, keys, EntityType, TimelineEntity, TimelineEvent};
use std::fmt;

/// A container was launched for the application attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLaunchedEvent {
    pub container_id: ContainerId,
    pub launch_time: i64,
    pub application_attempt_id: ApplicationAttemptId,
}

impl ContainerLaunchedEvent {
    pub fn new(
        container_id: ContainerId,
        launch_time: i64,
        application_attempt_id: ApplicationAttemptId,
    ) -> Self {
        Self {
            container_id,
            launch_time,
            application_attempt_id,
        }
    }
}

impl HistoryRecord for ContainerLaunchedEvent {
    const EVENT_TYPE: EventType = EventType::ContainerLaunched;
    const RECOVERY_EVENT: bool = false;
    const HISTORY_EVENT: bool = true;

    type Record = ContainerLaunchedRecord;

    fn to_record(&self) -> ContainerLaunchedRecord {
        ContainerLaunchedRecord {
            container_id: Some(self.container_id.to_string()),
            launch_time: self.launch_time,
            application_attempt_id: Some(self.application_attempt_id.to_string()),
        }
    }

    fn from_record(record: ContainerLaunchedRecord) -> Result<Self, CodecError> {
        Ok(Self {
            container_id: required(record.container_id, "container_id")?.into(),
            launch_time: record.launch_time,
            application_attempt_id: required(
                record.application_attempt_id,
                "application_attempt_id",
            )?
            .into(),
        })
    }

    fn to_timeline_entity(&self) -> TimelineEntity {
        let mut entity = TimelineEntity::new(
            entity_id(&self.container_id),
            EntityType::Container,
            self.launch_time,
        );
        entity.add_related_entity(
            EntityType::ApplicationAttempt.as_str(),
            entity_id(&self.application_attempt_id),
        );
        entity.add_related_entity(keys::CONTAINER_ID, self.container_id.to_string());
        entity.add_event(TimelineEvent::new(Self::EVENT_TYPE.name(), self.launch_time));
        entity
    }
}

impl fmt::Display for ContainerLaunchedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "containerId={}, launchTime={}",
            self.container_id, self.launch_time
        )
    }
}

#[cfg(test)]
#[path = "container_launched_tests.rs"]
mod tests;
