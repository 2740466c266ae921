//! Shared fixtures for the behavioral specs

#![allow(dead_code)]

pub use dagh_adapters::{FakeSink, SinkCall};
pub use dagh_core::dag::{
    Counter, CounterGroup, Counters, DagPlan, DataMovementType, DataSourceType, EdgePlan,
    EntityDescriptor, PlanVertexGroupInfo, SchedulingType, VertexPlan,
};
pub use dagh_core::{
    ApplicationAttemptId, ContainerId, ContainerLaunchedEvent, DagCommitStartedEvent,
    DagFinishedEvent, DagHistoryEvent, DagId, DagSubmittedEvent, EventType, HistoryEvent,
    TerminalState,
};
pub use dagh_router::{HistoryConfig, HistoryEventRouter, RouterError, Sinks};
pub use dagh_storage::{RecoveryLog, RecoveryReader, TimelineLog};
pub use std::path::{Path, PathBuf};

/// A temporary directory holding a recovery log and a timeline log
pub struct LogDir {
    dir: tempfile::TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn recovery_log(&self) -> PathBuf {
        self.dir.path().join("recovery.log")
    }

    pub fn timeline_log(&self) -> PathBuf {
        self.dir.path().join("timeline.jsonl")
    }

    pub fn config(&self, recovery_enabled: bool, timeline_enabled: bool) -> HistoryConfig {
        HistoryConfig {
            recovery_enabled,
            timeline_enabled,
            recovery_log: Some(self.recovery_log()),
            timeline_log: Some(self.timeline_log()),
        }
    }

    /// Every event recorded in the recovery log
    pub fn recovered(&self) -> Vec<DagHistoryEvent> {
        RecoveryReader::open_or_empty(&self.recovery_log())
            .entries()
            .unwrap()
            .map(|e| e.unwrap().to_event().unwrap())
            .collect()
    }

    pub fn timeline_ids(&self) -> Vec<String> {
        TimelineLog::read_entities(&self.timeline_log())
            .unwrap()
            .into_iter()
            .map(|e| e.entity_id)
            .collect()
    }
}

pub fn dag_id() -> DagId {
    DagId::from("dag_1_1")
}

pub fn plan() -> DagPlan {
    DagPlan {
        name: "wordcount".to_string(),
        vertices: vec![
            VertexPlan {
                name: "tokenizer".to_string(),
                processor_descriptor: Some(EntityDescriptor::named("TokenProcessor")),
                out_edge_ids: vec!["e1".to_string()],
                ..Default::default()
            },
            VertexPlan {
                name: "summer".to_string(),
                processor_descriptor: Some(EntityDescriptor::named("SumProcessor")),
                in_edge_ids: vec!["e1".to_string()],
                ..Default::default()
            },
        ],
        edges: vec![EdgePlan {
            id: "e1".to_string(),
            input_vertex_name: "tokenizer".to_string(),
            output_vertex_name: "summer".to_string(),
            data_movement_type: DataMovementType::ScatterGather as i32,
            data_source_type: DataSourceType::Persisted as i32,
            scheduling_type: SchedulingType::Sequential as i32,
            edge_source: Some(EntityDescriptor::named("OrderedOutput")),
            edge_destination: Some(EntityDescriptor::named("ShuffledInput")),
        }],
        vertex_groups: Vec::new(),
    }
}

pub fn submitted() -> DagHistoryEvent {
    DagHistoryEvent::for_dag(
        dag_id(),
        DagSubmittedEvent {
            dag_id: dag_id(),
            submit_time: 100,
            user: "alice".to_string(),
            application_attempt_id: ApplicationAttemptId::from("appattempt_1"),
            plan: plan(),
        },
    )
}

pub fn commit_started() -> DagHistoryEvent {
    DagHistoryEvent::for_dag(
        dag_id(),
        DagCommitStartedEvent {
            dag_id: dag_id(),
            commit_start_time: 350,
        },
    )
}

pub fn finished() -> DagHistoryEvent {
    DagHistoryEvent::for_dag(
        dag_id(),
        DagFinishedEvent {
            dag_id: dag_id(),
            dag_name: "wordcount".to_string(),
            user: "alice".to_string(),
            start_time: 100,
            finish_time: 400,
            state: TerminalState::Succeeded,
            diagnostics: String::new(),
            counters: Some(Counters::default().with_group(
                CounterGroup::new("fs", "File System").with_counter(Counter::new(
                    "BYTES_READ",
                    "Bytes read",
                    4096,
                )),
            )),
        },
    )
}

pub fn launched() -> DagHistoryEvent {
    DagHistoryEvent::unscoped(ContainerLaunchedEvent::new(
        ContainerId::from("container_1"),
        1000,
        ApplicationAttemptId::from("appattempt_1"),
    ))
}
