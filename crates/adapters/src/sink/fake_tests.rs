// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dagh_core::{ContainerLaunchedEvent, DagCommitStartedEvent, DagId};

fn commit_event() -> DagHistoryEvent {
    DagHistoryEvent::for_dag(
        DagId::from("dag_1_1"),
        DagCommitStartedEvent {
            dag_id: DagId::from("dag_1_1"),
            commit_start_time: 10,
        },
    )
}

#[test]
fn fake_records_deliveries_in_order() {
    let sink = FakeSink::new();
    let launch = DagHistoryEvent::unscoped(ContainerLaunchedEvent::new(
        "container_1".into(),
        1,
        "appattempt_1".into(),
    ));

    sink.start().unwrap();
    sink.handle(&commit_event()).unwrap();
    sink.handle(&launch).unwrap();
    sink.stop().unwrap();

    assert_eq!(
        sink.calls(),
        vec![
            SinkCall::Start,
            SinkCall::Handle(commit_event()),
            SinkCall::Handle(launch),
            SinkCall::Stop,
        ]
    );
}

#[test]
fn failing_fake_still_records_attempt() {
    let sink = FakeSink::failing("disk full");

    let err = sink.handle(&commit_event()).unwrap_err();

    assert!(err.to_string().contains("disk full"));
    assert_eq!(sink.handled().len(), 1);
}

#[test]
fn failed_flag_is_shared_between_clones() {
    let sink = FakeSink::new();
    let handle = sink.clone();

    assert!(!sink.has_failed());
    handle.set_failed(true);
    assert!(sink.has_failed());
}
