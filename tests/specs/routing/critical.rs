//! Critical routing specs
//!
//! Recovery delivery failures reach the caller; timeline failures never do.

use crate::prelude::*;

#[test]
fn dag_lifecycle_lands_in_both_logs() {
    let logs = LogDir::new();
    let router = HistoryEventRouter::open(&logs.config(true, true)).unwrap();
    router.start().unwrap();

    router.route_critical(&submitted()).unwrap();
    router.route(&launched());
    router.route_critical(&commit_started()).unwrap();
    router.route_critical(&finished()).unwrap();
    router.stop().unwrap();

    // Container launches are history-only; commit start is recovery-only
    assert_eq!(logs.recovered(), vec![submitted(), commit_started(), finished()]);
    assert_eq!(
        logs.timeline_ids(),
        vec!["tez_dag_1_1", "tez_container_1", "tez_dag_1_1"]
    );
}

#[test]
fn recovery_only_config_writes_no_timeline() {
    let logs = LogDir::new();
    let router = HistoryEventRouter::open(&logs.config(true, false)).unwrap();

    router.route_critical(&commit_started()).unwrap();

    assert_eq!(logs.recovered(), vec![commit_started()]);
    assert!(!logs.timeline_log().exists());
}

#[test]
fn recovery_failure_is_returned_and_timeline_still_delivered() {
    let recovery = FakeSink::failing("disk full");
    let timeline = FakeSink::new();
    let router = HistoryEventRouter::new(
        &HistoryConfig {
            recovery_enabled: true,
            timeline_enabled: true,
            ..HistoryConfig::default()
        },
        Sinks::none()
            .with_recovery(recovery.clone())
            .with_timeline(timeline.clone()),
    )
    .unwrap();

    let err = router.route_critical(&submitted()).unwrap_err();

    assert!(matches!(
        err,
        RouterError::Recovery {
            event_type: EventType::DagSubmitted,
            ..
        }
    ));
    assert_eq!(timeline.handled(), vec![submitted()]);
}

#[test]
fn timeline_outage_does_not_block_recovery() {
    let logs = LogDir::new();
    let timeline = FakeSink::failing("timeline offline");
    let router = HistoryEventRouter::new(
        &logs.config(true, true),
        Sinks::none()
            .with_recovery(RecoveryLog::open(&logs.recovery_log()).unwrap())
            .with_timeline(timeline.clone()),
    )
    .unwrap();

    router.route_critical(&finished()).unwrap();

    assert_eq!(logs.recovered(), vec![finished()]);
    assert_eq!(timeline.handled().len(), 1);
}
