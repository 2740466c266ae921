//! Recovery log specs
//!
//! A log written through the router can be read back after a crash, and a
//! torn tail does not hide the entries before it.

use crate::prelude::*;

#[test]
fn events_survive_reopen() {
    let logs = LogDir::new();
    {
        let router = HistoryEventRouter::open(&logs.config(true, false)).unwrap();
        router.route_critical(&submitted()).unwrap();
    }
    {
        let router = HistoryEventRouter::open(&logs.config(true, false)).unwrap();
        router.route_critical(&finished()).unwrap();
    }

    assert_eq!(logs.recovered(), vec![submitted(), finished()]);

    let report = RecoveryReader::open(&logs.recovery_log())
        .unwrap()
        .validate()
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.last_sequence, Some(2));
}

#[test]
fn torn_tail_is_dropped_on_reopen() {
    let logs = LogDir::new();
    {
        let router = HistoryEventRouter::open(&logs.config(true, false)).unwrap();
        router.route_critical(&submitted()).unwrap();
        router.route_critical(&commit_started()).unwrap();
    }

    let path = logs.recovery_log();
    let len = std::fs::metadata(&path).unwrap().len();
    std::fs::OpenOptions::new()
        .write(true)
        .open(&path)
        .unwrap()
        .set_len(len - 4)
        .unwrap();

    let report = RecoveryReader::open(&path).unwrap().validate().unwrap();
    assert_eq!(report.valid_entries, 1);
    assert!(!report.is_clean());

    let router = HistoryEventRouter::open(&logs.config(true, false)).unwrap();
    router.route_critical(&finished()).unwrap();

    assert_eq!(logs.recovered(), vec![submitted(), finished()]);
}

#[test]
fn plan_survives_the_recovery_log() {
    let logs = LogDir::new();
    let router = HistoryEventRouter::open(&logs.config(true, false)).unwrap();
    router.route_critical(&submitted()).unwrap();

    let recovered = logs.recovered();
    match recovered[0].history_event() {
        HistoryEvent::DagSubmitted(event) => {
            assert_eq!(event.plan, plan());
            assert_eq!(event.dag_name(), "wordcount");
        }
        other => panic!("unexpected event: {other}"),
    }
}
