//! Container launch timeline specs

use crate::prelude::*;
use dagh_core::HistoryRecord;

#[test]
fn container_launch_round_trips_and_projects() {
    let event = ContainerLaunchedEvent::new(
        ContainerId::from("container_1"),
        1000,
        ApplicationAttemptId::from("appattempt_1"),
    );

    let mut buf = Vec::new();
    event.encode(&mut buf).unwrap();
    let decoded = ContainerLaunchedEvent::decode(&mut buf.as_slice()).unwrap();
    assert_eq!(decoded, event);

    let entity = decoded.to_timeline_entity();
    assert_eq!(entity.entity_id, "tez_container_1");
    assert_eq!(entity.start_time, 1000);
    assert!(entity
        .related_entities
        .values()
        .any(|ids| ids.contains("tez_appattempt_1")));
    assert_eq!(entity.events.len(), 1);
    assert_eq!(entity.events[0].event_type, "CONTAINER_LAUNCHED");
    assert_eq!(entity.events[0].timestamp, 1000);
}

#[test]
fn container_launch_is_written_to_timeline_log() {
    let logs = LogDir::new();
    let router = HistoryEventRouter::open(&logs.config(false, true)).unwrap();

    router.route_critical(&launched()).unwrap();

    let entities = TimelineLog::read_entities(&logs.timeline_log()).unwrap();
    assert_eq!(entities, vec![launched().history_event().to_timeline_entity()]);
}
