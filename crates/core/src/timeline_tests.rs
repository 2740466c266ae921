// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn entity_id_is_prefixed() {
    assert_eq!(entity_id("dag_1_1"), "tez_dag_1_1");
}

#[test]
fn entity_serializes_with_service_field_names() {
    let mut entity = TimelineEntity::new("tez_container_1", EntityType::Container, 1000);
    entity.add_related_entity(EntityType::ApplicationAttempt.as_str(), "tez_appattempt_1");
    entity.add_event(TimelineEvent::new("CONTAINER_LAUNCHED", 1000));

    let value = serde_json::to_value(&entity).unwrap();
    assert_eq!(
        value,
        json!({
            "entity": "tez_container_1",
            "entitytype": "TEZ_CONTAINER_ID",
            "relatedentities": {"TEZ_APPLICATION_ATTEMPT": ["tez_appattempt_1"]},
            "starttime": 1000,
            "events": [{"eventtype": "CONTAINER_LAUNCHED", "timestamp": 1000}]
        })
    );
}

#[test]
fn related_entities_deduplicate() {
    let mut entity = TimelineEntity::new("tez_dag_1", EntityType::Dag, 0);
    entity.add_related_entity("TEZ_APPLICATION_ATTEMPT", "tez_a");
    entity.add_related_entity("TEZ_APPLICATION_ATTEMPT", "tez_a");

    assert_eq!(entity.related_entities["TEZ_APPLICATION_ATTEMPT"].len(), 1);
}

#[test]
fn entity_parses_back() {
    let mut entity = TimelineEntity::new("tez_dag_1", EntityType::Dag, 5);
    entity.add_primary_filter(keys::USER, "alice");
    entity.add_other_info(keys::STATUS, "SUCCEEDED");

    let line = serde_json::to_string(&entity).unwrap();
    let parsed: TimelineEntity = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed, entity);
}
