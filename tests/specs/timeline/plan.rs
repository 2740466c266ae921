//! Plan projection specs
//!
//! The submitted plan reaches the timeline as the versioned projection.

use crate::prelude::*;
use serde_json::json;

#[test]
fn submitted_plan_is_projected_into_other_info() {
    let logs = LogDir::new();
    let router = HistoryEventRouter::open(&logs.config(false, true)).unwrap();

    router.route_critical(&submitted()).unwrap();

    let entities = TimelineLog::read_entities(&logs.timeline_log()).unwrap();
    let dag_plan = &entities[0].other_info["dagPlan"];

    similar_asserts::assert_eq!(
        dag_plan,
        &json!({
            "dagName": "wordcount",
            "version": 1,
            "vertices": [
                {
                    "vertexName": "tokenizer",
                    "processorClass": "TokenProcessor",
                    "outEdgeIds": ["e1"],
                },
                {
                    "vertexName": "summer",
                    "processorClass": "SumProcessor",
                    "inEdgeIds": ["e1"],
                },
            ],
            "edges": [
                {
                    "edgeId": "e1",
                    "inputVertexName": "tokenizer",
                    "outputVertexName": "summer",
                    "dataMovementType": "SCATTER_GATHER",
                    "dataSourceType": "PERSISTED",
                    "schedulingType": "SEQUENTIAL",
                    "edgeSourceClass": "OrderedOutput",
                    "edgeDestinationClass": "ShuffledInput",
                },
            ],
        })
    );
}

#[test]
fn plan_without_groups_has_no_vertex_groups_key() {
    let projection = dagh_core::project_plan_versioned(&plan());

    assert!(!projection.contains_key("vertexGroups"));
    let keys: Vec<&str> = projection.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["dagName", "version", "vertices", "edges"]);
}

#[test]
fn finished_counters_reach_the_timeline() {
    let logs = LogDir::new();
    let router = HistoryEventRouter::open(&logs.config(false, true)).unwrap();

    router.route_critical(&finished()).unwrap();

    let entities = TimelineLog::read_entities(&logs.timeline_log()).unwrap();
    let counters = &entities[0].other_info["counters"];
    assert_eq!(
        counters["counterGroups"][0]["counters"][0]["counterValue"],
        json!(4096)
    );
}
