//! Tests for model serialization and the stored wire format.

use jiff::Timestamp;
use serde_json::json;

use super::*;

fn sample_step(status: Status) -> Step {
    Step {
        id: "step-1".to_string(),
        sequence: 1,
        name: "fetch-logs".to_string(),
        status,
        agent: Agent {
            id: "agent-1".to_string(),
            name: "executor".to_string(),
            role: "executor".to_string(),
            ..Agent::default()
        },
        started_at: Some(Timestamp::from_second(1_700_000_000).unwrap()),
        ..Step::default()
    }
}

fn sample_interaction() -> Interaction {
    Interaction {
        id: "interaction-1".to_string(),
        base_query: Some(Query {
            id: "query-1".to_string(),
            content: "why is checkout failing?".to_string(),
            ..Query::default()
        }),
        plan: Some(Plan {
            id: "plan-1".to_string(),
            content: "inspect logs, then metrics".to_string(),
            ..Plan::default()
        }),
        workflow: Some(Workflow {
            id: "workflow-1".to_string(),
            name: "incident-triage".to_string(),
            mode: "sequential".to_string(),
            execution_graph: Some(ExecutionGraph {
                id: "graph-1".to_string(),
                nodes: vec![ExecutionNode {
                    step_id: "step-1".to_string(),
                    name: "fetch-logs".to_string(),
                    status: Status::Pending,
                }],
                edges: vec![Edge {
                    from_step_id: "step-1".to_string(),
                    to_step_id: "step-2".to_string(),
                    edge_type: EdgeType::DependsOn,
                }],
                version: 0,
            }),
            ..Workflow::default()
        }),
        created_at: Some(Timestamp::from_second(1_700_000_000).unwrap()),
        ..Interaction::default()
    }
}

#[test]
fn status_wire_literals() {
    assert_eq!(serde_json::to_value(Status::Pending).unwrap(), json!("pending"));
    assert_eq!(serde_json::to_value(Status::Running).unwrap(), json!("running"));
    assert_eq!(serde_json::to_value(Status::Stop).unwrap(), json!("stop"));
    assert_eq!(serde_json::to_value(Status::Error).unwrap(), json!("error"));
    assert_eq!(serde_json::to_value(Status::Success).unwrap(), json!("success"));
}

#[test]
fn status_parses_from_literals() {
    assert_eq!("pending".parse::<Status>().unwrap(), Status::Pending);
    assert_eq!("SUCCESS".parse::<Status>().unwrap(), Status::Success);
    assert!("done".parse::<Status>().is_err());
}

#[test]
fn status_terminality() {
    assert!(!Status::Pending.is_terminal());
    assert!(!Status::Running.is_terminal());
    assert!(Status::Stop.is_terminal());
    assert!(Status::Error.is_terminal());
    assert!(Status::Success.is_terminal());
}

#[test]
fn edge_type_wire_literals() {
    assert_eq!(
        serde_json::to_value(EdgeType::DependsOn).unwrap(),
        json!("depends_on")
    );
    assert_eq!(serde_json::to_value(EdgeType::Triggers).unwrap(), json!("triggers"));
    assert_eq!(
        serde_json::to_value(EdgeType::DependsOnAll).unwrap(),
        json!("depends_on_all")
    );
    assert_eq!(
        serde_json::to_value(EdgeType::DependsOnAny).unwrap(),
        json!("depends_on_any")
    );
}

#[test]
fn edge_type_parses_from_literals() {
    assert_eq!("depends_on".parse::<EdgeType>().unwrap(), EdgeType::DependsOn);
    assert_eq!("TRIGGERS".parse::<EdgeType>().unwrap(), EdgeType::Triggers);
    assert!("follows".parse::<EdgeType>().is_err());
}

#[test]
fn edge_type_as_str_matches_wire_literals() {
    for edge_type in [
        EdgeType::DependsOn,
        EdgeType::Triggers,
        EdgeType::DependsOnAll,
        EdgeType::DependsOnAny,
    ] {
        assert_eq!(serde_json::to_value(edge_type).unwrap(), json!(edge_type.as_str()));
        assert_eq!(edge_type.as_str().parse::<EdgeType>().unwrap(), edge_type);
    }
}

#[test]
fn artifact_type_wire_literals() {
    assert_eq!(
        serde_json::to_value(ArtifactType::LogSnippet).unwrap(),
        json!("log_snippet")
    );
    assert_eq!(
        serde_json::to_value(ArtifactType::RootCause).unwrap(),
        json!("root_cause")
    );
}

#[test]
fn step_serializes_camel_case() {
    let step = sample_step(Status::Running);
    let value = serde_json::to_value(&step).unwrap();

    assert_eq!(value["id"], json!("step-1"));
    assert_eq!(value["status"], json!("running"));
    assert!(value.get("startedAt").is_some());
    // Unset terminal timestamp stays off the wire
    assert!(value.get("finishedAt").is_none());
    // Invocation trace serializes under its original field name
    assert!(value.get("tool_invocations").is_none());
}

#[test]
fn interaction_round_trips() {
    let interaction = sample_interaction();
    let raw = serde_json::to_string(&interaction).unwrap();
    let decoded: Interaction = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, interaction);
}

#[test]
fn interaction_linkage_accessors() {
    let interaction = sample_interaction();
    assert_eq!(interaction.workflow_id(), Some("workflow-1"));
    assert_eq!(interaction.execution_graph_id(), Some("graph-1"));

    let bare = Interaction::default();
    assert_eq!(bare.workflow_id(), None);
    assert_eq!(bare.execution_graph_id(), None);
}

#[test]
fn execution_graph_nested_wire_fields() {
    let interaction = sample_interaction();
    let value = serde_json::to_value(&interaction).unwrap();
    let node = &value["workflow"]["executionGraph"]["nodes"][0];
    assert_eq!(node["stepId"], json!("step-1"));
    assert_eq!(node["status"], json!("pending"));
    let edge = &value["workflow"]["executionGraph"]["edges"][0];
    assert_eq!(edge["fromStepId"], json!("step-1"));
    assert_eq!(edge["type"], json!("depends_on"));
}

#[test]
fn default_status_is_pending() {
    assert_eq!(Status::default(), Status::Pending);
    assert_eq!(Step::default().status, Status::Pending);
}
