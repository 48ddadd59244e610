use trellis_core::models::{
    ExecutionGraph, Interaction, Mcp, Plan, Status, Step, Tool, ToolCategory, Workflow,
};
use trellis_core::{McpPath, ServicesBuilder, StateError, StepPath};

mod common;

use common::create_test_services;

fn linked_interaction() -> Interaction {
    Interaction {
        id: "interaction-1".to_string(),
        workflow: Some(Workflow {
            id: "workflow-1".to_string(),
            name: "incident-triage".to_string(),
            execution_graph: Some(ExecutionGraph {
                id: "graph-1".to_string(),
                ..ExecutionGraph::default()
            }),
            ..Workflow::default()
        }),
        ..Interaction::default()
    }
}

#[tokio::test]
async fn test_complete_interaction_workflow() {
    let (_temp_dir, _db_path, services) = create_test_services().await;

    let interaction = services
        .interactions
        .create(linked_interaction())
        .await
        .expect("Failed to create interaction");
    assert_eq!(interaction.id, "interaction-1");
    assert!(interaction.created_at.is_some());

    // Attach a plan
    let interaction = services
        .interactions
        .replace_plan(
            "interaction-1",
            "plan-1",
            Plan {
                id: "plan-1".to_string(),
                content: "inspect logs, then metrics".to_string(),
                ..Plan::default()
            },
        )
        .await
        .expect("Failed to set plan");
    assert_eq!(interaction.plan.as_ref().map(|p| p.id.as_str()), Some("plan-1"));

    // Register an MCP under the linked workflow
    let mcp_path = McpPath::new("interaction-1", "workflow-1");
    let mcp = services
        .mcps
        .create(
            &mcp_path,
            Mcp {
                id: "mcp-1".to_string(),
                name: "log-search".to_string(),
                ..Mcp::default()
            },
        )
        .await
        .expect("Failed to create mcp");

    let mcp = services
        .mcps
        .add_tool(
            &mcp_path,
            &mcp.id,
            Tool {
                name: "grep_logs".to_string(),
                description: "Search service logs".to_string(),
                category: ToolCategory::Logs,
                inputs: Default::default(),
                outputs: Default::default(),
            },
        )
        .await
        .expect("Failed to add tool");
    assert_eq!(mcp.tools.len(), 1);

    // Run a step through its lifecycle
    let step_path = StepPath::new("interaction-1", "workflow-1", "graph-1");
    let step = services
        .steps
        .create(
            &step_path,
            Step {
                id: "step-1".to_string(),
                name: "fetch-logs".to_string(),
                ..Step::default()
            },
        )
        .await
        .expect("Failed to create step");
    assert_eq!(step.status, Status::Pending);

    services
        .steps
        .update_status(&step_path, "step-1", Status::Running)
        .await
        .expect("Failed to start step");
    let step = services
        .steps
        .update_status(&step_path, "step-1", Status::Success)
        .await
        .expect("Failed to finish step");
    assert_eq!(step.status, Status::Success);
    assert!(step.finished_at.is_some());

    // The interaction aggregate reflects everything that happened
    let interaction = services
        .interactions
        .get("interaction-1")
        .await
        .expect("Failed to get interaction");
    let workflow = interaction.workflow.as_ref().expect("Workflow missing");
    assert_eq!(workflow.available_mcp_refs, vec!["mcp-1".to_string()]);
    let graph = workflow.execution_graph.as_ref().expect("Graph missing");
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].step_id, "step-1");
    assert_eq!(graph.nodes[0].status, Status::Success);
}

#[tokio::test]
async fn test_records_persist_across_rebuilds() {
    let (_temp_dir, db_path, services) = create_test_services().await;

    services
        .interactions
        .create(linked_interaction())
        .await
        .expect("Failed to create interaction");
    drop(services);

    let services = ServicesBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to rebuild services");

    let interaction = services
        .interactions
        .get("interaction-1")
        .await
        .expect("Interaction should survive a rebuild");
    assert_eq!(interaction.workflow_id(), Some("workflow-1"));
}

#[tokio::test]
async fn test_step_create_rejected_for_wrong_ancestry() {
    let (_temp_dir, _db_path, services) = create_test_services().await;

    services
        .interactions
        .create(linked_interaction())
        .await
        .expect("Failed to create interaction");

    let wrong_path = StepPath::new("interaction-1", "workflow-1", "graph-9");
    let err = services
        .steps
        .create(
            &wrong_path,
            Step {
                id: "step-1".to_string(),
                ..Step::default()
            },
        )
        .await
        .expect_err("Mismatched ancestry must be rejected");
    assert!(matches!(err, StateError::LinkageMismatch { .. }));

    // Neither record was written
    let step_path = StepPath::new("interaction-1", "workflow-1", "graph-1");
    let err = services
        .steps
        .get(&step_path, "step-1")
        .await
        .expect_err("Step must not exist");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_step_create_rejected_when_interaction_has_no_workflow() {
    let (_temp_dir, _db_path, services) = create_test_services().await;

    services
        .interactions
        .create(Interaction {
            id: "bare-1".to_string(),
            ..Interaction::default()
        })
        .await
        .expect("Failed to create interaction");

    // An interaction with no workflow attached never matches, not even a
    // claimed ancestry of empty ids
    let path = StepPath::new("bare-1", "", "");
    let err = services
        .steps
        .create(
            &path,
            Step {
                id: "sx".to_string(),
                ..Step::default()
            },
        )
        .await
        .expect_err("Empty claimed ancestry must be rejected");
    assert!(matches!(err, StateError::LinkageMismatch { .. }));

    let err = services
        .steps
        .get(&path, "sx")
        .await
        .expect_err("Step must not have been written");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_missing_interaction_is_not_found() {
    let (_temp_dir, _db_path, services) = create_test_services().await;

    let err = services
        .interactions
        .get("no-such-interaction")
        .await
        .expect_err("Lookup must fail");
    assert!(err.is_not_found());
}
