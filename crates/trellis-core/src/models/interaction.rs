//! Interaction root aggregate and its embedded workflow structures.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{AgentRef, Context, EdgeType, Message, Query, Status};

/// Planning output attached to an interaction. The planning content itself is
/// opaque to the state store; only the id takes part in the replacement gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Plan {
    pub id: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Dependency between two steps and how they are to be run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from_step_id: String,

    pub to_step_id: String,

    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

/// Read-optimized mirror of a step's identity and status, embedded in the
/// execution graph. Derived state: the step record is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionNode {
    pub step_id: String,

    pub name: String,

    pub status: Status,
}

/// Runtime structure of a workflow's steps: node summaries plus dependency
/// edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionGraph {
    pub id: String,

    #[serde(default)]
    pub nodes: Vec<ExecutionNode>,

    #[serde(default)]
    pub edges: Vec<Edge>,

    /// Carried on the record; not compared or incremented by this library
    #[serde(default)]
    pub version: i64,
}

/// Full execution structure of an interaction and its participating agents.
///
/// Also known as the execution flow. Owns exactly one [`ExecutionGraph`];
/// its id is the authority a replacement must match before the workflow is
/// swapped out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Workflow {
    pub id: String,

    pub name: String,

    pub description: String,

    #[serde(default)]
    pub agent_refs: Vec<AgentRef>,

    /// Ids of MCPs available to this workflow. Back-references only; the MCP
    /// records live under their own keys.
    #[serde(default)]
    pub available_mcp_refs: Vec<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, String>,

    pub mode: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_graph: Option<ExecutionGraph>,
}

/// Root aggregate: one query-to-answer orchestration session.
///
/// Causal chain: base query and context produce a plan, the plan maps to a
/// workflow, the workflow's graph drives steps, steps produce messages and
/// artifacts which yield the answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Interaction {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_query: Option<Query>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_context: Option<Context>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Workflow>,

    /// Pointer to the step currently executing
    #[serde(default)]
    pub current_step: String,

    /// Ordered ids of the steps created under this interaction
    #[serde(default)]
    pub step_ids: Vec<String>,

    /// Trace of queries and answers exchanged during the session
    #[serde(default)]
    pub messages: Vec<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Interaction {
    /// Id of the currently linked workflow, if any.
    pub fn workflow_id(&self) -> Option<&str> {
        self.workflow.as_ref().map(|w| w.id.as_str())
    }

    /// Id of the currently linked execution graph, if any.
    pub fn execution_graph_id(&self) -> Option<&str> {
        self.workflow
            .as_ref()
            .and_then(|w| w.execution_graph.as_ref())
            .map(|g| g.id.as_str())
    }
}
