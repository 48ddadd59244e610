//! Step model and the records it carries.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Agent, Answer, ArtifactType, Context, McpToolRef, Query, Status, ToolCategory};

/// A tangible output produced during execution (code files, logs, documents).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: String,

    pub name: String,

    pub path: String,

    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,

    #[serde(default)]
    pub content: HashMap<String, String>,

    #[serde(rename = "createdByStepId")]
    pub created_by_step_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// One invocation of a specific MCP tool by an agent during a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct McpToolInvocation {
    pub id: String,

    pub mcp_id: String,

    pub tool_name: String,

    pub category: ToolCategory,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub input: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub output: HashMap<String, String>,

    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub agent_id: String,

    pub step_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Timestamp>,
}

/// A single executable unit of work, carried out by an agent.
///
/// Stored under its own key, independent of the interaction record, and
/// authoritative for its own status and timestamps. The execution graph holds
/// a derived [`ExecutionNode`](super::ExecutionNode) summary that mirror
/// synchronization keeps aligned with this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Step {
    pub id: String,

    /// Position of the step in the plan's ordering
    pub sequence: i64,

    pub name: String,

    /// Current status; `finished_at` is stamped when this becomes terminal
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Agent assigned to execute this step
    pub agent: Agent,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_tool_refs: Vec<McpToolRef>,

    pub input_context: Context,

    pub output_context: Context,

    pub query: Query,

    pub answer: Answer,

    /// Intermediate result context
    pub result: Context,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,

    /// Trace of tool invocations made while executing the step
    #[serde(rename = "actions", default, skip_serializing_if = "Vec::is_empty")]
    pub tool_invocations: Vec<McpToolInvocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Timestamp>,

    /// Step whose output feeds this step's input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_step_id: Option<String>,

    /// Carried on the record; not compared or incremented by this library
    #[serde(default)]
    pub version: i64,
}
