//! Agent descriptions and references.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A worker agent (planner, coder, executor, etc.).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Agent {
    pub id: String,

    pub name: String,

    pub description: String,

    /// Model backing the agent
    pub model: String,

    /// Role within the workflow: planner, coder, tester, etc.
    pub role: String,

    pub system_prompt: String,

    pub user_prompt: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
}

/// Back-reference to an agent participating in a workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentRef {
    pub id: String,
    pub role: String,
}
