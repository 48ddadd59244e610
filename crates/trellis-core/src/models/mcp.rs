//! Model-capability providers and the tools they expose.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ToolCategory;

/// An executable capability provided by an MCP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,

    pub description: String,

    pub category: ToolCategory,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub inputs: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub outputs: HashMap<String, String>,
}

/// A model-capability provider (e.g. GitHub, FileSystem, Terminal).
///
/// Stored under its own key; workflows reference it by id string only, never
/// by embedding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Mcp {
    pub id: String,

    pub name: String,

    pub description: String,

    #[serde(default)]
    pub tools: Vec<Tool>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Reference to one tool of one MCP, as made available to a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct McpToolRef {
    pub mcp_id: String,
    pub tool_name: String,
    pub category: ToolCategory,
}
