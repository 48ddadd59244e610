//! Parameter structures shared across interfaces.
//!
//! These structures carry the addressing paths of nested operations without
//! framework-specific derives, so the CLI (and any future surface) can build
//! them from its own argument types. JSON schema derives are available behind
//! the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Addressing path of an MCP operation: the interaction and workflow the
/// provider is scoped under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct McpPath {
    /// Id of the owning interaction
    pub interaction_id: String,
    /// Id of the workflow the provider is available to
    pub workflow_id: String,
}

impl McpPath {
    pub fn new(interaction_id: impl Into<String>, workflow_id: impl Into<String>) -> Self {
        Self {
            interaction_id: interaction_id.into(),
            workflow_id: workflow_id.into(),
        }
    }
}

/// Addressing path of a step operation: interaction, workflow and execution
/// graph. Step-level mutations validate this claimed ancestry against the
/// stored interaction before writing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StepPath {
    /// Id of the owning interaction
    pub interaction_id: String,
    /// Id of the workflow the step belongs to
    pub workflow_id: String,
    /// Id of the execution graph the step is mirrored into
    pub execution_id: String,
}

impl StepPath {
    pub fn new(
        interaction_id: impl Into<String>,
        workflow_id: impl Into<String>,
        execution_id: impl Into<String>,
    ) -> Self {
        Self {
            interaction_id: interaction_id.into(),
            workflow_id: workflow_id.into(),
            execution_id: execution_id.into(),
        }
    }
}
