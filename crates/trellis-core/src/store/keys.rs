//! Key construction for the flat key-value layout.
//!
//! The aggregate hierarchy (interaction → workflow → execution graph → step)
//! is flattened into string keys. This module is the only place key strings
//! are assembled; repositories and services never hand-build them. Keys are
//! opaque to the store itself.

/// Key of an interaction record: `interaction:{iid}`.
pub fn interaction(interaction_id: &str) -> String {
    format!("interaction:{interaction_id}")
}

/// Key of an MCP record scoped under an interaction and workflow:
/// `interaction:{iid}:workflow:{wid}:mcp:{mid}`.
pub fn mcp(interaction_id: &str, workflow_id: &str, mcp_id: &str) -> String {
    format!("interaction:{interaction_id}:workflow:{workflow_id}:mcp:{mcp_id}")
}

/// Key of a step record scoped under an interaction, workflow and execution
/// graph: `interaction:{iid}:workflow:{wid}:execution:{eid}:step:{sid}`.
pub fn step(interaction_id: &str, workflow_id: &str, execution_id: &str, step_id: &str) -> String {
    format!(
        "interaction:{interaction_id}:workflow:{workflow_id}:execution:{execution_id}:step:{step_id}"
    )
}
