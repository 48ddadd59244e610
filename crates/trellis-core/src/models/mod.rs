//! Data models for the agent-orchestration runtime state.
//!
//! This module contains the entity set persisted by the state store: the
//! [`Interaction`] root aggregate with its embedded [`Plan`], [`Workflow`]
//! and [`ExecutionGraph`], plus the independently keyed [`Step`] and [`Mcp`]
//! records.
//!
//! Two kinds of coupling exist between these types and are deliberately weak:
//!
//! - [`ExecutionNode`] entries inside an [`ExecutionGraph`] are denormalized
//!   summaries of [`Step`] records kept aligned by mirror synchronization,
//!   not a foreign-key-enforced join.
//! - [`Workflow::available_mcp_refs`] lists MCP ids only; deleting an MCP
//!   never rewrites the list.
//!
//! All entities serialize as camelCase JSON documents so the stored records
//! are interchangeable with the wire format of the wider orchestration
//! system.

mod agent;
mod interaction;
mod mcp;
mod message;
mod status;
mod step;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentRef};
pub use interaction::{Edge, ExecutionGraph, ExecutionNode, Interaction, Plan, Workflow};
pub use mcp::{Mcp, McpToolRef, Tool};
pub use message::{Answer, Context, Message, Query};
pub use status::{ArtifactType, EdgeType, Status, ToolCategory};
pub use step::{Artifact, McpToolInvocation, Step};
