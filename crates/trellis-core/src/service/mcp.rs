//! Operations on capability providers scoped under a workflow.

use log::warn;

use super::{ensure_id, run_blocking};
use crate::error::Result;
use crate::gate;
use crate::models::{Mcp, Tool};
use crate::params::McpPath;
use crate::repo::{InteractionRepo, McpRepo};

/// Service for MCP records and their back-reference in the parent workflow.
#[derive(Debug, Clone)]
pub struct McpService {
    mcps: McpRepo,
    interactions: InteractionRepo,
}

impl McpService {
    pub fn new(mcps: McpRepo, interactions: InteractionRepo) -> Self {
        Self { mcps, interactions }
    }

    /// Retrieves an MCP by its scoped path and id.
    pub async fn get(&self, path: &McpPath, mcp_id: &str) -> Result<Mcp> {
        let repo = self.mcps.clone();
        let path = path.clone();
        let mcp_id = mcp_id.to_string();
        run_blocking(move || repo.get(&path.interaction_id, &path.workflow_id, &mcp_id)).await
    }

    /// Creates an MCP and appends its id to the parent workflow's
    /// `available_mcp_refs`.
    ///
    /// The MCP record is persisted first; when the stored interaction does
    /// not link the addressed workflow, the back-reference append is skipped
    /// and the MCP still exists under its own key.
    pub async fn create(&self, path: &McpPath, mut mcp: Mcp) -> Result<Mcp> {
        ensure_id(&mut mcp.id);

        let mcps = self.mcps.clone();
        let interactions = self.interactions.clone();
        let path = path.clone();
        run_blocking(move || {
            mcps.save(&path.interaction_id, &path.workflow_id, &mcp)?;

            let mut interaction = interactions.get(&path.interaction_id)?;
            if interaction.workflow_id() == Some(path.workflow_id.as_str()) {
                if let Some(workflow) = interaction.workflow.as_mut() {
                    workflow.available_mcp_refs.push(mcp.id.clone());
                }
                interactions.save(&interaction)?;
            } else {
                warn!(
                    "MCP {} created but interaction {} does not link workflow {}; \
                     back-reference not recorded",
                    mcp.id, path.interaction_id, path.workflow_id
                );
            }
            Ok(mcp)
        })
        .await
    }

    /// Replaces an MCP record. The path id must match the payload id.
    pub async fn update(&self, path: &McpPath, mcp_id: &str, mcp: Mcp) -> Result<Mcp> {
        gate::ensure_identity("mcp id", mcp_id, &mcp.id)?;

        let repo = self.mcps.clone();
        let path = path.clone();
        run_blocking(move || {
            repo.save(&path.interaction_id, &path.workflow_id, &mcp)?;
            Ok(mcp)
        })
        .await
    }

    /// Appends a tool to the MCP's tool list and re-persists the record.
    pub async fn add_tool(&self, path: &McpPath, mcp_id: &str, tool: Tool) -> Result<Mcp> {
        let repo = self.mcps.clone();
        let path = path.clone();
        let mcp_id = mcp_id.to_string();
        run_blocking(move || {
            let mut mcp = repo.get(&path.interaction_id, &path.workflow_id, &mcp_id)?;
            mcp.tools.push(tool);
            repo.save(&path.interaction_id, &path.workflow_id, &mcp)?;
            Ok(mcp)
        })
        .await
    }

    /// Deletes an MCP record. The workflow's back-reference list is left
    /// untouched; readers must tolerate dangling ids.
    pub async fn delete(&self, path: &McpPath, mcp_id: &str) -> Result<()> {
        let repo = self.mcps.clone();
        let path = path.clone();
        let mcp_id = mcp_id.to_string();
        run_blocking(move || repo.delete(&path.interaction_id, &path.workflow_id, &mcp_id)).await
    }
}
