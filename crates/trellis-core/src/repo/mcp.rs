//! Repository for MCP records.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Mcp;
use crate::store::{keys, EntityStore};

/// Stores capability providers under
/// `interaction:{iid}:workflow:{wid}:mcp:{mid}`.
#[derive(Debug, Clone)]
pub struct McpRepo {
    db_path: PathBuf,
}

impl McpRepo {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    fn store(&self) -> Result<EntityStore<Mcp>> {
        EntityStore::open(&self.db_path)
    }

    pub fn get(&self, interaction_id: &str, workflow_id: &str, mcp_id: &str) -> Result<Mcp> {
        self.store()?
            .get(&keys::mcp(interaction_id, workflow_id, mcp_id))
    }

    /// Full overwrite of the record keyed by the MCP's own id.
    pub fn save(&self, interaction_id: &str, workflow_id: &str, mcp: &Mcp) -> Result<()> {
        self.store()?
            .set(&keys::mcp(interaction_id, workflow_id, &mcp.id), mcp)
    }

    pub fn delete(&self, interaction_id: &str, workflow_id: &str, mcp_id: &str) -> Result<()> {
        self.store()?
            .delete(&keys::mcp(interaction_id, workflow_id, mcp_id))
    }
}
