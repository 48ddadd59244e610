//! Repository for interaction records.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Interaction;
use crate::store::{keys, EntityStore};

/// Stores interaction aggregates under `interaction:{iid}`.
#[derive(Debug, Clone)]
pub struct InteractionRepo {
    db_path: PathBuf,
}

impl InteractionRepo {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    fn store(&self) -> Result<EntityStore<Interaction>> {
        EntityStore::open(&self.db_path)
    }

    pub fn get(&self, interaction_id: &str) -> Result<Interaction> {
        self.store()?.get(&keys::interaction(interaction_id))
    }

    /// Full overwrite of the record keyed by the interaction's own id.
    pub fn save(&self, interaction: &Interaction) -> Result<()> {
        self.store()?
            .set(&keys::interaction(&interaction.id), interaction)
    }

    pub fn delete(&self, interaction_id: &str) -> Result<()> {
        self.store()?.delete(&keys::interaction(interaction_id))
    }
}
