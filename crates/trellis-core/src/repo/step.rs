//! Repository for step records.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Step;
use crate::store::{keys, EntityStore};

/// Stores steps under
/// `interaction:{iid}:workflow:{wid}:execution:{eid}:step:{sid}`.
#[derive(Debug, Clone)]
pub struct StepRepo {
    db_path: PathBuf,
}

impl StepRepo {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    fn store(&self) -> Result<EntityStore<Step>> {
        EntityStore::open(&self.db_path)
    }

    pub fn get(
        &self,
        interaction_id: &str,
        workflow_id: &str,
        execution_id: &str,
        step_id: &str,
    ) -> Result<Step> {
        self.store()?
            .get(&keys::step(interaction_id, workflow_id, execution_id, step_id))
    }

    /// Full overwrite of the record keyed by the step's own id.
    pub fn save(
        &self,
        interaction_id: &str,
        workflow_id: &str,
        execution_id: &str,
        step: &Step,
    ) -> Result<()> {
        self.store()?.set(
            &keys::step(interaction_id, workflow_id, execution_id, &step.id),
            step,
        )
    }

    pub fn delete(
        &self,
        interaction_id: &str,
        workflow_id: &str,
        execution_id: &str,
        step_id: &str,
    ) -> Result<()> {
        self.store()?
            .delete(&keys::step(interaction_id, workflow_id, execution_id, step_id))
    }
}
