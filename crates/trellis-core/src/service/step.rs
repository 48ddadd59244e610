//! Operations on steps and their mirrored execution-graph nodes.

use jiff::Timestamp;
use log::warn;

use super::{ensure_id, run_blocking};
use crate::error::Result;
use crate::models::{Status, Step};
use crate::params::StepPath;
use crate::repo::{InteractionRepo, StepRepo};
use crate::{gate, mirror};

/// Service for step records.
///
/// Step creation and status updates are two-record sequences: the step is
/// persisted first, then the parent interaction's mirrored node. On partial
/// failure the mirror is stale but never ahead of the step record.
#[derive(Debug, Clone)]
pub struct StepService {
    steps: StepRepo,
    interactions: InteractionRepo,
}

impl StepService {
    pub fn new(steps: StepRepo, interactions: InteractionRepo) -> Self {
        Self { steps, interactions }
    }

    /// Retrieves a step by its scoped path and id.
    pub async fn get(&self, path: &StepPath, step_id: &str) -> Result<Step> {
        let repo = self.steps.clone();
        let path = path.clone();
        let step_id = step_id.to_string();
        run_blocking(move || {
            repo.get(
                &path.interaction_id,
                &path.workflow_id,
                &path.execution_id,
                &step_id,
            )
        })
        .await
    }

    /// Creates a step and appends its summary node to the parent
    /// interaction's execution graph.
    ///
    /// The claimed workflow/execution-graph ancestry must match the stored
    /// interaction; on mismatch neither record is written. New steps always
    /// start out pending regardless of the payload's status.
    pub async fn create(&self, path: &StepPath, mut step: Step) -> Result<Step> {
        ensure_id(&mut step.id);
        step.status = Status::Pending;

        let steps = self.steps.clone();
        let interactions = self.interactions.clone();
        let path = path.clone();
        run_blocking(move || {
            let mut interaction = interactions.get(&path.interaction_id)?;
            gate::ensure_linkage(&interaction, &path.workflow_id, &path.execution_id)?;

            steps.save(&path.interaction_id, &path.workflow_id, &path.execution_id, &step)?;

            let graph =
                gate::linked_graph_mut(&mut interaction, &path.workflow_id, &path.execution_id)?;
            mirror::append_node(graph, &step);
            interactions.save(&interaction)?;
            Ok(step)
        })
        .await
    }

    /// Replaces a step record wholesale. The path id must match the payload
    /// id. The mirrored node is not touched; only status updates flow into
    /// the graph.
    pub async fn update(&self, path: &StepPath, step_id: &str, step: Step) -> Result<Step> {
        gate::ensure_identity("step id", step_id, &step.id)?;

        let repo = self.steps.clone();
        let path = path.clone();
        run_blocking(move || {
            repo.save(&path.interaction_id, &path.workflow_id, &path.execution_id, &step)?;
            Ok(step)
        })
        .await
    }

    /// Updates a step's status and synchronizes the mirrored node.
    ///
    /// Sequence: validate linkage against the stored interaction, load the
    /// step, stamp `finished_at` when the new status is terminal, persist the
    /// step, then update the first matching node in the graph and persist the
    /// interaction. A step with no mirrored node still gets its record
    /// updated; the missing mirror is logged.
    pub async fn update_status(
        &self,
        path: &StepPath,
        step_id: &str,
        status: Status,
    ) -> Result<Step> {
        let steps = self.steps.clone();
        let interactions = self.interactions.clone();
        let path = path.clone();
        let step_id = step_id.to_string();
        run_blocking(move || {
            let mut interaction = interactions.get(&path.interaction_id)?;
            gate::ensure_linkage(&interaction, &path.workflow_id, &path.execution_id)?;

            let mut step = steps.get(
                &path.interaction_id,
                &path.workflow_id,
                &path.execution_id,
                &step_id,
            )?;
            if status.is_terminal() {
                step.finished_at = Some(Timestamp::now());
            }
            step.status = status;
            steps.save(&path.interaction_id, &path.workflow_id, &path.execution_id, &step)?;

            let graph =
                gate::linked_graph_mut(&mut interaction, &path.workflow_id, &path.execution_id)?;
            if !mirror::sync_node_status(graph, &step.id, step.status) {
                warn!(
                    "Step {} has no mirrored node in execution graph {}; mirror left stale",
                    step.id, path.execution_id
                );
            }
            interactions.save(&interaction)?;
            Ok(step)
        })
        .await
    }

    /// Deletes a step record. The mirrored node is not removed; readers must
    /// tolerate nodes whose step record is gone.
    pub async fn delete(&self, path: &StepPath, step_id: &str) -> Result<()> {
        let repo = self.steps.clone();
        let path = path.clone();
        let step_id = step_id.to_string();
        run_blocking(move || {
            repo.delete(
                &path.interaction_id,
                &path.workflow_id,
                &path.execution_id,
                &step_id,
            )
        })
        .await
    }
}
