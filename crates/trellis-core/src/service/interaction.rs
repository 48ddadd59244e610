//! Operations on the interaction aggregate and its nested replaceable
//! fields.

use jiff::Timestamp;
use log::warn;

use super::{ensure_id, run_blocking};
use crate::error::Result;
use crate::gate;
use crate::models::{ExecutionGraph, Interaction, Plan, Workflow};
use crate::repo::InteractionRepo;

/// Service for the interaction root aggregate.
///
/// The three nested replace operations (plan, workflow, execution graph)
/// share one shape: load the interaction, replace the nested field only when
/// its currently stored id matches the addressed id, persist. A non-matching
/// id skips the replacement and still returns the unchanged interaction; the
/// skip is logged at warn.
#[derive(Debug, Clone)]
pub struct InteractionService {
    interactions: InteractionRepo,
}

impl InteractionService {
    pub fn new(interactions: InteractionRepo) -> Self {
        Self { interactions }
    }

    /// Retrieves an interaction by id.
    pub async fn get(&self, interaction_id: &str) -> Result<Interaction> {
        let repo = self.interactions.clone();
        let interaction_id = interaction_id.to_string();
        run_blocking(move || repo.get(&interaction_id)).await
    }

    /// Creates an interaction, generating an id when the payload carries
    /// none and stamping the creation time.
    pub async fn create(&self, mut interaction: Interaction) -> Result<Interaction> {
        ensure_id(&mut interaction.id);
        interaction.created_at = Some(Timestamp::now());

        let repo = self.interactions.clone();
        run_blocking(move || {
            repo.save(&interaction)?;
            Ok(interaction)
        })
        .await
    }

    /// Replaces the whole interaction record. The path id must match the
    /// payload id.
    pub async fn replace(
        &self,
        interaction_id: &str,
        interaction: Interaction,
    ) -> Result<Interaction> {
        gate::ensure_identity("interaction id", interaction_id, &interaction.id)?;

        let repo = self.interactions.clone();
        run_blocking(move || {
            repo.save(&interaction)?;
            Ok(interaction)
        })
        .await
    }

    /// Deletes an interaction by id. Deleting an absent id is not an error.
    pub async fn delete(&self, interaction_id: &str) -> Result<()> {
        let repo = self.interactions.clone();
        let interaction_id = interaction_id.to_string();
        run_blocking(move || repo.delete(&interaction_id)).await
    }

    /// Replaces the interaction's plan when the stored plan id matches
    /// `plan_id`.
    pub async fn replace_plan(
        &self,
        interaction_id: &str,
        plan_id: &str,
        plan: Plan,
    ) -> Result<Interaction> {
        gate::ensure_identity("plan id", plan_id, &plan.id)?;

        let repo = self.interactions.clone();
        let interaction_id = interaction_id.to_string();
        run_blocking(move || {
            let mut interaction = repo.get(&interaction_id)?;
            if interaction.plan.as_ref().map(|p| p.id.as_str()) == Some(plan.id.as_str()) {
                interaction.plan = Some(plan);
            } else {
                warn!(
                    "Skipping plan replacement on interaction {interaction_id}: \
                     stored plan does not match id {}",
                    plan.id
                );
            }
            repo.save(&interaction)?;
            Ok(interaction)
        })
        .await
    }

    /// Replaces the interaction's workflow when the stored workflow id
    /// matches `workflow_id`.
    pub async fn replace_workflow(
        &self,
        interaction_id: &str,
        workflow_id: &str,
        workflow: Workflow,
    ) -> Result<Interaction> {
        gate::ensure_identity("workflow id", workflow_id, &workflow.id)?;

        let repo = self.interactions.clone();
        let interaction_id = interaction_id.to_string();
        run_blocking(move || {
            let mut interaction = repo.get(&interaction_id)?;
            if interaction.workflow_id() == Some(workflow.id.as_str()) {
                interaction.workflow = Some(workflow);
            } else {
                warn!(
                    "Skipping workflow replacement on interaction {interaction_id}: \
                     stored workflow does not match id {}",
                    workflow.id
                );
            }
            repo.save(&interaction)?;
            Ok(interaction)
        })
        .await
    }

    /// Replaces the workflow's execution graph when both the stored workflow
    /// and the stored graph ids match the addressed ones.
    pub async fn replace_execution_graph(
        &self,
        interaction_id: &str,
        workflow_id: &str,
        execution_graph_id: &str,
        graph: ExecutionGraph,
    ) -> Result<Interaction> {
        gate::ensure_identity("execution graph id", execution_graph_id, &graph.id)?;

        let repo = self.interactions.clone();
        let interaction_id = interaction_id.to_string();
        let workflow_id = workflow_id.to_string();
        run_blocking(move || {
            let mut interaction = repo.get(&interaction_id)?;
            let linked = interaction.workflow_id() == Some(workflow_id.as_str())
                && interaction.execution_graph_id() == Some(graph.id.as_str());
            if linked {
                if let Some(workflow) = interaction.workflow.as_mut() {
                    workflow.execution_graph = Some(graph);
                }
            } else {
                warn!(
                    "Skipping execution graph replacement on interaction {interaction_id}: \
                     stored linkage does not match workflow {workflow_id} / graph {}",
                    graph.id
                );
            }
            repo.save(&interaction)?;
            Ok(interaction)
        })
        .await
    }
}
