//! Consistency gate for nested mutations.
//!
//! Two checks run before any write is accepted:
//!
//! - **Identity**: the id supplied in the operation's addressing path must
//!   equal the id embedded in the payload.
//! - **Linkage**: for step-level mutations, the workflow and execution-graph
//!   ids claimed by the caller must match what the stored interaction
//!   currently links to.
//!
//! The linkage check is re-executed on every mutating call; a prior pass is
//! never cached because the parent may have been replaced since the last
//! read.

use crate::error::{Result, StateError};
use crate::models::Interaction;

/// Requires the path-supplied id to equal the payload-embedded id.
///
/// `field` names the id being checked and appears in the error.
pub fn ensure_identity(field: &'static str, path_id: &str, payload_id: &str) -> Result<()> {
    if path_id != payload_id {
        return Err(StateError::IdentityMismatch {
            field,
            path_id: path_id.to_string(),
            payload_id: payload_id.to_string(),
        });
    }
    Ok(())
}

/// Requires the stored interaction to link exactly to the claimed workflow
/// and execution graph.
///
/// An interaction without a workflow or graph attached never matches.
pub fn ensure_linkage(
    interaction: &Interaction,
    workflow_id: &str,
    execution_graph_id: &str,
) -> Result<()> {
    if interaction.workflow_id() != Some(workflow_id)
        || interaction.execution_graph_id() != Some(execution_graph_id)
    {
        return Err(StateError::LinkageMismatch {
            workflow_id: workflow_id.to_string(),
            execution_graph_id: execution_graph_id.to_string(),
            stored_workflow_id: interaction.workflow_id().unwrap_or_default().to_string(),
            stored_execution_graph_id: interaction
                .execution_graph_id()
                .unwrap_or_default()
                .to_string(),
        });
    }
    Ok(())
}

/// Validates linkage and hands back the linked execution graph for mutation.
///
/// Combines [`ensure_linkage`] with the extraction services need right after
/// the check, so no caller has to unwrap an already-validated option.
pub fn linked_graph_mut<'a>(
    interaction: &'a mut Interaction,
    workflow_id: &str,
    execution_graph_id: &str,
) -> Result<&'a mut crate::models::ExecutionGraph> {
    ensure_linkage(interaction, workflow_id, execution_graph_id)?;
    interaction
        .workflow
        .as_mut()
        .and_then(|w| w.execution_graph.as_mut())
        .ok_or_else(|| StateError::LinkageMismatch {
            workflow_id: workflow_id.to_string(),
            execution_graph_id: execution_graph_id.to_string(),
            stored_workflow_id: String::new(),
            stored_execution_graph_id: String::new(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionGraph, Workflow};

    fn linked_interaction() -> Interaction {
        Interaction {
            id: "i1".to_string(),
            workflow: Some(Workflow {
                id: "w1".to_string(),
                execution_graph: Some(ExecutionGraph {
                    id: "e1".to_string(),
                    ..ExecutionGraph::default()
                }),
                ..Workflow::default()
            }),
            ..Interaction::default()
        }
    }

    #[test]
    fn identity_match_passes() {
        assert!(ensure_identity("step id", "s1", "s1").is_ok());
    }

    #[test]
    fn identity_mismatch_fails() {
        let err = ensure_identity("step id", "s1", "s2").unwrap_err();
        assert!(matches!(err, StateError::IdentityMismatch { .. }));
    }

    #[test]
    fn linkage_match_passes() {
        assert!(ensure_linkage(&linked_interaction(), "w1", "e1").is_ok());
    }

    #[test]
    fn linkage_workflow_mismatch_fails() {
        let err = ensure_linkage(&linked_interaction(), "w2", "e1").unwrap_err();
        assert!(matches!(err, StateError::LinkageMismatch { .. }));
    }

    #[test]
    fn linkage_graph_mismatch_fails() {
        let err = ensure_linkage(&linked_interaction(), "w1", "e2").unwrap_err();
        assert!(matches!(err, StateError::LinkageMismatch { .. }));
    }

    #[test]
    fn linked_graph_mut_returns_validated_graph() {
        let mut interaction = linked_interaction();
        let graph = linked_graph_mut(&mut interaction, "w1", "e1").unwrap();
        assert_eq!(graph.id, "e1");

        assert!(linked_graph_mut(&mut interaction, "w1", "other").is_err());
    }

    #[test]
    fn linkage_without_workflow_fails() {
        let bare = Interaction {
            id: "i1".to_string(),
            ..Interaction::default()
        };
        assert!(ensure_linkage(&bare, "w1", "e1").is_err());
    }

    #[test]
    fn linkage_without_workflow_rejects_empty_claimed_ids() {
        // Absent workflow/graph must never match, not even a claim of ""
        let bare = Interaction {
            id: "i1".to_string(),
            ..Interaction::default()
        };
        let err = ensure_linkage(&bare, "", "").unwrap_err();
        assert!(matches!(err, StateError::LinkageMismatch { .. }));
    }
}
