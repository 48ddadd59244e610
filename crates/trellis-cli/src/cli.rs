//! Command handlers bridging parsed arguments to the core services.

use std::io::Read;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use trellis_core::{
    models::{ExecutionGraph, Interaction, Mcp, Plan, Status, Step, Tool, Workflow},
    McpPath, Services, StepPath,
};

use crate::args::{InteractionCommands, McpCommands, StepCommands};

/// CLI command dispatcher holding the wired services.
pub struct Cli {
    services: Services,
}

impl Cli {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub async fn handle_interaction_command(&self, command: InteractionCommands) -> Result<()> {
        match command {
            InteractionCommands::Create { json } => {
                let interaction: Interaction = read_payload(json)?;
                let created = self.services.interactions.create(interaction).await?;
                print_record(&created)
            }
            InteractionCommands::Get { id } => {
                let interaction = self.services.interactions.get(&id).await?;
                print_record(&interaction)
            }
            InteractionCommands::Replace { id, json } => {
                let interaction: Interaction = read_payload(json)?;
                let replaced = self.services.interactions.replace(&id, interaction).await?;
                print_record(&replaced)
            }
            InteractionCommands::Delete { id } => {
                self.services.interactions.delete(&id).await?;
                println!("Deleted interaction {id}");
                Ok(())
            }
            InteractionCommands::SetPlan { id, plan_id, json } => {
                let plan: Plan = read_payload(json)?;
                let interaction = self
                    .services
                    .interactions
                    .replace_plan(&id, &plan_id, plan)
                    .await?;
                print_record(&interaction)
            }
            InteractionCommands::SetWorkflow {
                id,
                workflow_id,
                json,
            } => {
                let workflow: Workflow = read_payload(json)?;
                let interaction = self
                    .services
                    .interactions
                    .replace_workflow(&id, &workflow_id, workflow)
                    .await?;
                print_record(&interaction)
            }
            InteractionCommands::SetGraph {
                id,
                workflow_id,
                graph_id,
                json,
            } => {
                let graph: ExecutionGraph = read_payload(json)?;
                let interaction = self
                    .services
                    .interactions
                    .replace_execution_graph(&id, &workflow_id, &graph_id, graph)
                    .await?;
                print_record(&interaction)
            }
        }
    }

    pub async fn handle_mcp_command(&self, command: McpCommands) -> Result<()> {
        match command {
            McpCommands::Get {
                interaction_id,
                workflow_id,
                id,
            } => {
                let path = McpPath::new(interaction_id, workflow_id);
                let mcp = self.services.mcps.get(&path, &id).await?;
                print_record(&mcp)
            }
            McpCommands::Create {
                interaction_id,
                workflow_id,
                json,
            } => {
                let mcp: Mcp = read_payload(json)?;
                let path = McpPath::new(interaction_id, workflow_id);
                let created = self.services.mcps.create(&path, mcp).await?;
                print_record(&created)
            }
            McpCommands::Update {
                interaction_id,
                workflow_id,
                id,
                json,
            } => {
                let mcp: Mcp = read_payload(json)?;
                let path = McpPath::new(interaction_id, workflow_id);
                let updated = self.services.mcps.update(&path, &id, mcp).await?;
                print_record(&updated)
            }
            McpCommands::AddTool {
                interaction_id,
                workflow_id,
                id,
                json,
            } => {
                let tool: Tool = read_payload(json)?;
                let path = McpPath::new(interaction_id, workflow_id);
                let mcp = self.services.mcps.add_tool(&path, &id, tool).await?;
                print_record(&mcp)
            }
            McpCommands::Delete {
                interaction_id,
                workflow_id,
                id,
            } => {
                let path = McpPath::new(interaction_id, workflow_id);
                self.services.mcps.delete(&path, &id).await?;
                println!("Deleted mcp {id}");
                Ok(())
            }
        }
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Get {
                interaction_id,
                workflow_id,
                execution_id,
                id,
            } => {
                let path = StepPath::new(interaction_id, workflow_id, execution_id);
                let step = self.services.steps.get(&path, &id).await?;
                print_record(&step)
            }
            StepCommands::Create {
                interaction_id,
                workflow_id,
                execution_id,
                json,
            } => {
                let step: Step = read_payload(json)?;
                let path = StepPath::new(interaction_id, workflow_id, execution_id);
                let created = self.services.steps.create(&path, step).await?;
                print_record(&created)
            }
            StepCommands::Update {
                interaction_id,
                workflow_id,
                execution_id,
                id,
                json,
            } => {
                let step: Step = read_payload(json)?;
                let path = StepPath::new(interaction_id, workflow_id, execution_id);
                let updated = self.services.steps.update(&path, &id, step).await?;
                print_record(&updated)
            }
            StepCommands::Status {
                interaction_id,
                workflow_id,
                execution_id,
                id,
                status,
            } => {
                let status: Status = status.parse().map_err(anyhow::Error::msg)?;
                let path = StepPath::new(interaction_id, workflow_id, execution_id);
                let step = self.services.steps.update_status(&path, &id, status).await?;
                print_record(&step)
            }
            StepCommands::Delete {
                interaction_id,
                workflow_id,
                execution_id,
                id,
            } => {
                let path = StepPath::new(interaction_id, workflow_id, execution_id);
                self.services.steps.delete(&path, &id).await?;
                println!("Deleted step {id}");
                Ok(())
            }
        }
    }
}

/// Parses a JSON payload from the argument, falling back to stdin.
fn read_payload<T: DeserializeOwned>(json: Option<String>) -> Result<T> {
    let raw = match json {
        Some(raw) => raw,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read payload from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&raw).context("Failed to parse JSON payload")
}

fn print_record<T: Serialize>(record: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(record).context("Failed to render record as JSON")?;
    println!("{rendered}");
    Ok(())
}
