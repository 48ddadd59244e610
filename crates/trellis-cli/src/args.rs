use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the Trellis state store
///
/// Trellis persists the runtime state of AI-agent orchestration sessions:
/// interactions, their workflows and execution graphs, and the step and MCP
/// records linked underneath them. The CLI maps one subcommand onto each
/// operation of the state protocol; entity payloads are JSON documents read
/// from an argument or from stdin, and results are printed as JSON.
#[derive(Parser)]
#[command(version, about, name = "trellis")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/trellis/state.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Trellis CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage interaction aggregates
    #[command(alias = "i")]
    Interaction {
        #[command(subcommand)]
        command: InteractionCommands,
    },
    /// Manage MCPs scoped under a workflow
    #[command(alias = "m")]
    Mcp {
        #[command(subcommand)]
        command: McpCommands,
    },
    /// Manage steps scoped under an execution graph
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
}

#[derive(Subcommand)]
pub enum InteractionCommands {
    /// Create an interaction from a JSON payload (argument or stdin)
    Create {
        /// Interaction JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Print an interaction
    Get { id: String },
    /// Replace an interaction wholesale
    Replace {
        id: String,
        /// Interaction JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Delete an interaction
    Delete { id: String },
    /// Replace the interaction's plan (applied only when the stored plan
    /// matches PLAN_ID)
    SetPlan {
        id: String,
        plan_id: String,
        /// Plan JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Replace the interaction's workflow (applied only when the stored
    /// workflow matches WORKFLOW_ID)
    SetWorkflow {
        id: String,
        workflow_id: String,
        /// Workflow JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Replace the workflow's execution graph (applied only when both stored
    /// ids match)
    SetGraph {
        id: String,
        workflow_id: String,
        graph_id: String,
        /// ExecutionGraph JSON; read from stdin when omitted
        json: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum McpCommands {
    /// Print an MCP
    Get {
        interaction_id: String,
        workflow_id: String,
        id: String,
    },
    /// Create an MCP and record it in the workflow's available list
    Create {
        interaction_id: String,
        workflow_id: String,
        /// MCP JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Replace an MCP record
    Update {
        interaction_id: String,
        workflow_id: String,
        id: String,
        /// MCP JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Append a tool to an MCP's tool list
    AddTool {
        interaction_id: String,
        workflow_id: String,
        id: String,
        /// Tool JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Delete an MCP record
    Delete {
        interaction_id: String,
        workflow_id: String,
        id: String,
    },
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Print a step
    Get {
        interaction_id: String,
        workflow_id: String,
        execution_id: String,
        id: String,
    },
    /// Create a step and mirror it into the execution graph
    Create {
        interaction_id: String,
        workflow_id: String,
        execution_id: String,
        /// Step JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Replace a step record
    Update {
        interaction_id: String,
        workflow_id: String,
        execution_id: String,
        id: String,
        /// Step JSON; read from stdin when omitted
        json: Option<String>,
    },
    /// Update a step's status and its mirrored node
    Status {
        interaction_id: String,
        workflow_id: String,
        execution_id: String,
        id: String,
        /// One of: pending, running, stop, error, success
        status: String,
    },
    /// Delete a step record
    Delete {
        interaction_id: String,
        workflow_id: String,
        execution_id: String,
        id: String,
    },
}
