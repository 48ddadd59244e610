//! Trellis CLI Application
//!
//! Command-line interface for the Trellis agent-state store.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use trellis_core::ServicesBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        command,
    } = Args::parse();

    let services = ServicesBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize state services")?;

    info!("Trellis started");

    let cli = Cli::new(services);
    match command {
        Commands::Interaction { command } => cli.handle_interaction_command(command).await,
        Commands::Mcp { command } => cli.handle_mcp_command(command).await,
        Commands::Step { command } => cli.handle_step_command(command).await,
    }
}
