//! Core library for the Trellis agent-state store.
//!
//! Trellis persists the nested runtime state of an AI-agent orchestration
//! session: an [`Interaction`](models::Interaction) aggregate with its plan,
//! workflow and execution graph, plus the independently keyed
//! [`Step`](models::Step) and [`Mcp`](models::Mcp) records available to it.
//! One logical aggregate is split across multiple records in a flat
//! key-value store, and this crate implements the protocol that keeps them
//! consistent:
//!
//! - [`store::keys`] — the key-addressing scheme flattening the aggregate
//!   hierarchy into store keys
//! - [`gate`] — identity and linkage validation that every nested mutation
//!   must pass before a write is accepted
//! - [`mirror`] — synchronization of the denormalized execution-graph node
//!   summaries with their authoritative step records
//!
//! The [`service`] layer composes these with one repository per entity kind.
//! Transport, process bootstrap and telemetry backends live outside this
//! crate.
//!
//! # Quick Start
//!
//! ```rust
//! use trellis_core::{
//!     models::{ExecutionGraph, Interaction, Workflow},
//!     params::StepPath,
//!     ServicesBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let services = ServicesBuilder::new()
//!     .with_database_path(Some("state.db"))
//!     .build()
//!     .await?;
//!
//! // Create an interaction linking a workflow and execution graph
//! let interaction = services
//!     .interactions
//!     .create(Interaction {
//!         workflow: Some(Workflow {
//!             id: "w1".to_string(),
//!             execution_graph: Some(ExecutionGraph {
//!                 id: "e1".to_string(),
//!                 ..ExecutionGraph::default()
//!             }),
//!             ..Workflow::default()
//!         }),
//!         ..Interaction::default()
//!     })
//!     .await?;
//!
//! // Steps created under the matching ancestry are mirrored into the graph
//! let path = StepPath::new(interaction.id.clone(), "w1", "e1");
//! let step = services.steps.create(&path, Default::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gate;
pub mod mirror;
pub mod models;
pub mod params;
pub mod repo;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{Result, StateError};
pub use models::{Interaction, Mcp, Status, Step};
pub use params::{McpPath, StepPath};
pub use service::{
    InteractionService, McpService, Services, ServicesBuilder, StepService,
};
pub use store::EntityStore;
