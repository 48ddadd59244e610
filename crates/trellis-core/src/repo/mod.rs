//! Repositories: one thin [`EntityStore`](crate::store::EntityStore)
//! specialization per entity kind.
//!
//! Each repository holds the database path and acquires its own store handle
//! for the duration of one operation, releasing it on drop. Keys are built
//! exclusively through [`crate::store::keys`]. Repository methods are
//! blocking; the service layer runs them on blocking tasks.

mod interaction;
mod mcp;
mod step;

pub use interaction::InteractionRepo;
pub use mcp::McpRepo;
pub use step::StepRepo;
