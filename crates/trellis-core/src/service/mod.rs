//! Aggregate services composing the consistency gate, repositories and
//! mirror synchronization into the operations exposed to callers.
//!
//! Services are async; each operation moves its repositories onto a blocking
//! task (store calls are blocking) and runs the full read-validate-write
//! sequence there. No locking or transaction spans the two-record sequences:
//! a mutation touching both a child record and the parent interaction is two
//! separate round trips, with the authoritative child always persisted first.

use tokio::task;

use crate::error::{Result, StateError};

mod builder;
mod interaction;
mod mcp;
mod step;


pub use builder::{Services, ServicesBuilder};
pub use interaction::InteractionService;
pub use mcp::McpService;
pub use step::StepService;

/// Runs a blocking store sequence on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| StateError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}

/// Fills an empty id with a freshly generated uuid-v4 string.
pub(crate) fn ensure_id(id: &mut String) {
    if id.is_empty() {
        *id = uuid::Uuid::new_v4().to_string();
    }
}
