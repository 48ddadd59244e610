//! Error types for the state store library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all state store operations.
#[derive(Error, Debug)]
pub enum StateError {
    /// No record is stored under the requested key
    #[error("No record stored under key '{key}'")]
    NotFound { key: String },
    /// Stored bytes could not be deserialized into the expected entity
    #[error("Stored record under key '{key}' could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// Backend connection or query errors
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The identifier in the addressing path does not equal the identifier
    /// embedded in the payload
    #[error("Identity mismatch for {field}: path has '{path_id}', payload has '{payload_id}'")]
    IdentityMismatch {
        field: &'static str,
        path_id: String,
        payload_id: String,
    },
    /// The claimed workflow/execution-graph ancestry does not match what the
    /// stored interaction currently links to
    #[error(
        "Linkage mismatch: claimed workflow '{workflow_id}' and execution graph \
         '{execution_graph_id}' but interaction stores workflow '{stored_workflow_id}' \
         and execution graph '{stored_execution_graph_id}'"
    )]
    LinkageMismatch {
        workflow_id: String,
        execution_graph_id: String,
        stored_workflow_id: String,
        stored_execution_graph_id: String,
    },
    /// Serialization errors while encoding an entity for storage
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StateError {
    /// Returns true when the error indicates an absent record rather than a
    /// backend or protocol failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StateError::NotFound { .. })
    }
}

/// Extension trait for mapping backend errors with a message.
pub trait StoreResultExt<T> {
    /// Map rusqlite errors into [`StateError::Store`] with context.
    fn store_context(self, message: &str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn store_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StateError::Store {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Result type alias for state store operations
pub type Result<T> = std::result::Result<T, StateError>;
