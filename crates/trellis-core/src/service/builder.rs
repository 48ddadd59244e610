//! Builder for wiring the aggregate services over one database path.

use std::path::{Path, PathBuf};

use tokio::task;

use crate::error::{Result, StateError};
use crate::models::Interaction;
use crate::repo::{InteractionRepo, McpRepo, StepRepo};
use crate::service::{InteractionService, McpService, StepService};
use crate::store::EntityStore;

/// The wired service set sharing one backing database.
pub struct Services {
    pub interactions: InteractionService,
    pub mcps: McpService,
    pub steps: StepService,
}

/// Builder for creating and configuring [`Services`].
#[derive(Debug, Clone)]
pub struct ServicesBuilder {
    database_path: Option<PathBuf>,
}

impl ServicesBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/trellis/state.db` or `~/.local/share/trellis/state.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured services.
    ///
    /// Opens the store once to initialize the schema, so later per-operation
    /// acquisitions find it in place.
    pub async fn build(self) -> Result<Services> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StateError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _store = EntityStore::<Interaction>::open(&db_path_clone)?;
            Ok::<(), StateError>(())
        })
        .await
        .map_err(|e| StateError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let interaction_repo = InteractionRepo::new(&db_path);
        Ok(Services {
            interactions: InteractionService::new(interaction_repo.clone()),
            mcps: McpService::new(McpRepo::new(&db_path), interaction_repo.clone()),
            steps: StepService::new(StepRepo::new(&db_path), interaction_repo),
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trellis")
            .place_data_file("state.db")
            .map_err(|e| StateError::XdgDirectory(e.to_string()))
    }
}

impl Default for ServicesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
