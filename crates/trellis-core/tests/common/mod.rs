use std::path::PathBuf;

use tempfile::TempDir;
use trellis_core::{Services, ServicesBuilder};

/// Helper function to create a test service set over a temporary database
pub async fn create_test_services() -> (TempDir, PathBuf, Services) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test_state.db");
    let services = ServicesBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build services");
    (temp_dir, db_path, services)
}
