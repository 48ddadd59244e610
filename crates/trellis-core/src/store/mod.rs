//! Key-value persistence for runtime entities.
//!
//! [`EntityStore`] is a generic get/set/delete surface over a SQLite-backed
//! key-value table, storing one serialized entity per key. It provides no
//! transactions, compare-and-swap or locking; read-modify-write safety across
//! multiple records is the caller's responsibility.

use std::marker::PhantomData;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StateError, StoreResultExt};

pub mod keys;

/// Generic key-value store for one entity type.
///
/// The connection is acquired on open and released on drop, so the usual
/// lifecycle is open, perform one operation (or one read-modify-write
/// sequence), drop.
pub struct EntityStore<T> {
    connection: Connection,
    _entity: PhantomData<T>,
}

impl<T> EntityStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens the store at the given database path and ensures the schema
    /// exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).store_context("Failed to open store connection")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        connection
            .execute_batch(schema_sql)
            .store_context("Failed to initialize store schema")?;

        Ok(Self {
            connection,
            _entity: PhantomData,
        })
    }

    /// Reads the entity stored under `key`.
    ///
    /// Fails with [`StateError::NotFound`] when the key is absent and
    /// [`StateError::Decode`] when the stored bytes do not deserialize into
    /// the expected entity.
    pub fn get(&self, key: &str) -> Result<T> {
        let raw: Option<String> = self
            .connection
            .query_row(
                "SELECT value FROM entities WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .store_context("Failed to read entity")?;

        let raw = raw.ok_or_else(|| StateError::NotFound {
            key: key.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| StateError::Decode {
            key: key.to_string(),
            source: e,
        })
    }

    /// Writes `value` under `key`, fully overwriting any previous record.
    pub fn set(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.connection
            .execute(
                "INSERT INTO entities (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, raw],
            )
            .store_context("Failed to write entity")?;
        Ok(())
    }

    /// Removes the record under `key`. Deleting an absent key is not an
    /// error.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM entities WHERE key = ?1", params![key])
            .store_context("Failed to delete entity")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::{Interaction, Step};

    fn open_test_store<T: Serialize + DeserializeOwned>() -> (TempDir, EntityStore<T>) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store =
            EntityStore::open(temp_dir.path().join("state.db")).expect("Failed to open store");
        (temp_dir, store)
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_temp_dir, store) = open_test_store::<Interaction>();
        let interaction = Interaction {
            id: "i1".to_string(),
            summary: Some("triage session".to_string()),
            ..Interaction::default()
        };

        store.set(&keys::interaction("i1"), &interaction).unwrap();
        let loaded = store.get(&keys::interaction("i1")).unwrap();
        assert_eq!(loaded, interaction);
    }

    #[test]
    fn get_absent_key_is_not_found() {
        let (_temp_dir, store) = open_test_store::<Step>();
        let err = store.get(&keys::step("i1", "w1", "e1", "s1")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn set_overwrites_fully() {
        let (_temp_dir, store) = open_test_store::<Interaction>();
        let key = keys::interaction("i1");

        let first = Interaction {
            id: "i1".to_string(),
            summary: Some("first".to_string()),
            ..Interaction::default()
        };
        store.set(&key, &first).unwrap();

        let second = Interaction {
            id: "i1".to_string(),
            ..Interaction::default()
        };
        store.set(&key, &second).unwrap();

        let loaded = store.get(&key).unwrap();
        assert_eq!(loaded.summary, None);
    }

    #[test]
    fn delete_is_idempotent() {
        let (_temp_dir, store) = open_test_store::<Interaction>();
        let key = keys::interaction("i1");

        store.delete(&key).unwrap();

        store
            .set(&key, &Interaction { id: "i1".to_string(), ..Interaction::default() })
            .unwrap();
        store.delete(&key).unwrap();
        store.delete(&key).unwrap();

        assert!(store.get(&key).unwrap_err().is_not_found());
    }

    #[test]
    fn corrupt_record_is_decode_error() {
        let (_temp_dir, store) = open_test_store::<Interaction>();
        let key = keys::interaction("i1");
        store
            .connection
            .execute(
                "INSERT INTO entities (key, value) VALUES (?1, ?2)",
                params![key, "not json"],
            )
            .unwrap();

        let err = store.get(&key).unwrap_err();
        assert!(matches!(err, StateError::Decode { .. }));
    }
}
