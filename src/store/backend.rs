//! Key-value persistence backends
//!
//! The record store and goal registry persist whole collections as JSON
//! blobs under string keys. This module defines that interface and two
//! implementations: a file-per-key store for real use and an in-memory
//! store for tests and embedding.

use crate::store::error::StoreResult;
use std::collections::HashMap;
use std::path::PathBuf;

/// A minimal key-value blob store
///
/// Writes are whole-value overwrites; there is no append path. A missing
/// key reads as `Ok(None)`.
pub trait KeyValueStore {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the blob stored under `key`
    fn set(&mut self, key: &str, blob: &str) -> StoreResult<()>;
}

/// File-backed store: one `<key>.json` file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, blob: &str) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), blob)?;
        Ok(())
    }
}

/// In-memory store for tests and embedded use
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert_eq!(store.get("workouts").unwrap(), None);

        store.set("workouts", "[1,2,3]").unwrap();
        assert_eq!(store.get("workouts").unwrap().as_deref(), Some("[1,2,3]"));

        // Overwrite semantics
        store.set("workouts", "[]").unwrap();
        assert_eq!(store.get("workouts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));

        store.set("goals", "{}").unwrap();
        assert_eq!(store.get("goals").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("workouts", "[]").unwrap();
        assert_eq!(store.get("workouts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = MemoryStore::new();
        store.set("workouts", "[]").unwrap();
        store.set("yearlyGoals", "{}").unwrap();

        assert_eq!(store.get("workouts").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("yearlyGoals").unwrap().as_deref(), Some("{}"));
    }
}
