use super::files::{atomic_write, ensure_protocol_dir, read_file};
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// The persistent key-value collaborator: `get(key)` and `set(key, value)`
/// are the only operations the store needs.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Disk-backed storage: each key lives as `<key>.json` inside the protocol
/// directory, written atomically.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at the resolved protocol directory, creating it
    /// if needed
    pub fn open() -> Result<Self> {
        let dir = ensure_protocol_dir()?;
        Ok(Self { dir })
    }

    /// Open storage rooted at an explicit directory (used by tests)
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.key_path(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.key_path(key), value)
    }
}

/// In-memory storage for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("protocol_history").unwrap(), None);

        storage.set("protocol_history", "{}").unwrap();
        assert_eq!(
            storage.get("protocol_history").unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn test_file_storage_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::with_dir(temp_dir.path().to_path_buf());

        assert_eq!(storage.get("protocol_history").unwrap(), None);
        storage.set("protocol_history", "{\"a\":1}").unwrap();
        assert_eq!(
            storage.get("protocol_history").unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        // The value lands in a per-key json file
        assert!(temp_dir.path().join("protocol_history.json").exists());
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        {
            let mut storage = FileStorage::with_dir(temp_dir.path().to_path_buf());
            storage.set("protocol_history", "persisted").unwrap();
        }

        let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());
        assert_eq!(
            storage.get("protocol_history").unwrap().as_deref(),
            Some("persisted")
        );
    }
}
