use crate::ports::KeyValueStore;
use parking_lot::RwLock;
use shared_types::StorageError;
use std::collections::HashMap;

/// In-memory implementation of `KeyValueStore`.
///
/// An optional byte quota emulates browser storage limits: a `set` whose
/// resulting total of key and value bytes exceeds the quota fails with
/// `StorageError::QuotaExceeded` and leaves the store unchanged.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes beyond `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Seeds a raw value without quota checks.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.write().insert(key.to_string(), value.to_string());
        self
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn used_bytes_without(entries: &HashMap<String, String>, key: &str) -> usize {
        entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        if let Some(quota) = self.quota {
            let required = Self::used_bytes_without(&entries, key) + key.len() + value.len();
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
