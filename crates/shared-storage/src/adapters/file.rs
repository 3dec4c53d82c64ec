use crate::ports::KeyValueStore;
use parking_lot::RwLock;
use shared_types::StorageError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File-backed key-value store.
///
/// The whole storage area is one JSON object on disk. Every write rewrites
/// the file atomically via a temp file and rename, so a crash mid-write leaves
/// the previous contents intact.
///
/// An unreadable or non-JSON file is treated as an empty storage area; the
/// subsystems then run their own corrupt-record recovery on the keys they own.
pub struct FileBackedStore {
    entries: RwLock<BTreeMap<String, String>>,
    path: PathBuf,
}

impl FileBackedStore {
    /// Opens (or lazily creates) the store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => {
                    tracing::debug!(
                        path = %path.display(),
                        keys = entries.len(),
                        "[storage] Loaded storage file"
                    );
                    entries
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "[storage] Storage file is not a JSON object, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "[storage] No existing storage file");
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[storage] Storage file unreadable, starting empty"
                );
                BTreeMap::new()
            }
        };

        Self {
            entries: RwLock::new(entries),
            path,
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_to_file(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        tracing::trace!(path = %self.path.display(), bytes = bytes.len(), "[storage] Flushed");
        Ok(())
    }
}

fn io_error(e: std::io::Error) -> StorageError {
    StorageError::Io {
        message: e.to_string(),
    }
}

impl KeyValueStore for FileBackedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save_to_file(&entries) {
            // Keep the in-memory view identical to what is on disk.
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.save_to_file(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
