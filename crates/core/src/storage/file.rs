use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::CoreError;

use super::store::KeyValueStore;

/// JSON-file-backed store (native only, not WASM).
///
/// The whole key space is one JSON object on disk, rewritten on every `set`.
/// Fine for the handful of keys this crate persists; concurrent processes
/// race with last-writer-wins, same as concurrent browser tabs.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, Value>,
}

impl FileStore {
    /// Open (or create) the store at `path`. A missing file starts empty; a
    /// present file must hold a JSON object.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let bytes = std::fs::read(&path)?;
            serde_json::from_slice(&bytes)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), CoreError> {
        let bytes = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
