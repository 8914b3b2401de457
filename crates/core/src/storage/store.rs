use std::collections::HashMap;

use serde_json::Value;

use crate::errors::CoreError;

/// Key-value persistence for client-local state (alerts, sound flag).
///
/// The dashboard's local state is advisory, so the contract is deliberately
/// loose: last writer wins, no locking, JSON in and out. Any backing store —
/// browser storage, a file, plain memory — can implement this without the
/// alert logic noticing.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value) -> Result<(), CoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

/// In-memory store: tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
