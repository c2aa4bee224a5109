use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

/// Durable client-side storage: key to JSON document. Mirrors the browser
/// local-storage contract the engine is deployed against.
pub trait StorageBackend: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn save(&self, key: &str, document: &Value) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("storage poisoned")]
    Poisoned,
}

/// One JSON file per key under a data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        let document = serde_json::from_str(&raw)?;
        tracing::debug!(key, "loaded document");
        Ok(Some(document))
    }

    fn save(&self, key: &str, document: &Value) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(document)?;
        std::fs::write(self.path_for(key), raw)?;
        tracing::debug!(key, "saved document");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let documents = self.documents.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(documents.get(key).cloned())
    }

    fn save(&self, key: &str, document: &Value) -> Result<(), StorageError> {
        let mut documents = self.documents.lock().map_err(|_| StorageError::Poisoned)?;
        documents.insert(key.to_string(), document.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut documents = self.documents.lock().map_err(|_| StorageError::Poisoned)?;
        documents.remove(key);
        Ok(())
    }
}
