use crate::errors::StorageError;
use crate::models::TodoItem;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, warn};

pub const TODOS_KEY: &str = "todos";

/// A JSON object on disk used as a key-value store. Every write replaces the whole file.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let mut entries = match self.read_entries().await? {
            Some(entries) => entries,
            None => return Ok(None),
        };
        match entries.remove(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Replaces `key`, keeping any other keys already in the file.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries.unwrap_or_default(),
            Err(err) => {
                warn!("discarding unreadable storage file: {err}");
                Map::new()
            }
        };
        entries.insert(key.to_string(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(&entries)?;
        fs::write(&self.path, payload).await?;
        Ok(())
    }

    /// Missing, unreadable or malformed data all yield an empty collection.
    pub async fn load_todos(&self) -> Vec<TodoItem> {
        match self.get::<Vec<TodoItem>>(TODOS_KEY).await {
            Ok(Some(items)) => {
                debug!(count = items.len(), "loaded todos");
                items
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("failed to load todos from {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    pub async fn persist_todos(&self, items: &[TodoItem]) -> Result<(), StorageError> {
        self.set(TODOS_KEY, &items).await
    }

    async fn read_entries(&self) -> Result<Option<Map<String, Value>>, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
