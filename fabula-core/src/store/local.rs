//! Filesystem slot store: one JSON file per slot under a session directory

use super::{SessionStore, StoreResult};
use crate::error::StorageError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Slot store that keeps each slot as `<dir>/<slot>.json`.
///
/// This is the longer-lived backend the CLI uses so state survives between
/// invocations (each subcommand is a separate process, the way each page
/// of the original flow was a separate load).
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at the given session directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve a slot to its file path, rejecting names that could escape
    /// the session directory
    fn slot_path(&self, slot: &str) -> StoreResult<PathBuf> {
        if slot.is_empty()
            || !slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StorageError::Backend(format!(
                "invalid slot name '{}'",
                slot
            )));
        }
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

#[async_trait]
impl SessionStore for LocalStore {
    async fn read(&self, slot: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.slot_path(slot)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Backend(err.to_string())),
        }
    }

    async fn write(&self, slot: &str, data: Vec<u8>) -> StoreResult<()> {
        let path = self.slot_path(slot)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        fs::write(&path, data)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    async fn delete(&self, slot: &str) -> StoreResult<()> {
        let path = self.slot_path(slot)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Backend(err.to_string())),
        }
    }
}
