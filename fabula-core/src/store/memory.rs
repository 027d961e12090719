//! In-memory slot store, the per-tab session analogue

use super::{SessionStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Slot store backed by a process-local map.
///
/// State vanishes with the process, which mirrors the session-scoped
/// storage the flow was designed around. Used directly in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn read(&self, slot: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn write(&self, slot: &str, data: Vec<u8>) -> StoreResult<()> {
        self.slots.write().await.insert(slot.to_string(), data);
        Ok(())
    }

    async fn delete(&self, slot: &str) -> StoreResult<()> {
        self.slots.write().await.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_absent_slot() {
        let store = MemoryStore::new();
        assert_eq!(store.read("book_details").await.unwrap(), None);
        assert!(!store.exists("book_details").await.unwrap());
    }

    #[tokio::test]
    async fn test_overwrite_wins() {
        let store = MemoryStore::new();
        store.write("generated_book", b"first".to_vec()).await.unwrap();
        store.write("generated_book", b"second".to_vec()).await.unwrap();
        assert_eq!(
            store.read("generated_book").await.unwrap(),
            Some(b"second".to_vec())
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.write("editor_draft", b"x".to_vec()).await.unwrap();
        store.delete("editor_draft").await.unwrap();
        store.delete("editor_draft").await.unwrap();
        assert_eq!(store.read("editor_draft").await.unwrap(), None);
    }
}
