//! Typed wrapper over a [`SessionStore`] backend

use super::{slots, SessionStore};
use crate::editor::EditorDraft;
use crate::error::{Result, StorageError};
use crate::types::{Book, BookDraft};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The session relay: JSON-encoded objects in fixed slots.
///
/// Absent slots surface as [`StorageError::SlotEmpty`]; consumers direct
/// the user back to the earlier step instead of fabricating data.
pub struct Relay {
    store: Box<dyn SessionStore>,
}

impl Relay {
    /// Wrap a storage backend
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    async fn load<T: DeserializeOwned>(&self, slot: &str) -> Result<T> {
        let bytes = self
            .store
            .read(slot)
            .await?
            .ok_or_else(|| StorageError::SlotEmpty(slot.to_string()))?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(source) => {
                tracing::warn!(slot, error = %source, "discarding malformed stored JSON");
                Err(StorageError::Malformed {
                    slot: slot.to_string(),
                    source,
                }
                .into())
            }
        }
    }

    async fn save<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.store.write(slot, bytes).await?;
        tracing::debug!(slot, "slot written");
        Ok(())
    }

    /// Load the submitted creation-form draft
    pub async fn load_draft(&self) -> Result<BookDraft> {
        self.load(slots::BOOK_DETAILS).await
    }

    /// Overwrite the draft slot
    pub async fn save_draft(&self, draft: &BookDraft) -> Result<()> {
        self.save(slots::BOOK_DETAILS, draft).await
    }

    /// Load the generated book
    pub async fn load_book(&self) -> Result<Book> {
        self.load(slots::GENERATED_BOOK).await
    }

    /// Overwrite the book slot
    pub async fn save_book(&self, book: &Book) -> Result<()> {
        self.save(slots::GENERATED_BOOK, book).await
    }

    /// Load the persisted editor draft
    pub async fn load_editor_draft(&self) -> Result<EditorDraft> {
        self.load(slots::EDITOR_DRAFT).await
    }

    /// Overwrite the editor-draft slot
    pub async fn save_editor_draft(&self, draft: &EditorDraft) -> Result<()> {
        self.save(slots::EDITOR_DRAFT, draft).await
    }

    /// Whether a generated book is available
    pub async fn has_book(&self) -> Result<bool> {
        Ok(self.store.exists(slots::GENERATED_BOOK).await?)
    }

    /// Whether an editor draft is available
    pub async fn has_editor_draft(&self) -> Result<bool> {
        Ok(self.store.exists(slots::EDITOR_DRAFT).await?)
    }

    /// Drop the editor draft once it has been applied
    pub async fn clear_editor_draft(&self) -> Result<()> {
        Ok(self.store.delete(slots::EDITOR_DRAFT).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{BookFormat, Chapter, PageSize};
    use crate::FabulaError;

    #[tokio::test]
    async fn test_missing_slot_is_slot_empty() {
        let relay = Relay::new(MemoryStore::new());
        match relay.load_book().await {
            Err(FabulaError::Storage(StorageError::SlotEmpty(slot))) => {
                assert_eq!(slot, slots::GENERATED_BOOK)
            }
            other => panic!("expected SlotEmpty, got {:?}", other.map(|b| b.title)),
        }
    }

    #[tokio::test]
    async fn test_book_round_trip_is_identical() {
        let relay = Relay::new(MemoryStore::new());
        let mut book = Book::new("The Journey Chronicles").with_genre("fantasy");
        book.add_chapter(
            Chapter::new(1, "The Beginning")
                .with_content("It begins.")
                .with_summary("A mysterious stranger appears.")
                .with_image_url("https://source.unsplash.com/random/300x200?fantasy&sig=1"),
        );
        book.add_chapter(Chapter::new(2, "Challenges Arise"));

        relay.save_book(&book).await.unwrap();
        let reloaded = relay.load_book().await.unwrap();
        assert_eq!(book, reloaded);
    }

    #[tokio::test]
    async fn test_draft_overwrite_wins() {
        let relay = Relay::new(MemoryStore::new());
        let first = BookDraft::new("first idea", BookFormat::Pdf, PageSize::A4);
        let second = BookDraft::new("second idea", BookFormat::Epub, PageSize::A5);
        relay.save_draft(&first).await.unwrap();
        relay.save_draft(&second).await.unwrap();
        assert_eq!(relay.load_draft().await.unwrap().idea, "second idea");
    }

    #[tokio::test]
    async fn test_malformed_json_is_reported() {
        let store = MemoryStore::new();
        use crate::store::SessionStore as _;
        store
            .write(slots::BOOK_DETAILS, b"{not json".to_vec())
            .await
            .unwrap();
        let relay = Relay::new(store);
        match relay.load_draft().await {
            Err(FabulaError::Storage(StorageError::Malformed { slot, .. })) => {
                assert_eq!(slot, slots::BOOK_DETAILS)
            }
            other => panic!("expected Malformed, got {:?}", other.map(|d| d.idea)),
        }
    }
}
