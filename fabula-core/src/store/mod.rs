//! Session relay: the browser-storage stand-in used to hand objects
//! between steps of the flow.
//!
//! Each logical object (draft, generated book, editor draft) occupies a
//! single global slot addressed by a fixed string key. Slots are read on
//! step entry and overwritten on save; there is no history, no versioning
//! and no cross-session coordination — the last writer wins.

mod local;
mod memory;
mod relay;

use crate::error::StorageError;
use async_trait::async_trait;

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use relay::Relay;

/// Result type for raw store operations
pub type StoreResult<T> = std::result::Result<T, StorageError>;

/// Fixed slot keys, one per logical object
pub mod slots {
    /// The submitted creation-form draft (session-scoped in the original)
    pub const BOOK_DETAILS: &str = "book_details";

    /// The generated book handed to preview/export
    pub const GENERATED_BOOK: &str = "generated_book";

    /// The persisted editor draft (the longer-lived "draft" slot)
    pub const EDITOR_DRAFT: &str = "editor_draft";
}

/// Abstract slot storage backend.
///
/// Backends move bytes; JSON (de)serialization and slot-empty policy live
/// in [`Relay`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the slot's bytes, or `None` if it has never been written
    async fn read(&self, slot: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Overwrite the slot
    async fn write(&self, slot: &str, data: Vec<u8>) -> StoreResult<()>;

    /// Remove the slot; removing an absent slot is a no-op
    async fn delete(&self, slot: &str) -> StoreResult<()>;

    /// Check whether the slot holds a value
    async fn exists(&self, slot: &str) -> StoreResult<bool> {
        Ok(self.read(slot).await?.is_some())
    }
}
