//! Fabula Core Library
//!
//! This crate provides the data model and flow logic for the Fabula book
//! generator demo: draft capture, the session relay used to hand state
//! between steps, the placeholder content generator, editor state, and
//! preview navigation. All "generation" is simulated with static string
//! pools; no model, network, or document pipeline sits behind any of it.

pub mod editor;
pub mod error;
pub mod generator;
pub mod preview;
pub mod store;
pub mod types;

pub use editor::{EditorDraft, EditorState};
pub use error::{FabulaError, Result, StorageError, ValidationError};
pub use preview::BookPreview;
pub use store::{LocalStore, MemoryStore, Relay, SessionStore};
pub use types::{Book, BookDraft, BookFormat, Chapter, ChapterId, PageSize};
