//! Error types for Fabula Core

use thiserror::Error;

/// Result type alias using FabulaError
pub type Result<T> = std::result::Result<T, FabulaError>;

/// Top-level error type for all Fabula operations
#[derive(Debug, Error)]
pub enum FabulaError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unknown chapter: {0}")]
    UnknownChapter(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when a book draft fails the creation-form checks.
///
/// Messages are user-facing; the CLI prints them verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a prompt before generating your book")]
    EmptyIdea,
}

/// Errors that occur in the session relay
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot has never been written (or was deleted). Callers treat this
    /// as "go back to the earlier step" rather than fabricating data.
    #[error("nothing stored under '{0}'")]
    SlotEmpty(String),

    #[error("stored data under '{slot}' is not valid JSON: {source}")]
    Malformed {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("backend error: {0}")]
    Backend(String),
}
