//! Core types for the Fabula book-flow data model

mod book;
mod chapter;
mod draft;

pub use book::Book;
pub use chapter::{Chapter, ChapterId};
pub use draft::{BookDraft, BookFormat, PageSize};
