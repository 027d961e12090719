//! The main Book type - the single active copy handed between pages

use super::{Chapter, ChapterId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The complete generated book.
///
/// There is exactly one active copy per session; edits replace the stored
/// object wholesale rather than patching it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier for this book
    pub id: Uuid,

    /// Book title
    pub title: String,

    /// Genre tag, when the draft carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Ordered list of chapters, ids 1..=len
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Create a new empty book with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            genre: None,
            chapters: Vec::new(),
        }
    }

    /// Set the genre tag
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Append a chapter to the book
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Number of chapters
    pub fn chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }

    /// Look up a chapter by id
    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Mutable lookup by id
    pub fn chapter_mut(&mut self, id: ChapterId) -> Option<&mut Chapter> {
        self.chapters.iter_mut().find(|c| c.id == id)
    }

    /// The id the next appended chapter should get: max existing id + 1,
    /// or 1 on an empty list
    pub fn next_chapter_id(&self) -> ChapterId {
        self.chapters.iter().map(|c| c.id).max().map_or(1, |id| id + 1)
    }

    /// Total word count across all chapter bodies
    pub fn word_count(&self) -> usize {
        self.chapters
            .iter()
            .map(|c| c.content.split_whitespace().count())
            .sum()
    }
}
