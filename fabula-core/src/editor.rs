//! Editor state: the in-memory chapter list mutated by the edit step.
//!
//! Supports append and in-place field edits only; chapters are never
//! reordered or deleted. Accordion expansion is display state and is kept
//! out of the [`Book`] itself, matching the handoff format the rest of the
//! flow expects.

use crate::error::{FabulaError, Result};
use crate::generator;
use crate::types::{Book, Chapter, ChapterId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// The persisted form of an editing session: the book plus which
/// accordion sections are open. This is the single longer-lived "draft"
/// slot; saving overwrites it with no history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorDraft {
    pub book: Book,
    pub expanded: BTreeSet<ChapterId>,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

/// In-memory editing session over a single book
#[derive(Debug, Clone)]
pub struct EditorState {
    book: Book,
    expanded: BTreeSet<ChapterId>,
}

impl EditorState {
    /// Start editing a freshly generated book; the first chapter opens
    /// expanded
    pub fn from_book(book: Book) -> Self {
        let expanded = book.chapters.first().map(|c| c.id).into_iter().collect();
        Self { book, expanded }
    }

    /// Resume a persisted editing session
    pub fn from_draft(draft: EditorDraft) -> Self {
        Self {
            book: draft.book,
            expanded: draft.expanded,
        }
    }

    /// Snapshot the session for persistence
    pub fn to_draft(&self) -> EditorDraft {
        EditorDraft {
            book: self.book.clone(),
            expanded: self.expanded.clone(),
            saved_at: Utc::now(),
        }
    }

    /// The book being edited
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Finish editing, discarding display state
    pub fn into_book(self) -> Book {
        self.book
    }

    /// Replace the book title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.book.title = title.into();
    }

    /// Replace a chapter's title in place
    pub fn set_chapter_title(&mut self, id: ChapterId, title: impl Into<String>) -> Result<()> {
        let chapter = self.chapter_mut(id)?;
        chapter.title = title.into();
        Ok(())
    }

    /// Replace a chapter's body text in place
    pub fn set_chapter_content(&mut self, id: ChapterId, content: impl Into<String>) -> Result<()> {
        let chapter = self.chapter_mut(id)?;
        chapter.content = content.into();
        Ok(())
    }

    /// Append a new chapter; its id is max existing id + 1 (1 on an empty
    /// list). Returns the assigned id.
    pub fn add_chapter(&mut self, title: Option<String>) -> ChapterId {
        let id = self.book.next_chapter_id();
        let title = title.unwrap_or_else(|| format!("Chapter {}", id));
        self.book.add_chapter(Chapter::new(id, title));
        self.expanded.insert(id);
        id
    }

    /// Flip a chapter's accordion flag; returns the new state
    pub fn toggle(&mut self, id: ChapterId) -> Result<bool> {
        if self.book.chapter(id).is_none() {
            return Err(FabulaError::UnknownChapter(id));
        }
        if self.expanded.remove(&id) {
            Ok(false)
        } else {
            self.expanded.insert(id);
            Ok(true)
        }
    }

    /// Whether a chapter's accordion section is open
    pub fn is_expanded(&self, id: ChapterId) -> bool {
        self.expanded.contains(&id)
    }

    /// Swap in a fresh placeholder illustration URL for one chapter.
    /// The nonce in the signature guarantees the URL differs from the
    /// previous one. Returns the new URL.
    pub fn regenerate_image(&mut self, id: ChapterId) -> Result<String> {
        let topic = self.book.genre.clone();
        let chapter = self.chapter_mut(id)?;
        let url = fresh_image_url(topic.as_deref(), id);
        chapter.image_url = Some(url.clone());
        tracing::debug!(chapter = id, "image regenerated");
        Ok(url)
    }

    /// Regenerate placeholder illustrations for every chapter
    pub fn regenerate_all_images(&mut self) {
        let topic = self.book.genre.clone();
        for chapter in &mut self.book.chapters {
            chapter.image_url = Some(fresh_image_url(topic.as_deref(), chapter.id));
        }
    }

    /// Approximate word count shown in the book-details panel
    pub fn word_count(&self) -> usize {
        self.book.word_count()
    }

    fn chapter_mut(&mut self, id: ChapterId) -> Result<&mut Chapter> {
        self.book
            .chapter_mut(id)
            .ok_or(FabulaError::UnknownChapter(id))
    }
}

fn fresh_image_url(topic: Option<&str>, id: ChapterId) -> String {
    let sig = format!("{}-{}", id, Uuid::new_v4().simple());
    generator::image_url(topic, &sig)
}
