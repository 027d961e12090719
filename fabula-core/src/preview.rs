//! Preview navigation: a cursor over the generated book's chapters

use crate::types::{Book, Chapter, ChapterId};

/// Cursor over a book's chapters for the preview step.
///
/// The active id stays within `[1, chapter_count]`; stepping past either
/// bound is a no-op. A dangling active id (possible only on an empty
/// book) simply yields no active chapter.
#[derive(Debug, Clone)]
pub struct BookPreview {
    book: Book,
    active: ChapterId,
}

impl BookPreview {
    /// Open the preview on chapter 1
    pub fn new(book: Book) -> Self {
        Self { book, active: 1 }
    }

    /// The book under preview
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Give the book back, e.g. to hand it on to the next step
    pub fn into_book(self) -> Book {
        self.book
    }

    /// Currently active chapter id
    pub fn active(&self) -> ChapterId {
        self.active
    }

    /// The chapter the cursor points at, if it exists
    pub fn active_chapter(&self) -> Option<&Chapter> {
        self.book.chapter(self.active)
    }

    /// Whether the cursor is on the first chapter
    pub fn at_start(&self) -> bool {
        self.active <= 1
    }

    /// Whether the cursor is on the last chapter
    pub fn at_end(&self) -> bool {
        self.active >= self.book.chapter_count()
    }

    /// Step forward; no-op on the last chapter
    pub fn next(&mut self) {
        if !self.at_end() {
            self.active += 1;
        }
    }

    /// Step backward; no-op on the first chapter
    pub fn prev(&mut self) {
        if !self.at_start() {
            self.active -= 1;
        }
    }

    /// Jump directly to a chapter; ignored unless the id exists
    pub fn jump(&mut self, id: ChapterId) -> bool {
        if self.book.chapter(id).is_some() {
            self.active = id;
            true
        } else {
            false
        }
    }

    /// Up to three other chapters shown below the active one
    pub fn other_chapters(&self) -> Vec<&Chapter> {
        self.book
            .chapters
            .iter()
            .filter(|c| c.id != self.active)
            .take(3)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn book_with(chapters: u32) -> Book {
        let mut book = Book::new("Nav Test");
        for id in 1..=chapters {
            book.add_chapter(Chapter::new(id, format!("Chapter {}", id)));
        }
        book
    }

    #[test]
    fn test_bounds_are_no_ops() {
        let mut preview = BookPreview::new(book_with(3));
        assert!(preview.at_start());
        preview.prev();
        assert_eq!(preview.active(), 1);

        preview.jump(3);
        assert!(preview.at_end());
        preview.next();
        assert_eq!(preview.active(), 3);
    }

    #[test]
    fn test_stepping() {
        let mut preview = BookPreview::new(book_with(3));
        preview.next();
        assert_eq!(preview.active(), 2);
        assert_eq!(preview.active_chapter().unwrap().title, "Chapter 2");
        preview.prev();
        assert_eq!(preview.active(), 1);
    }

    #[test]
    fn test_jump_only_to_existing() {
        let mut preview = BookPreview::new(book_with(4));
        assert!(preview.jump(4));
        assert!(!preview.jump(9));
        assert_eq!(preview.active(), 4);
    }

    #[test]
    fn test_empty_book_shows_nothing() {
        let preview = BookPreview::new(book_with(0));
        assert!(preview.active_chapter().is_none());
        assert!(preview.other_chapters().is_empty());
    }

    #[test]
    fn test_other_chapters_excludes_active_and_caps_at_three() {
        let mut preview = BookPreview::new(book_with(6));
        preview.jump(2);
        let others: Vec<_> = preview.other_chapters().iter().map(|c| c.id).collect();
        assert_eq!(others, vec![1, 3, 4]);
    }

    proptest! {
        /// No sequence of steps and jumps ever leaves [1, chapter_count].
        #[test]
        fn prop_cursor_stays_in_bounds(
            chapters in 1u32..12,
            moves in proptest::collection::vec(0u32..15, 0..40),
        ) {
            let mut preview = BookPreview::new(book_with(chapters));
            for m in moves {
                match m % 3 {
                    0 => preview.next(),
                    1 => preview.prev(),
                    _ => { preview.jump(m); }
                }
                prop_assert!(preview.active() >= 1);
                prop_assert!(preview.active() <= chapters);
                prop_assert!(preview.active_chapter().is_some());
            }
        }
    }
}
