//! Placeholder generator: fabricates a plausible-looking book from a draft.
//!
//! This is presentation filler standing in for a real content service.
//! Titles are derived from the idea text, chapters come from fixed string
//! pools, and nothing here is reproducible in production (the CLI passes
//! a thread rng). Every function is generic over [`Rng`] so tests can
//! drive it with a seeded generator.

use crate::types::{Book, BookDraft, Chapter, ChapterId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Word substituted into title templates when the idea has no usable words
const FALLBACK_WORD: &str = "Journey";

const TITLE_TEMPLATES: [&str; 5] = [
    "The {} Chronicles",
    "{}'s Journey",
    "Beyond the {}",
    "The Last {}",
    "{} Rising",
];

const BEGINNING_TITLES: [&str; 5] = [
    "The Beginning",
    "First Steps",
    "Origins",
    "The Awakening",
    "Discovery",
];

const MIDDLE_TITLES: [&str; 8] = [
    "Challenges Arise",
    "The Journey Continues",
    "Unexpected Turns",
    "Revelations",
    "The Conflict",
    "Rising Tension",
    "New Allies",
    "Hidden Truths",
];

const ENDING_TITLES: [&str; 5] = [
    "The Final Battle",
    "Resolution",
    "A New Dawn",
    "Coming Full Circle",
    "The End and Beginning",
];

const SUMMARIES: [&str; 10] = [
    "In this chapter, the characters face unexpected challenges that test their resolve and force them to reconsider their goals.",
    "A mysterious stranger appears, bringing crucial information that changes everything the protagonists thought they knew.",
    "The journey takes a dangerous turn as the environment becomes increasingly hostile and resources begin to dwindle.",
    "Hidden secrets from the past are revealed, shedding new light on the current conflict and motivations of key characters.",
    "Alliances shift as true intentions are revealed, leaving the hero to question who can truly be trusted.",
    "A moment of calm allows for reflection and growth, strengthening bonds between characters before the coming storm.",
    "The antagonist makes a bold move, raising the stakes and forcing an immediate response from our heroes.",
    "An ancient power is discovered, promising both great opportunity and terrible danger if misused.",
    "The protagonists must overcome internal conflicts and personal demons to progress on their journey.",
    "A dramatic confrontation leads to a pivotal decision that will alter the course of the entire story.",
];

/// Canned chapter body used until the user writes their own
const SAMPLE_CONTENT: &str = "\
Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.

Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.

Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto beatae vitae dicta sunt explicabo.";

/// Image topic used when the draft carries no genre
const DEFAULT_IMAGE_TOPIC: &str = "book";

/// Derive a book title from the idea text: pick a random word longer than
/// three characters and substitute it into one of the fixed templates.
pub fn derive_title(idea: &str, rng: &mut impl Rng) -> String {
    let words: Vec<&str> = idea
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .collect();
    let word = words
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_WORD);
    let template = TITLE_TEMPLATES
        .choose(rng)
        .expect("template pool is non-empty");
    template.replacen("{}", word, 1)
}

/// Pick a chapter title appropriate for its position: opening titles for
/// chapter 1, closing titles past chapter 8, middle titles in between.
pub fn chapter_title(number: ChapterId, rng: &mut impl Rng) -> String {
    let pool: &[&str] = match number {
        1 => &BEGINNING_TITLES,
        2..=8 => &MIDDLE_TITLES,
        _ => &ENDING_TITLES,
    };
    pool.choose(rng).expect("title pool is non-empty").to_string()
}

/// Pick a canned chapter summary
pub fn chapter_summary(rng: &mut impl Rng) -> String {
    SUMMARIES
        .choose(rng)
        .expect("summary pool is non-empty")
        .to_string()
}

/// Build a placeholder illustration URL for the given topic and signature
pub fn image_url(topic: Option<&str>, sig: &str) -> String {
    format!(
        "https://source.unsplash.com/random/300x200?{}&sig={}",
        topic.unwrap_or(DEFAULT_IMAGE_TOPIC),
        sig
    )
}

/// Generate a complete placeholder book from the submitted draft.
///
/// Chapter count is uniform in 5..=9; ids are assigned densely from 1.
pub fn generate_book(draft: &BookDraft, rng: &mut impl Rng) -> Book {
    let mut book = Book::new(derive_title(&draft.idea, rng));
    book.genre = draft.genre.clone();

    let chapter_count = rng.gen_range(5..=9);
    for number in 1..=chapter_count {
        let mut chapter = Chapter::new(number, chapter_title(number, rng))
            .with_content(SAMPLE_CONTENT)
            .with_summary(chapter_summary(rng));
        if draft.enable_images {
            chapter = chapter
                .with_image_url(image_url(draft.genre.as_deref(), &number.to_string()));
        }
        book.add_chapter(chapter);
    }

    tracing::info!(
        title = %book.title,
        chapters = book.chapters.len(),
        "generated placeholder book"
    );
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookFormat, PageSize};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn draft() -> BookDraft {
        BookDraft::new(
            "a lighthouse keeper discovers a door under the sea",
            BookFormat::Pdf,
            PageSize::A4,
        )
        .with_genre("mystery")
    }

    #[test]
    fn test_title_uses_a_long_word_from_the_idea() {
        let mut rng = rng();
        for _ in 0..50 {
            let title = derive_title("the tiny fox and the moonlit harvest", &mut rng);
            // only words longer than 3 chars qualify
            assert!(
                ["tiny", "moonlit", "harvest"]
                    .iter()
                    .any(|w| title.contains(w)),
                "unexpected title: {}",
                title
            );
            assert!(!title.contains("{}"));
        }
    }

    #[test]
    fn test_title_falls_back_on_short_ideas() {
        let mut rng = rng();
        let title = derive_title("a b cd", &mut rng);
        assert!(title.contains(FALLBACK_WORD), "unexpected title: {}", title);
    }

    #[test]
    fn test_chapter_titles_respect_position() {
        let mut rng = rng();
        for _ in 0..20 {
            assert!(BEGINNING_TITLES.contains(&chapter_title(1, &mut rng).as_str()));
            assert!(MIDDLE_TITLES.contains(&chapter_title(5, &mut rng).as_str()));
            assert!(ENDING_TITLES.contains(&chapter_title(9, &mut rng).as_str()));
        }
    }

    #[test]
    fn test_generated_book_shape() {
        let mut rng = rng();
        for _ in 0..20 {
            let book = generate_book(&draft(), &mut rng);
            assert!((5..=9).contains(&book.chapters.len()));
            // ids densely increasing from 1
            for (index, chapter) in book.chapters.iter().enumerate() {
                assert_eq!(chapter.id, index as u32 + 1);
                assert!(chapter.summary.is_some());
                assert!(!chapter.content.is_empty());
                let url = chapter.image_url.as_ref().expect("images enabled");
                assert!(url.starts_with("https://source.unsplash.com/random/300x200?mystery"));
            }
            assert_eq!(book.genre.as_deref(), Some("mystery"));
        }
    }

    #[test]
    fn test_images_can_be_disabled() {
        let mut rng = rng();
        let book = generate_book(&draft().without_images(), &mut rng);
        assert!(book.chapters.iter().all(|c| c.image_url.is_none()));
    }

    #[test]
    fn test_image_url_topic_fallback() {
        assert_eq!(
            image_url(None, "3"),
            "https://source.unsplash.com/random/300x200?book&sig=3"
        );
    }
}
