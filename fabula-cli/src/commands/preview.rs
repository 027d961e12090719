//! Preview command: show the generated book one chapter at a time

use super::or_earlier_step;
use anyhow::Result;
use fabula_core::{BookPreview, ChapterId, Relay};

/// Render the requested chapter with the table of contents around it
pub async fn preview(relay: &Relay, chapter: ChapterId, json: bool) -> Result<()> {
    let book = or_earlier_step(
        relay.load_book().await,
        "No generated book found",
        "generate",
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
        return Ok(());
    }

    let count = book.chapter_count();
    let mut preview = BookPreview::new(book);
    if count > 0 {
        preview.jump(chapter.clamp(1, count));
    }

    println!("{}", preview.book().title);
    if let Some(genre) = &preview.book().genre {
        println!("Genre: {}", genre);
    }
    println!();

    println!("Table of Contents");
    for entry in &preview.book().chapters {
        let marker = if entry.id == preview.active() { ">" } else { " " };
        println!("{} Chapter {}: {}", marker, entry.id, entry.title);
    }
    println!();

    let Some(active) = preview.active_chapter() else {
        println!("This book has no chapters yet.");
        return Ok(());
    };

    println!("Chapter {} of {}", preview.active(), count);
    println!("Chapter {}: {}", active.id, active.title);
    if let Some(url) = &active.image_url {
        println!("[illustration] {}", url);
    }
    if let Some(summary) = &active.summary {
        println!();
        println!("{}", summary);
    }
    println!();
    println!("{}", active.content);
    println!();

    let others = preview.other_chapters();
    if !others.is_empty() {
        println!("Other Chapters");
        for other in others {
            println!("  Chapter {}: {}", other.id, other.title);
        }
        println!();
    }

    // prev/next hints mirror the disabled buttons at the bounds
    let mut hints = Vec::new();
    if !preview.at_start() {
        hints.push(format!("--chapter {} for previous", preview.active() - 1));
    }
    if !preview.at_end() {
        hints.push(format!("--chapter {} for next", preview.active() + 1));
    }
    if !hints.is_empty() {
        println!("Navigate: {}", hints.join(", "));
    }
    println!("When you're happy, run `fabula-cli export`.");

    Ok(())
}
