//! Generate command: fabricate the book from the captured draft

use super::or_earlier_step;
use anyhow::Result;
use fabula_core::{generator, Relay};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress checkpoints of the simulated generation: (delay so far, percent).
/// The whole run takes five seconds, matching the original's pacing.
const STAGES: [(u64, u64); 4] = [(800, 30), (2000, 60), (3500, 90), (5000, 100)];

/// Simulate generation, then write the placeholder book to the relay
pub async fn generate(relay: &Relay) -> Result<()> {
    let draft = or_earlier_step(
        relay.load_draft().await,
        "No book details found",
        "create",
    )?;

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.magenta} {pos:>3}% {msg}")
            .unwrap(),
    );
    pb.set_message("Generating your book magic... hold tight!");

    let mut elapsed = 0;
    for (at, percent) in STAGES {
        tokio::time::sleep(Duration::from_millis(at - elapsed)).await;
        pb.set_position(percent);
        elapsed = at;
    }

    let book = generator::generate_book(&draft, &mut rand::thread_rng());
    relay.save_book(&book).await?;
    // a fresh generation invalidates any previous editing session
    relay.clear_editor_draft().await?;

    pb.finish_with_message("Done!");

    println!();
    println!("{}", book.title);
    println!("{}", "=".repeat(book.title.chars().count()));
    for chapter in &book.chapters {
        println!("  Chapter {}: {}", chapter.id, chapter.title);
    }
    println!();
    println!("Next: `fabula-cli preview` or `fabula-cli edit show`.");

    Ok(())
}
