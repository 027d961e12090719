//! Create command: capture the book idea and settings

use super::{spinner, SUBMIT_DELAY};
use anyhow::Result;
use fabula_core::{BookDraft, BookFormat, PageSize, Relay};

/// Validate the submission and hand the draft to the generate step
pub async fn create(
    relay: &Relay,
    idea: &str,
    format: BookFormat,
    page_size: PageSize,
    genre: Option<String>,
    no_images: bool,
) -> Result<()> {
    let mut draft = BookDraft::new(idea, format, page_size);
    if let Some(genre) = genre {
        draft = draft.with_genre(genre);
    }
    if no_images {
        draft = draft.without_images();
    }

    // Reject before anything is stored, like the original form
    draft.validate()?;

    let pb = spinner("Generating...");
    tokio::time::sleep(SUBMIT_DELAY).await;
    relay.save_draft(&draft).await?;
    pb.finish_and_clear();

    tracing::info!(format = %draft.format, page_size = %draft.page_size, "draft captured");

    println!("Book idea captured.");
    println!(
        "  Format: {}  Page size: {}  Images: {}",
        draft.format,
        draft.page_size,
        if draft.enable_images { "enabled" } else { "disabled" }
    );
    println!();
    println!("Next: run `fabula-cli generate` to generate your book.");

    Ok(())
}
