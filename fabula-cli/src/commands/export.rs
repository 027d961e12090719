//! Export command: the simulated download and success screen.
//!
//! No document is ever produced; "download" is a success notification,
//! exactly like the demo this reimplements.

use super::{or_earlier_step, spinner, DOWNLOAD_DELAY};
use anyhow::Result;
use fabula_core::{BookFormat, Relay};

/// "Download" the finished book
pub async fn export(relay: &Relay, format: Option<BookFormat>) -> Result<()> {
    let book = or_earlier_step(
        relay.load_book().await,
        "No generated book found",
        "generate",
    )?;

    // fall back to the format chosen at creation, then to pdf
    let format = match format {
        Some(format) => format,
        None => relay
            .load_draft()
            .await
            .map(|d| d.format)
            .unwrap_or(BookFormat::Pdf),
    };

    println!("Download started!");
    let pb = spinner(format!("Preparing your {}...", format));
    tokio::time::sleep(DOWNLOAD_DELAY).await;
    pb.finish_and_clear();

    println!("Your book has been downloaded successfully!");
    println!();
    println!("Your Book is Ready!");
    println!();
    println!("  {}", book.title);
    match &book.genre {
        Some(genre) => println!("  {} chapters \u{2022} {}", book.chapter_count(), genre),
        None => println!("  {} chapters", book.chapter_count()),
    }
    println!();
    println!("Create another book with `fabula-cli create`.");

    Ok(())
}
