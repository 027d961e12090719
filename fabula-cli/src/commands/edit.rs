//! Edit command: mutate the generated book through a persisted
//! editing session

use super::{or_earlier_step, spinner, ALL_IMAGES_DELAY, IMAGE_REGEN_DELAY};
use anyhow::Result;
use clap::Subcommand;
use fabula_core::{ChapterId, EditorState, FabulaError, Relay, StorageError};

#[derive(Subcommand)]
pub enum EditCommands {
    /// Show the editing session (expanded chapters print in full)
    Show,

    /// Rename the book
    Title {
        /// New book title
        title: String,
    },

    /// Edit one chapter's fields in place
    Chapter {
        /// Chapter id
        id: ChapterId,

        /// New chapter title
        #[arg(short, long)]
        title: Option<String>,

        /// New chapter body text
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Append a new chapter
    Add {
        /// Title for the new chapter (defaults to "Chapter N")
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Expand or collapse a chapter in `show`
    Toggle {
        /// Chapter id
        id: ChapterId,
    },

    /// Regenerate one chapter's placeholder illustration
    RegenImage {
        /// Chapter id
        id: ChapterId,
    },

    /// Regenerate every chapter's placeholder illustration
    Images,

    /// Write the edited book back and end the session
    Apply,
}

/// Run one editing mutation against the persisted session
pub async fn edit(relay: &Relay, command: EditCommands) -> Result<()> {
    let mut editor = load_editor(relay).await?;

    match command {
        EditCommands::Show => {
            show(&editor);
            return Ok(());
        }

        EditCommands::Title { title } => {
            editor.set_title(&title);
            println!("Book renamed to '{}'.", title);
        }

        EditCommands::Chapter { id, title, content } => {
            if title.is_none() && content.is_none() {
                anyhow::bail!("nothing to change: pass --title and/or --content");
            }
            if let Some(title) = title {
                editor.set_chapter_title(id, title)?;
            }
            if let Some(content) = content {
                editor.set_chapter_content(id, content)?;
            }
            println!("Chapter {} updated.", id);
        }

        EditCommands::Add { title } => {
            let id = editor.add_chapter(title);
            println!("Added chapter {}.", id);
        }

        EditCommands::Toggle { id } => {
            let open = editor.toggle(id)?;
            println!(
                "Chapter {} {}.",
                id,
                if open { "expanded" } else { "collapsed" }
            );
        }

        EditCommands::RegenImage { id } => {
            let pb = spinner("Regenerating image...");
            tokio::time::sleep(IMAGE_REGEN_DELAY).await;
            let url = editor.regenerate_image(id)?;
            pb.finish_and_clear();
            println!("Image regenerated!");
            println!("  {}", url);
        }

        EditCommands::Images => {
            let pb = spinner("Generating all images...");
            tokio::time::sleep(ALL_IMAGES_DELAY).await;
            editor.regenerate_all_images();
            pb.finish_and_clear();
            println!("All images generated!");
        }

        EditCommands::Apply => {
            let book = editor.into_book();
            relay.save_book(&book).await?;
            relay.clear_editor_draft().await?;
            println!("Book changes saved.");
            println!("Next: `fabula-cli preview` or `fabula-cli export`.");
            return Ok(());
        }
    }

    relay.save_editor_draft(&editor.to_draft()).await?;
    Ok(())
}

/// Resume the persisted session, or start one from the generated book
async fn load_editor(relay: &Relay) -> Result<EditorState> {
    match relay.load_editor_draft().await {
        Ok(draft) => Ok(EditorState::from_draft(draft)),
        Err(FabulaError::Storage(StorageError::SlotEmpty(_))) => {
            let book = or_earlier_step(
                relay.load_book().await,
                "No generated book found",
                "generate",
            )?;
            Ok(EditorState::from_book(book))
        }
        Err(err) => Err(err.into()),
    }
}

fn show(editor: &EditorState) {
    let book = editor.book();
    println!("{}", book.title);
    println!(
        "Chapters: {}  Words: ~{}",
        book.chapter_count(),
        editor.word_count()
    );
    println!();

    for chapter in &book.chapters {
        if editor.is_expanded(chapter.id) {
            println!("[-] Chapter {}: {}", chapter.id, chapter.title);
            if let Some(url) = &chapter.image_url {
                println!("    [illustration] {}", url);
            }
            for line in chapter.content.lines() {
                println!("    {}", line);
            }
        } else {
            println!("[+] Chapter {}: {}", chapter.id, chapter.title);
        }
    }
    println!();
    println!("Expand a chapter with `fabula-cli edit toggle <ID>`.");
}
