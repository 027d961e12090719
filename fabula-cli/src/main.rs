//! Fabula CLI - the book-generator demo flow as subcommands
//!
//! Each subcommand is one step of the original flow
//! (create -> generate -> preview -> edit -> export); state is handed
//! between steps through JSON slots in the session directory.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fabula_core::{BookFormat, ChapterId, PageSize};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fabula")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the session's storage slots
    #[arg(long, global = true, default_value = ".fabula")]
    session_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture your book idea and settings
    Create {
        /// What's your book about?
        #[arg(short, long)]
        idea: String,

        /// Output file format (pdf, epub, docx)
        #[arg(short, long)]
        format: BookFormat,

        /// Page size (a4, a5, letter)
        #[arg(short, long)]
        page_size: PageSize,

        /// Optional genre tag
        #[arg(short, long)]
        genre: Option<String>,

        /// Skip placeholder illustrations
        #[arg(long)]
        no_images: bool,
    },

    /// Generate the book from the captured draft
    Generate,

    /// Preview the generated book one chapter at a time
    Preview {
        /// Chapter to show (clamped to the book's range)
        #[arg(short, long, default_value = "1")]
        chapter: ChapterId,

        /// Output the whole book as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit the generated book
    Edit {
        #[command(subcommand)]
        command: commands::EditCommands,
    },

    /// "Download" the finished book
    Export {
        /// Override the format chosen at creation time
        #[arg(short, long)]
        format: Option<BookFormat>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "fabula_cli=debug,fabula_core=debug"
    } else {
        "fabula_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let relay = commands::open_relay(&cli.session_dir);

    match cli.command {
        Commands::Create {
            idea,
            format,
            page_size,
            genre,
            no_images,
        } => commands::create(&relay, &idea, format, page_size, genre, no_images).await,

        Commands::Generate => commands::generate(&relay).await,

        Commands::Preview { chapter, json } => commands::preview(&relay, chapter, json).await,

        Commands::Edit { command } => commands::edit(&relay, command).await,

        Commands::Export { format } => commands::export(&relay, format).await,
    }
}
