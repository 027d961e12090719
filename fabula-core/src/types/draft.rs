//! BookDraft - the creation-form parameters captured before generation

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output file format the user asked for.
///
/// Purely declarative in this demo: no document of this type is ever
/// actually produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookFormat {
    Pdf,
    Epub,
    Docx,
}

impl fmt::Display for BookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookFormat::Pdf => "pdf",
            BookFormat::Epub => "epub",
            BookFormat::Docx => "docx",
        };
        f.write_str(name)
    }
}

impl FromStr for BookFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(BookFormat::Pdf),
            "epub" => Ok(BookFormat::Epub),
            "docx" => Ok(BookFormat::Docx),
            other => Err(format!("unknown format '{}' (expected pdf, epub or docx)", other)),
        }
    }
}

/// Page dimensions for the final book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A4,
    A5,
    Letter,
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageSize::A4 => "a4",
            PageSize::A5 => "a5",
            PageSize::Letter => "letter",
        };
        f.write_str(name)
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            "letter" => Ok(PageSize::Letter),
            other => Err(format!("unknown page size '{}' (expected a4, a5 or letter)", other)),
        }
    }
}

/// The user's submitted book-idea parameters, prior to content generation.
///
/// Overwritten wholesale on each new submission; lives only in the session
/// relay's draft slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDraft {
    /// Free-text description of the book
    pub idea: String,

    /// Optional genre tag, forwarded to the generated book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Requested output format
    pub format: BookFormat,

    /// Requested page size
    #[serde(rename = "pageSize")]
    pub page_size: PageSize,

    /// Whether chapters should carry placeholder illustrations
    #[serde(rename = "enableImages")]
    pub enable_images: bool,

    /// When the form was submitted
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl BookDraft {
    /// Capture a new draft with the submission timestamped now
    pub fn new(idea: impl Into<String>, format: BookFormat, page_size: PageSize) -> Self {
        Self {
            idea: idea.into(),
            genre: None,
            format,
            page_size,
            enable_images: true,
            created_at: Utc::now(),
        }
    }

    /// Set the genre tag
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Disable placeholder illustrations
    pub fn without_images(mut self) -> Self {
        self.enable_images = false;
        self
    }

    /// Reject drafts that would not survive the creation form.
    ///
    /// The idea text is the only free field; format and page size are
    /// enums and cannot be absent here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idea.trim().is_empty() {
            return Err(ValidationError::EmptyIdea);
        }
        Ok(())
    }
}
