//! Chapter type representing a single chapter of a generated book

use serde::{Deserialize, Serialize};

/// Chapter identity: a 1-based, densely increasing integer.
pub type ChapterId = u32;

/// A single chapter of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    /// 1-based id; ids are unique and contiguous within a book
    pub id: ChapterId,

    /// Chapter title
    pub title: String,

    /// The chapter body text
    pub content: String,

    /// Optional one-paragraph summary shown in previews
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Optional placeholder illustration URL
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Chapter {
    /// Create a new chapter with a title and empty content
    pub fn new(id: ChapterId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            summary: None,
            image_url: None,
        }
    }

    /// Set the body text
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the preview summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the illustration URL
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
