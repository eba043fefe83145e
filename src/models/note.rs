//! Note model.
//!
//! A note is a single text document. Its first non-blank line doubles as the
//! title; the remainder is the body shown in previews and excerpts.

use crate::config::DEFAULT_PREVIEW_MAX_CHARS;
use crate::content::{self, NoteContentStructure};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note in the note app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Note {
    /// Unique identifier for the note
    pub id: String,

    /// Full text content; absent for notes that were never written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// When the note was created
    pub created_at: DateTime<Utc>,

    /// When the note was last modified
    pub updated_at: DateTime<Utc>,

    /// Tags associated with the note
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Whether the note is pinned to the top of the list
    pub pinned: bool,

    /// Whether the note renders as Markdown
    pub markdown: bool,

    /// Public URL when the note is published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_url: Option<String>,
}

impl Default for Note {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            content: None,
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
            pinned: false,
            markdown: false,
            published_url: None,
        }
    }
}

impl Note {
    /// Create a new note with the given id and content.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// The title line of the note, if any.
    pub fn title(&self) -> Option<&str> {
        let content = self.content.as_deref()?;
        NoteContentStructure::parse(content).title_in(content)
    }

    /// The body of the note, if any. For a single-line note the title line
    /// doubles as the body.
    pub fn body(&self) -> Option<&str> {
        let content = self.content.as_deref()?;
        NoteContentStructure::parse(content).body_in(content)
    }

    /// Short single-line preview of the body, used as the fallback excerpt
    /// in the results list.
    pub fn body_preview(&self) -> Option<String> {
        self.body_preview_with(DEFAULT_PREVIEW_MAX_CHARS)
    }

    /// Body preview bounded to `max_chars` characters.
    pub fn body_preview_with(&self, max_chars: usize) -> Option<String> {
        let content = self.content.as_deref()?;
        content::preview(content, max_chars)
    }

    /// Number of words in the content.
    pub fn word_count(&self) -> usize {
        self.content
            .as_deref()
            .map(|c| c.split_whitespace().count())
            .unwrap_or(0)
    }

    /// Number of characters in the content.
    pub fn character_count(&self) -> usize {
        self.content
            .as_deref()
            .map(|c| c.chars().count())
            .unwrap_or(0)
    }
}
