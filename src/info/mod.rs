//! Note information rows.
//!
//! The data behind the "Information" card: per-note metrics (dates, word and
//! character counts) and references (the published URL), grouped into
//! sections of rows ready for a table renderer. No UI concerns live here.

use crate::models::Note;
use chrono::{DateTime, Utc};

/// A single row of the information card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InformationRow {
    /// Section header with a title
    Header { title: String },

    /// Label/value metric pair
    Metric { title: String, value: String },

    /// Link row with a URL and the date it was last touched
    Reference {
        url: String,
        title: String,
        date: String,
    },
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformationSection {
    pub rows: Vec<InformationRow>,
}

/// Build the information sections for a note.
///
/// The first section carries the note metrics; a references section follows
/// when the note is published.
pub fn information_sections(note: &Note) -> Vec<InformationSection> {
    let mut sections = vec![InformationSection {
        rows: metric_rows(note),
    }];

    if let Some(url) = &note.published_url {
        sections.push(InformationSection {
            rows: vec![
                InformationRow::Header {
                    title: "References".to_string(),
                },
                InformationRow::Reference {
                    url: url.clone(),
                    title: "Published".to_string(),
                    date: format_date(&note.updated_at),
                },
            ],
        });
    }

    sections
}

fn metric_rows(note: &Note) -> Vec<InformationRow> {
    vec![
        InformationRow::Metric {
            title: "Modified".to_string(),
            value: format_date(&note.updated_at),
        },
        InformationRow::Metric {
            title: "Created".to_string(),
            value: format_date(&note.created_at),
        },
        InformationRow::Metric {
            title: "Words".to_string(),
            value: note.word_count().to_string(),
        },
        InformationRow::Metric {
            title: "Characters".to_string(),
            value: note.character_count().to_string(),
        },
    ]
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %H:%M").to_string()
}
