//! Shared test fixtures: sample notes used across the integration suites.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use note_excerpt::Note;

/// A multi-line note with a title, several body lines, and accents.
pub fn travel_note() -> Note {
    let mut note = Note::new(
        "travel",
        "Trip planning\nVisit the café near the station.\nPack light, bring the résumé for the meetup.",
    );
    note.created_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    note.updated_at = Utc.with_ymd_and_hms(2024, 3, 4, 21, 15, 0).unwrap();
    note
}

/// A note consisting of a single line.
pub fn one_line_note() -> Note {
    Note::new("one-line", "The Quick Brown Fox")
}

/// A note with no content at all.
pub fn empty_note() -> Note {
    Note::new("empty", "")
}

pub fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
