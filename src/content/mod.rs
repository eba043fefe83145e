//! Note content analysis.
//!
//! Locates the structural regions of a note's text (title line, body) and
//! derives the short single-line previews shown in the results list.

mod preview;
mod structure;

pub use preview::{collapse_newlines, preview};
pub use structure::NoteContentStructure;
