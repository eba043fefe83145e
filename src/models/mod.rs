//! Data models for notes.

mod note;

pub use note::Note;
