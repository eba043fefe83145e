//! Keyword matching utilities.
//!
//! Diacritic folding and excerpt pattern construction used by the excerpt
//! maker to locate the first keyword match inside a note body.

mod folding;
mod pattern;

pub use folding::fold_diacritics;
pub use pattern::build_excerpt_pattern;
