//! Search-excerpt generation.
//!
//! Produces the keyword-centered snippet shown under each note in the search
//! results list.

mod maker;

pub use maker::ExcerptMaker;
