//! note-excerpt - Search-excerpt generation engine for a note app's results list.
//!
//! This library produces the short, human-readable snippet shown under each
//! note in a search results list: given a note's text and the active search
//! keywords, it locates the first keyword match inside the note body and
//! extracts the surrounding text, handling diacritic folding, title
//! exclusion, newline collapsing, and leading-ellipsis insertion.
//!
//! # Architecture
//!
//! - **models**: The note data model
//! - **content**: Body structure analysis and single-line previews
//! - **matching**: Diacritic folding and excerpt pattern construction
//! - **excerpt**: The excerpt maker with its cached compiled pattern
//! - **events**: Explicit layout-change event subscription
//! - **info**: Note information rows (metrics, references)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Counters for recompilations and extraction outcomes

// Re-export commonly used types
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod excerpt;
pub mod info;
pub mod matching;
pub mod metrics;
pub mod models;

pub use config::Config;
pub use content::NoteContentStructure;
pub use error::{ConfigError, PatternError};
pub use events::{FrameChange, LayoutEventBus, Rect, SubscriptionId};
pub use excerpt::ExcerptMaker;
pub use info::{information_sections, InformationRow, InformationSection};
pub use metrics::ExcerptMetrics;
pub use models::Note;
