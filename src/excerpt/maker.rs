//! Excerpt maker: generate an excerpt from a note with specified keywords.
//!
//! The maker owns a compiled match pattern derived from the current keyword
//! set. Compilation is amortized across extraction calls: the pattern is only
//! rebuilt when the keyword set changes by value, which keeps UI-driven
//! re-renders from recompiling on every row.

use crate::config::DEFAULT_TRAILING_CONTEXT;
use crate::content::{collapse_newlines, NoteContentStructure};
use crate::error::PatternError;
use crate::matching::{build_excerpt_pattern, fold_diacritics};
use crate::metrics::ExcerptMetrics;
use crate::models::Note;
use regex::Regex;
use tracing::warn;

/// Generates keyword-centered excerpts from note bodies.
///
/// Single-threaded by design: the maker is owned by the component rendering
/// the results list and is never shared across threads.
#[derive(Debug)]
pub struct ExcerptMaker {
    keywords: Option<Vec<String>>,
    matcher: Option<Regex>,
    trailing_context: usize,
    metrics: ExcerptMetrics,
}

impl ExcerptMaker {
    /// Create a maker with the default trailing-context bound.
    pub fn new() -> Self {
        Self::with_trailing_context(DEFAULT_TRAILING_CONTEXT)
    }

    /// Create a maker keeping up to `trailing_context` characters after the
    /// matched keyword.
    pub fn with_trailing_context(trailing_context: usize) -> Self {
        Self {
            keywords: None,
            matcher: None,
            trailing_context,
            metrics: ExcerptMetrics::new(),
        }
    }

    /// Update the search keywords.
    ///
    /// A set value-equal to the current one is a no-op and preserves the
    /// cached pattern. An empty or absent set clears the pattern, so
    /// subsequent extractions fall back to the plain preview. A set with no
    /// valid keywords (all empty or whitespace-only) behaves like an empty
    /// set. Pattern compilation failure is degraded to the no-pattern path,
    /// never surfaced to the caller.
    pub fn update_keywords(&mut self, keywords: Option<&[String]>) {
        if self.keywords.as_deref() == keywords {
            return;
        }

        self.keywords = keywords.map(<[String]>::to_vec);

        let keywords = match keywords {
            Some(k) if !k.is_empty() => k,
            _ => {
                self.matcher = None;
                return;
            }
        };

        match build_excerpt_pattern(keywords, self.trailing_context) {
            Ok(pattern) => {
                self.matcher = Some(pattern);
                self.metrics.record_recompile();
            }
            Err(PatternError::NoValidKeywords) => {
                self.matcher = None;
            }
            Err(err) => {
                warn!("Excerpt pattern rejected, falling back to previews: {err}");
                self.matcher = None;
            }
        }
    }

    /// The currently stored keyword set.
    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    /// Whether a compiled match pattern is currently cached.
    pub fn has_matcher(&self) -> bool {
        self.matcher.is_some()
    }

    /// Metrics for this maker, including the recompilation counter.
    pub fn metrics(&self) -> &ExcerptMetrics {
        &self.metrics
    }

    /// Generate the excerpt for a note, falling back to its body preview.
    pub fn excerpt(&self, note: &Note) -> Option<String> {
        let fallback = note.body_preview();
        self.excerpt_from_text(note.content.as_deref(), fallback.as_deref())
    }

    /// Generate a keyword-centered excerpt from `content`.
    ///
    /// Returns `fallback` unchanged when no pattern is configured, `content`
    /// is absent, or no keyword matches inside the body. Returns `None` when
    /// the content has no body to excerpt (empty or whitespace-only notes).
    pub fn excerpt_from_text(
        &self,
        content: Option<&str>,
        fallback: Option<&str>,
    ) -> Option<String> {
        let (matcher, content) = match (&self.matcher, content) {
            (Some(matcher), Some(content)) => (matcher, content),
            _ => {
                self.metrics.record_fallback();
                return fallback.map(str::to_owned);
            }
        };

        // Matching runs over the folded text so accents never get in the way.
        let folded = fold_diacritics(content);
        let structure = NoteContentStructure::parse(&folded);
        let body = structure.body()?;

        // The search never leaves the body: matches inside the title line
        // must not produce excerpts.
        let matched = match matcher.find(&folded[body.clone()]) {
            Some(matched) => matched,
            None => {
                self.metrics.record_fallback();
                return fallback.map(str::to_owned);
            }
        };

        let match_start = body.start + matched.start();
        let match_end = body.start + matched.end();

        // When folding preserved the char count, offsets map one-to-one and
        // the excerpt can keep the original diacritics and casing. Otherwise
        // slicing the folded text is the safe fallback.
        let excerpt = if folded.chars().count() == content.chars().count() {
            chars_at_folded_offsets(content, &folded, match_start, match_end)
        } else {
            folded[match_start..match_end].to_string()
        };

        let mut excerpt = collapse_newlines(&excerpt);

        // A leading ellipsis signals elided body text before the match. A
        // single-line note has no separate body, so its excerpts never carry
        // one.
        if match_start > body.start && structure.has_separate_body() {
            excerpt.insert(0, '…');
        }

        self.metrics.record_match();
        Some(excerpt)
    }
}

impl Default for ExcerptMaker {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the chars of `original` corresponding to the byte range
/// `start..end` of `folded`, assuming both strings have the same char count.
fn chars_at_folded_offsets(original: &str, folded: &str, start: usize, end: usize) -> String {
    let start_chars = folded[..start].chars().count();
    let len_chars = folded[start..end].chars().count();

    original.chars().skip(start_chars).take(len_chars).collect()
}
