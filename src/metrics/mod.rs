//! Basic metrics instrumentation for excerpt generation.
//!
//! Provides counters for matcher recompilations and extraction outcomes.
//! The recompilation counter makes the matcher cache observable: equal
//! keyword sets must not bump it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for excerpt generation.
#[derive(Debug, Clone, Default)]
pub struct ExcerptMetrics {
    /// Number of times the match pattern was compiled
    recompiles_total: Arc<AtomicU64>,

    /// Number of excerpts produced from a keyword match
    matches_total: Arc<AtomicU64>,

    /// Number of extractions that fell back to the body preview
    fallbacks_total: Arc<AtomicU64>,
}

impl ExcerptMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pattern recompilation.
    pub fn record_recompile(&self) {
        self.recompiles_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an excerpt produced from a keyword match.
    pub fn record_match(&self) {
        self.matches_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an extraction that served the fallback preview.
    pub fn record_fallback(&self) {
        self.fallbacks_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total pattern recompilations.
    pub fn recompiles_total(&self) -> u64 {
        self.recompiles_total.load(Ordering::Relaxed)
    }

    /// Get total matched excerpts.
    pub fn matches_total(&self) -> u64 {
        self.matches_total.load(Ordering::Relaxed)
    }

    /// Get total fallback previews served.
    pub fn fallbacks_total(&self) -> u64 {
        self.fallbacks_total.load(Ordering::Relaxed)
    }
}
