//! Error types for the note-excerpt engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Excerpt extraction itself never fails with an error: "no displayable excerpt"
//! is represented as an absent result. The types here cover the internal
//! pattern-compilation path (always degraded, never propagated to callers) and
//! configuration loading.

use thiserror::Error;

/// Errors that can occur while building the excerpt match pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    /// Keyword set contained no usable keywords (empty or whitespace-only)
    #[error("No valid keywords in search set")]
    NoValidKeywords,

    /// The regex engine rejected the assembled pattern
    #[error("Pattern compilation failed: {0}")]
    CompilationFailed(#[from] regex::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with PatternError
pub type PatternResult<T> = Result<T, PatternError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatternError::NoValidKeywords;
        assert_eq!(err.to_string(), "No valid keywords in search set");

        let err = ConfigError::InvalidValue {
            var: "EXCERPT_TRAILING_CONTEXT".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("EXCERPT_TRAILING_CONTEXT"));
        assert!(err.to_string().contains("positive number"));
    }

    #[test]
    fn test_pattern_error_from_regex() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err = PatternError::from(regex_err);
        assert!(err.to_string().contains("Pattern compilation failed"));
    }
}
