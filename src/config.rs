//! Configuration management for the note-excerpt engine.
//!
//! This module handles loading and validating configuration from environment
//! variables. All variables are optional; defaults match the behavior of the
//! note app's search results list.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of characters of trailing context kept after a keyword match.
pub const DEFAULT_TRAILING_CONTEXT: usize = 300;

/// Default maximum length of the fallback body preview, in characters.
pub const DEFAULT_PREVIEW_MAX_CHARS: usize = 160;

/// Configuration for the note-excerpt engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Characters of trailing context kept after a keyword match (default: 300)
    pub trailing_context: usize,

    /// Maximum fallback preview length in characters (default: 160)
    pub preview_max_chars: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `EXCERPT_TRAILING_CONTEXT`: trailing context in characters (default: 300)
    /// - `PREVIEW_MAX_CHARS`: max fallback preview length (default: 160)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let trailing_context =
            Self::parse_env_usize("EXCERPT_TRAILING_CONTEXT", DEFAULT_TRAILING_CONTEXT)?;
        let preview_max_chars =
            Self::parse_env_usize("PREVIEW_MAX_CHARS", DEFAULT_PREVIEW_MAX_CHARS)?;

        // A zero-length preview would render every fallback as an empty row
        if preview_max_chars == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PREVIEW_MAX_CHARS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            trailing_context,
            preview_max_chars,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trailing_context: DEFAULT_TRAILING_CONTEXT,
            preview_max_chars: DEFAULT_PREVIEW_MAX_CHARS,
            log_level: "error".to_string(),
        }
    }
}
