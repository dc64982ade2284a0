//! Stemmer configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable that controls case folding before stemming.
pub const LOWERCASE_ENV: &str = "ITALSTEM_LOWERCASE";

/// Options applied to every word passed through the stemmer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmerConfig {
    /// Map every character to lowercase before stemming.
    ///
    /// Off by default: the rules only recognise lowercase Italian, so
    /// callers that feed raw text should turn this on.
    pub lowercase_first: bool,
}

impl StemmerConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        let lowercase_first = match std::env::var(LOWERCASE_ENV) {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                Error::Config(format!("{LOWERCASE_ENV}: expected a boolean, got {value:?}"))
            })?,
            Err(_) => false,
        };
        debug!(lowercase_first, "Loaded stemmer configuration");

        Ok(Self { lowercase_first })
    }

    pub fn with_lowercase(mut self, lowercase_first: bool) -> Self {
        self.lowercase_first = lowercase_first;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
