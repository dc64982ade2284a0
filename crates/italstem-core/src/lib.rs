//! italstem core — shared error type and stemmer configuration.

pub mod config;
pub mod error;

pub use config::{StemmerConfig, LOWERCASE_ENV};
pub use error::{Error, Result};
