//! Error types for lemin operations.
//!
//! This module provides the main error type [`LeminError`] which wraps
//! the failures that can occur while processing a map.

use std::io;

use thiserror::Error;

use lemin_parser::error::ParseError;

/// The main error type for lemin operations.
///
/// # Diagnostic Variants
///
/// The `Format` variant carries the diagnostics of the violated rule together
/// with the source they point into, for rich error reporting.
#[derive(Debug, Error)]
pub enum LeminError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Format { err: ParseError, src: String },

    #[error("room \"{0}\" cannot be reached from the start room")]
    Unreachable(String),
}

impl LeminError {
    /// Create a new `Format` error with the associated source text.
    pub fn new_format_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Format {
            err,
            src: src.into(),
        }
    }

    /// Returns `true` if the input map was rejected.
    ///
    /// I/O and configuration failures are not map errors.
    pub fn is_invalid_map(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::Unreachable(_))
    }
}
