//! Error types for Fretty operations.
//!
//! This module provides the main error type [`FrettyError`] which wraps
//! the error conditions of parsing, rendering, embedding and image output.

use std::io;

use thiserror::Error;

use fretty_parser::ParseError;

/// The main error type for Fretty operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the notation it failed on next to the
/// diagnostics, so that callers can render source snippets for every
/// labelled span.
#[derive(Debug, Error)]
pub enum FrettyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown processor mode `{0}`, expected one of: svg, xml, html")]
    UnknownProcessorMode(String),

    #[error("Embedding error: {0}")]
    Embed(String),

    #[error("Raster error: {0}")]
    Raster(String),
}

impl FrettyError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

impl From<quick_xml::Error> for FrettyError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Embed(err.to_string())
    }
}
