//! Error types for the kpdf-core library.
//!
//! Section generators never fail: missing or unrecognised business data
//! degrades to empty values. Errors only surface at the edges, when loading
//! configuration or invoice records.

use thiserror::Error;

/// Main error type for the kpdf library.
#[derive(Error, Debug)]
pub enum KpdfError {
    /// The invoice record could not be decoded.
    #[error("invalid invoice record: {0}")]
    Input(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the kpdf library.
pub type Result<T> = std::result::Result<T, KpdfError>;
