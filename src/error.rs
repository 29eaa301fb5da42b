//! Error types for the ghostink library.

use std::io;
use thiserror::Error;

/// Result type alias for ghostink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while scanning a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The byte stream is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header declares a version we do not understand.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The render engine could not be loaded or bound.
    #[error("Render engine unavailable: {0}")]
    Engine(String),

    /// The document could not be opened or its structure walked.
    /// Fatal for the whole document; no partial result is produced.
    #[error("Document decode error: {0}")]
    DocumentDecode(String),

    /// A single page could not be rasterized or its text layout read.
    /// Also fatal for the document: a half-scanned resume must not be scored.
    #[error("Page {page} decode error: {reason}")]
    PageDecode {
        /// 1-indexed page number
        page: u32,
        /// Engine-reported cause
        reason: String,
    },

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page selection specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error producing a report artifact (JSON, CSV, log).
    #[error("Report error: {0}")]
    Report(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
