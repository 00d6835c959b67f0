//! Error types for statement document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document or locating its header.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Extension not handled by any loader.
    #[error("unsupported document format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Text encoding that the CSV loader cannot decode.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// CSV or spreadsheet content could not be decoded.
    #[error("could not decode {path}: {message}")]
    DocumentUnreadable { path: PathBuf, message: String },

    // === Layout Errors ===
    /// No row satisfied the header rule.
    #[error("header row not found: {reason}")]
    HeaderNotFound { reason: String },
}

impl IngestError {
    /// True for errors raised while reading or decoding the document itself.
    pub fn is_document_error(&self) -> bool {
        !matches!(self, Self::HeaderNotFound { .. })
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn unreadable(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::DocumentUnreadable {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
