//! Conversion-level failures.

use std::fmt;

use thiserror::Error;

use banknorm_ingest::IngestError;
use banknorm_map::MappingError;

/// Classification of errors that abort a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalKind {
    DocumentUnreadable,
    HeaderNotFound,
    MissingColumn,
    AmbiguousColumnMapping,
    NoMatchingProfile,
}

impl FatalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DocumentUnreadable => "DocumentUnreadable",
            Self::HeaderNotFound => "HeaderNotFound",
            Self::MissingColumn => "MissingColumn",
            Self::AmbiguousColumnMapping => "AmbiguousColumnMapping",
            Self::NoMatchingProfile => "NoMatchingProfile",
        }
    }
}

impl fmt::Display for FatalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error that stops the conversion; no output should be written.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("no profile matched the document (tried: {})", tried.join(", "))]
    NoMatchingProfile { tried: Vec<String> },
}

impl ConvertError {
    pub fn kind(&self) -> FatalKind {
        match self {
            Self::Ingest(error) if error.is_document_error() => FatalKind::DocumentUnreadable,
            Self::Ingest(_) => FatalKind::HeaderNotFound,
            Self::Mapping(MappingError::MissingColumn { .. }) => FatalKind::MissingColumn,
            Self::Mapping(MappingError::AmbiguousColumnMapping { .. }) => {
                FatalKind::AmbiguousColumnMapping
            }
            Self::NoMatchingProfile { .. } => FatalKind::NoMatchingProfile,
        }
    }
}
