use std::path::PathBuf;

use thiserror::Error;

use crate::backend::{BackendError, BackendKind};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("{backend} extraction failed: {source}")]
    Backend {
        backend: BackendKind,
        #[source]
        source: BackendError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF discovery error: {0}")]
    Discovery(String),
}

impl ConvertError {
    pub fn backend(backend: BackendKind, source: BackendError) -> Self {
        ConvertError::Backend { backend, source }
    }

    /// The backend that raised this error, if it came from one.
    pub fn failed_backend(&self) -> Option<BackendKind> {
        match self {
            ConvertError::Backend { backend, .. } => Some(*backend),
            _ => None,
        }
    }
}

/// Rejected input paths. Checked before any backend runs.
#[derive(Error, Debug)]
pub enum InvalidInput {
    #[error("PDF file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File must be a PDF: {}", .0.display())]
    NotPdf(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
