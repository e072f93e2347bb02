//! Backend trait implemented by the PDF text-extraction adapters.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Identifies which extraction library produced a result or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Tolerant page-by-page extraction built on `lopdf`.
    Lopdf,
    /// Layout-aware extraction built on `pdf-extract`.
    PdfExtract,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Lopdf => "lopdf",
            BackendKind::PdfExtract => "pdf-extract",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("parser panicked: {0}")]
    Panicked(String),
}

/// A PDF text-extraction library treated as an opaque page-text producer.
///
/// Implementations open the document, walk its pages in order and return one
/// entry per page. `None` marks a page that yielded no text. Unreadable or
/// malformed documents must be reported through [`BackendError`], never as an
/// empty page list.
pub trait PdfBackend: Send + Sync {
    /// Which library this adapter wraps.
    fn kind(&self) -> BackendKind;

    /// Extract the text of every page of the PDF at `path`, in page order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<Option<String>>, BackendError>;
}
