//! Extraction strategy selector.
//!
//! Picks a backend according to [`Method`], assembles page text, and in
//! [`Method::Auto`] falls back from pdf-extract to lopdf once when the first
//! attempt fails or comes back blank.

use std::path::Path;

use log::{debug, info};

use crate::backend::{BackendKind, PdfBackend};
use crate::error::{ConvertError, InvalidInput, Result};
use crate::options::Method;

/// Converts one PDF at a time using a fixed extraction method.
pub struct Converter {
    method: Method,
    lopdf: Box<dyn PdfBackend>,
    pdf_extract: Box<dyn PdfBackend>,
}

impl Converter {
    pub fn new(
        method: Method,
        lopdf: Box<dyn PdfBackend>,
        pdf_extract: Box<dyn PdfBackend>,
    ) -> Self {
        debug_assert_eq!(lopdf.kind(), BackendKind::Lopdf);
        debug_assert_eq!(pdf_extract.kind(), BackendKind::PdfExtract);
        Self {
            method,
            lopdf,
            pdf_extract,
        }
    }

    /// Convert the PDF at `path` to plain text.
    ///
    /// The path is validated before any backend is touched: it must exist and
    /// carry a `.pdf` extension (any case).
    pub fn convert(&self, path: &Path) -> Result<String> {
        validate_input(path)?;

        match self.method {
            Method::Lopdf => self.extract_with_lopdf(path),
            Method::PdfExtract => self.extract_with_pdf_extract(path),
            Method::Auto => self.extract_auto(path),
        }
    }

    fn extract_auto(&self, path: &Path) -> Result<String> {
        match self.extract_with_pdf_extract(path) {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                debug!(
                    "pdf-extract returned no text for {}, falling back to lopdf",
                    path.display()
                );
                self.extract_with_lopdf(path)
            }
            Err(e @ ConvertError::Backend { .. }) => {
                info!("{}; falling back to lopdf for {}", e, path.display());
                self.extract_with_lopdf(path)
            }
            Err(e) => Err(e),
        }
    }

    /// All pages, blank ones included as empty lines.
    fn extract_with_lopdf(&self, path: &Path) -> Result<String> {
        let pages = self
            .lopdf
            .extract_pages(path)
            .map_err(|e| ConvertError::backend(self.lopdf.kind(), e))?;
        debug!("lopdf extracted {} pages from {}", pages.len(), path.display());
        Ok(join_all_pages(pages))
    }

    /// Only pages that produced text.
    fn extract_with_pdf_extract(&self, path: &Path) -> Result<String> {
        let pages = self
            .pdf_extract
            .extract_pages(path)
            .map_err(|e| ConvertError::backend(self.pdf_extract.kind(), e))?;
        debug!(
            "pdf-extract extracted {} pages from {}",
            pages.len(),
            path.display()
        );
        Ok(join_text_pages(pages))
    }
}

/// Check that `path` exists and names a PDF file.
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(InvalidInput::NotFound(path.to_path_buf()).into());
    }
    if !is_pdf_path(path) {
        return Err(InvalidInput::NotPdf(path.to_path_buf()).into());
    }
    Ok(())
}

/// Whether `path` has a `.pdf` extension, ignoring case.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn join_all_pages(pages: Vec<Option<String>>) -> String {
    pages
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_text_pages(pages: Vec<Option<String>>) -> String {
    pages
        .into_iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
