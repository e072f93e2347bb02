//! pdf-extract backend: layout-aware text extraction, preferred in auto mode.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use pdf2text_core::{BackendError, BackendKind, PdfBackend};

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::PdfExtract
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<Option<String>>, BackendError> {
        // pdf-extract can panic on malformed files, so catch panics
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_by_pages(path)
        }))
        .map_err(|payload| BackendError::Panicked(panic_message(payload.as_ref())))?
        .map_err(|e| BackendError::Extraction(e.to_string()))?;

        log::debug!("{}: {} pages", path.display(), pages.len());

        Ok(pages
            .into_iter()
            .map(|text| if text.is_empty() { None } else { Some(text) })
            .collect())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "malformed file".to_string()
    }
}
