//! lopdf backend: loads the whole document and extracts text page by page.
//!
//! lopdf copes with a wide range of slightly broken files, so this backend is
//! the fallback in auto mode. Blank pages are reported as `None`.

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

use std::path::Path;

use lopdf::Document;

use pdf2text_core::{BackendError, BackendKind, PdfBackend};

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Lopdf
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<Option<String>>, BackendError> {
        let doc = Document::load(path).map_err(|e| BackendError::Open(e.to_string()))?;

        // BTreeMap keyed by page number, so iteration is already in page order.
        let pages = doc.get_pages();
        log::debug!("{}: {} pages", path.display(), pages.len());

        let mut texts = Vec::with_capacity(pages.len());
        for &page_num in pages.keys() {
            let text = doc
                .extract_text(&[page_num])
                .map_err(|e| BackendError::Extraction(format!("page {}: {}", page_num, e)))?;
            texts.push(if text.is_empty() { None } else { Some(text) });
        }

        Ok(texts)
    }
}
