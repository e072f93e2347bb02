//! Core types for pdf2text: the extraction strategy selector, backend trait,
//! batch orchestration and input discovery.

pub mod backend;
pub mod batch;
pub mod converter;
pub mod discover;
pub mod error;
pub mod options;

pub use backend::{BackendError, BackendKind, PdfBackend};
pub use batch::{Batch, BatchEntry, BatchOutcome, BatchReport, ProgressReporter};
pub use converter::Converter;
pub use error::{ConvertError, InvalidInput, Result};
pub use options::{ConversionOptions, Method};
