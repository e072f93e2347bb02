//! Batch driver: converts many PDFs one after another into a single report.
//!
//! A failure on one file is recorded and the run moves on to the next file.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::converter::Converter;
use crate::error::Result;
use crate::options::DEFAULT_PREVIEW_CHARS;

/// Progress callback, invoked after each file with `(done, total, path)`.
pub type ProgressReporter = Box<dyn Fn(usize, usize, &Path) + Send + Sync>;

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Text written to `output`.
    Written { output: PathBuf },
    /// No output directory: the start of the text is kept for display.
    Preview { text: String },
    Failed { error: String },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, BatchOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub input: PathBuf,
    pub outcome: BatchOutcome,
}

/// Per-file results of a batch run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter()
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }

    /// Failed inputs with their error messages.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            BatchOutcome::Failed { error } => Some((e.input.as_path(), error.as_str())),
            _ => None,
        })
    }
}

/// Builder-style batch run over a borrowed [`Converter`].
pub struct Batch<'a> {
    converter: &'a Converter,
    output_dir: Option<PathBuf>,
    preview_chars: usize,
    progress_reporter: Option<ProgressReporter>,
}

impl<'a> Batch<'a> {
    pub fn new(converter: &'a Converter) -> Self {
        Self {
            converter,
            output_dir: None,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            progress_reporter: None,
        }
    }

    /// Write `<dir>/<stem>.txt` for every converted file.
    /// The directory must already exist.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    pub fn progress_reporter(mut self, reporter: ProgressReporter) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    /// Convert every path in order.
    pub fn run(&self, paths: &[PathBuf]) -> BatchReport {
        let total = paths.len();
        let mut entries = Vec::with_capacity(total);

        for (idx, path) in paths.iter().enumerate() {
            let outcome = match self.convert_one(path) {
                Ok(outcome) => outcome,
                Err(e) => {
                    info!("Failed to convert {}: {}", path.display(), e);
                    BatchOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            entries.push(BatchEntry {
                input: path.clone(),
                outcome,
            });

            if let Some(ref reporter) = self.progress_reporter {
                reporter(idx + 1, total, path);
            }
        }

        let report = BatchReport { entries };
        info!(
            "Batch complete: {} converted, {} failed",
            report.success_count(),
            report.error_count()
        );
        report
    }

    fn convert_one(&self, path: &Path) -> Result<BatchOutcome> {
        let text = self.converter.convert(path)?;

        match self.output_dir {
            Some(ref dir) => {
                let output = output_path_for(dir, path);
                std::fs::write(&output, text)?;
                debug!("Wrote {}", output.display());
                Ok(BatchOutcome::Written { output })
            }
            None => Ok(BatchOutcome::Preview {
                text: preview(&text, self.preview_chars),
            }),
        }
    }
}

/// `<dir>/<input stem>.txt`
pub fn output_path_for(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    dir.join(format!("{}.txt", stem))
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
