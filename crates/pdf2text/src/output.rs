//! Console rendering for single-file and batch runs.

use std::fmt::Write;

use pdf2text_core::{BatchOutcome, BatchReport};

const RULE_WIDTH: usize = 50;

/// Extracted text framed by a header, for single-file runs without `-o`.
pub fn render_extracted_text(text: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\nEXTRACTED TEXT:\n{rule}\n{text}")
}

/// Summary printed after a batch run.
///
/// Previews and the per-file error list are only included when `verbose`.
pub fn render_summary(report: &BatchReport, verbose: bool) -> String {
    let mut out = String::new();

    if verbose {
        for entry in report.iter() {
            if let BatchOutcome::Preview { text } = &entry.outcome {
                let _ = writeln!(out, "\n--- {} ---\n{}", entry.input.display(), text);
            }
        }
    }

    let _ = writeln!(
        out,
        "\n✅ Successfully converted: {}/{}",
        report.success_count(),
        report.len()
    );

    let errors = report.error_count();
    if errors > 0 {
        let _ = writeln!(out, "❌ Failed: {}", errors);
        if verbose {
            let _ = writeln!(out, "\nErrors:");
            for (path, error) in report.failures() {
                let _ = writeln!(out, "  - {}: {}", path.display(), error);
            }
        }
    }

    out
}
