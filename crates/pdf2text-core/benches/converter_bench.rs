//! Strategy selector overhead with in-memory backends.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdf2text_core::{BackendError, BackendKind, Converter, Method, PdfBackend};

/// Returns the same pages every call; never touches the file.
struct StaticBackend {
    kind: BackendKind,
    pages: Vec<Option<String>>,
    fail: bool,
}

impl PdfBackend for StaticBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn extract_pages(&self, _path: &Path) -> Result<Vec<Option<String>>, BackendError> {
        if self.fail {
            Err(BackendError::Extraction("synthetic failure".to_string()))
        } else {
            Ok(self.pages.clone())
        }
    }
}

fn generate_pages(num_pages: usize) -> Vec<Option<String>> {
    (0..num_pages)
        .map(|i| {
            if i % 5 == 4 {
                None
            } else {
                Some(format!(
                    "Page {} Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
                     tempor incididunt ut labore et dolore magna aliqua.",
                    i
                ))
            }
        })
        .collect()
}

fn converter(method: Method, num_pages: usize, pdf_extract_fails: bool) -> Converter {
    Converter::new(
        method,
        Box::new(StaticBackend {
            kind: BackendKind::Lopdf,
            pages: generate_pages(num_pages),
            fail: false,
        }),
        Box::new(StaticBackend {
            kind: BackendKind::PdfExtract,
            pages: generate_pages(num_pages),
            fail: pdf_extract_fails,
        }),
    )
}

fn bench_convert(c: &mut Criterion) {
    let input = std::env::temp_dir().join("pdf2text_bench_input.pdf");
    std::fs::write(&input, b"%PDF-1.4").unwrap();

    let mut group = c.benchmark_group("Converter");
    for n in [10, 500] {
        let direct = converter(Method::PdfExtract, n, false);
        group.bench_function(format!("pdf_extract_{}_pages", n), |b| {
            b.iter(|| direct.convert(black_box(&input)).unwrap())
        });

        let fallback = converter(Method::Auto, n, true);
        group.bench_function(format!("auto_fallback_{}_pages", n), |b| {
            b.iter(|| fallback.convert(black_box(&input)).unwrap())
        });
    }
    group.finish();

    std::fs::remove_file(&input).ok();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
