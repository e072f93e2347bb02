//! pdf2text — convert PDF files to plain text.
//!
//! Single file: `pdf2text input.pdf [-o output.txt]`
//! Directory:   `pdf2text papers/ [-o out_dir/] [-r]`

mod output;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use pdf2text_backend_lopdf::LopdfBackend;
use pdf2text_backend_pdf_extract::PdfExtractBackend;
use pdf2text_core::discover::find_pdfs;
use pdf2text_core::{Batch, BatchReport, ConversionOptions, Converter, Method};

#[derive(Parser)]
#[command(name = "pdf2text", version, about = "Convert PDF files to plain text")]
struct Cli {
    /// PDF file or directory of PDF files (not needed with --dump-config)
    input: Option<PathBuf>,

    /// Output file (single PDF) or directory (batch)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extraction method: auto, lopdf, pdf-extract (default: auto)
    #[arg(short, long, value_parser = Method::NAMES)]
    method: Option<String>,

    /// Search directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not draw a progress bar in batch mode
    #[arg(long)]
    no_progress: bool,

    /// Dump effective merged config as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

/// Load config from global and project-local TOML files.
/// The project-local file replaces the global one. Missing files are ignored;
/// parse failures are returned as warnings so they can be logged once the
/// logger is configured from the merged verbosity.
fn load_config() -> (ConversionOptions, Vec<String>) {
    let mut opts = ConversionOptions::default();
    let mut warnings = Vec::new();

    let mut candidates = Vec::new();
    // 1. Global config: ~/.config/pdf2text/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("pdf2text").join("config.toml"));
    }
    // 2. Project-local config: ./.pdf2text.toml
    candidates.push(PathBuf::from(".pdf2text.toml"));

    for path in candidates {
        match read_config_file(&path) {
            Ok(Some(parsed)) => opts = parsed,
            Ok(None) => {}
            Err(warning) => warnings.push(warning),
        }
    }

    (opts, warnings)
}

/// `Ok(None)` when the file does not exist or cannot be read.
fn read_config_file(path: &Path) -> std::result::Result<Option<ConversionOptions>, String> {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Ok(None);
    };
    toml::from_str::<ConversionOptions>(&contents)
        .map(Some)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Apply CLI flags on top of config-loaded options.
/// Only overrides when the flag was given.
fn apply_cli_overrides(opts: &mut ConversionOptions, cli: &Cli) -> Result<()> {
    if cli.verbose > 0 {
        opts.verbose = cli.verbose;
    }
    if cli.recursive {
        opts.recursive = true;
    }
    if cli.no_progress {
        opts.progress = false;
    }
    if let Some(ref method) = cli.method {
        opts.method = method.parse::<Method>().map_err(anyhow::Error::msg)?;
    }
    Ok(())
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .init();
}

fn render_config(opts: &ConversionOptions) -> Result<String> {
    toml::to_string_pretty(opts).context("Error serializing config")
}

fn build_converter(method: Method) -> Converter {
    Converter::new(
        method,
        Box::new(LopdfBackend::new()),
        Box::new(PdfExtractBackend::new()),
    )
}

fn main() {
    let cli = Cli::parse();

    let (mut opts, warnings) = load_config();
    let overrides = apply_cli_overrides(&mut opts, &cli);

    init_logging(opts.verbose);
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    if let Err(e) = overrides {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    if cli.dump_config {
        match render_config(&opts) {
            Ok(s) => {
                println!("{}", s);
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{:#}", e);
                process::exit(1);
            }
        }
    }

    let Some(input) = cli.input.as_deref() else {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided: <INPUT>",
            )
            .exit();
    };

    let converter = build_converter(opts.method);
    let code = match run(&converter, input, cli.output.as_deref(), &opts) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            1
        }
    };
    process::exit(code);
}

/// Dispatch on the input kind and return the process exit code.
fn run(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
    opts: &ConversionOptions,
) -> Result<i32> {
    if input.is_file() {
        convert_single(converter, input, output, opts)
    } else if input.is_dir() {
        convert_directory(converter, input, output, opts)?;
        Ok(0)
    } else {
        eprintln!("Invalid path: {}", input.display());
        Ok(1)
    }
}

fn convert_single(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
    opts: &ConversionOptions,
) -> Result<i32> {
    if opts.verbose > 0 {
        println!("Converting single PDF: {}", input.display());
    }

    let text = match converter.convert(input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            return Ok(1);
        }
    };

    match output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            println!("✅ Successfully converted to: {}", output_path.display());
        }
        None => println!("{}", output::render_extracted_text(&text)),
    }

    Ok(0)
}

/// Convert every PDF in `dir`. Returns `None` when the directory holds no PDFs.
fn convert_directory(
    converter: &Converter,
    dir: &Path,
    output_dir: Option<&Path>,
    opts: &ConversionOptions,
) -> Result<Option<BatchReport>> {
    let pdfs = find_pdfs(dir, opts.recursive)?;
    if pdfs.is_empty() {
        println!("No PDF files found in {}", dir.display());
        return Ok(None);
    }

    println!("Found {} PDF files", pdfs.len());

    let mut batch = Batch::new(converter).preview_chars(opts.preview_chars);
    if let Some(out) = output_dir {
        std::fs::create_dir_all(out)
            .with_context(|| format!("Failed to create output directory {}", out.display()))?;
        batch = batch.output_dir(out);
    }

    let bar = progress_bar(pdfs.len() as u64, opts.progress);
    let verbose = opts.verbose > 0;
    let reporter_bar = bar.clone();
    batch = batch.progress_reporter(Box::new(move |_done, _total, path: &Path| {
        if verbose {
            let line = format!("Processed {}", path.display());
            if reporter_bar.is_hidden() {
                println!("{}", line);
            } else {
                reporter_bar.println(line);
            }
        }
        reporter_bar.inc(1);
    }));

    let report = batch.run(&pdfs);
    bar.finish_and_clear();

    print!("{}", output::render_summary(&report, verbose));
    Ok(Some(report))
}

fn progress_bar(len: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::with_template("{msg} [{bar:40.cyan/dim}] {pos}/{len} ({elapsed}, eta {eta})")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message("Converting PDFs");
    bar
}
