//! Options shared by the CLI and the batch driver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default number of characters kept in a batch preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// All options controlling a conversion run.
/// Loaded from TOML config files and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    pub method: Method,
    pub recursive: bool,
    pub verbose: u8,
    /// Length of the text preview recorded per file when no output directory is given.
    pub preview_chars: usize,
    /// Show a progress bar during batch conversion.
    pub progress: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            method: Method::Auto,
            recursive: false,
            verbose: 0,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            progress: true,
        }
    }
}

/// Extraction strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Try pdf-extract, fall back to lopdf on failure or blank output.
    #[default]
    Auto,
    /// lopdf only; blank pages are kept as empty lines.
    Lopdf,
    /// pdf-extract only; blank pages are dropped.
    PdfExtract,
}

impl Method {
    pub const NAMES: [&'static str; 3] = ["auto", "lopdf", "pdf-extract"];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Auto => "auto",
            Method::Lopdf => "lopdf",
            Method::PdfExtract => "pdf-extract",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Method::Auto),
            "lopdf" => Ok(Method::Lopdf),
            "pdf-extract" => Ok(Method::PdfExtract),
            other => Err(format!(
                "unknown extraction method '{}' (expected one of: {})",
                other,
                Method::NAMES.join(", ")
            )),
        }
    }
}
