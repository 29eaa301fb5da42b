//! # ghostink
//!
//! Invisible-text detection for PDF documents.
//!
//! Resumes sometimes carry text meant for screening software rather than
//! for people: white-on-white keyword lists, near-invisible type, print
//! too small to read. ghostink renders each page, samples the pixels
//! actually painted behind every text run, measures perceptual contrast
//! between the run's fill color and that background, and classifies each
//! run as visible, hidden, or hard to see, so that hidden content can be
//! stripped before a resume is scored.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ghostink::{scan_file, strip_hidden};
//!
//! fn main() -> ghostink::Result<()> {
//!     let report = scan_file("resume.pdf")?;
//!     println!(
//!         "{} of {} runs hidden",
//!         report.hidden_count(),
//!         report.run_count()
//!     );
//!
//!     // Redact the separately extracted plain text before scoring.
//!     let plain = std::fs::read_to_string("resume.txt")?;
//!     let clean = strip_hidden(&plain, &report.hidden_text());
//!     println!("{clean}");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pixel-accurate backgrounds**: contrast is measured against what was
//!   actually painted behind each run, not against an assumed page color
//! - **Two output modes**: full per-run reports, or just the hidden texts
//! - **Deterministic**: per-run classification is stateless, so results
//!   are identical whether runs are processed in parallel or not
//! - **Report artifacts**: JSON, CSV, and human-readable log renderings
//! - **Streaming**: per-page events over a channel for large documents

pub mod analyze;
pub mod detect;
pub mod error;
pub mod model;
pub mod raster;
pub mod report;
pub mod sanitize;
pub mod scan;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    ClassifiedRun, PageReport, PixelRect, Rect, Rgb, ScanMetadata, ScanReport, TextRun,
    Visibility,
};
pub use raster::PageRaster;
pub use report::JsonFormat;
pub use sanitize::{strip_hidden, strip_hidden_with_options, SanitizeOptions};
pub use scan::{
    scan_pages, stream_source, PageSelection, PageSource, ScanEvent, ScanOptions, Scanner,
    SourcePage, DEFAULT_DPI,
};

use std::path::Path;

/// Scan a PDF file and return the full per-run report.
///
/// # Example
///
/// ```no_run
/// use ghostink::scan_file;
///
/// let report = scan_file("resume.pdf").unwrap();
/// println!("hidden runs: {}", report.hidden_count());
/// ```
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<ScanReport> {
    Scanner::open(path)?.scan()
}

/// Scan a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use ghostink::{scan_file_with_options, ScanOptions};
///
/// let options = ScanOptions::new().with_dpi(144.0).sequential();
/// let report = scan_file_with_options("resume.pdf", options).unwrap();
/// ```
pub fn scan_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ScanOptions,
) -> Result<ScanReport> {
    Scanner::open_with_options(path, options)?.scan()
}

/// Scan a PDF from bytes and return the full per-run report.
pub fn scan_bytes(data: &[u8]) -> Result<ScanReport> {
    Scanner::from_bytes(data.to_vec())?.scan()
}

/// Scan a PDF from bytes with custom options.
pub fn scan_bytes_with_options(data: &[u8], options: ScanOptions) -> Result<ScanReport> {
    Scanner::from_bytes_with_options(data.to_vec(), options)?.scan()
}

/// Collect only the hidden run texts from a PDF file, in document
/// encounter order.
///
/// # Example
///
/// ```no_run
/// use ghostink::hidden_text_in_file;
///
/// for text in hidden_text_in_file("resume.pdf").unwrap() {
///     println!("concealed: {text}");
/// }
/// ```
pub fn hidden_text_in_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Scanner::open(path)?.hidden_text()
}

/// Collect only the hidden run texts from PDF bytes.
pub fn hidden_text(data: &[u8]) -> Result<Vec<String>> {
    Scanner::from_bytes(data.to_vec())?.hidden_text()
}

/// Scan a PDF file on a blocking worker, without tying up an async
/// executor thread.
#[cfg(feature = "async")]
pub async fn scan_file_async<P: AsRef<Path>>(path: P) -> Result<ScanReport> {
    let data = tokio::fs::read(path.as_ref()).await?;
    let source_name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    tokio::task::spawn_blocking(move || {
        let mut scanner = Scanner::from_bytes(data)?;
        scanner.source_name = source_name;
        scanner.scan()
    })
    .await
    .map_err(|e| Error::Other(format!("scan task failed: {e}")))?
}

/// Scan PDF bytes on a blocking worker.
#[cfg(feature = "async")]
pub async fn scan_bytes_async(data: Vec<u8>) -> Result<ScanReport> {
    tokio::task::spawn_blocking(move || Scanner::from_bytes(data)?.scan())
        .await
        .map_err(|e| Error::Other(format!("scan task failed: {e}")))?
}

/// Builder for configuring and running scans.
///
/// # Example
///
/// ```no_run
/// use ghostink::Ghostink;
///
/// let report = Ghostink::new()
///     .with_dpi(150.0)
///     .with_pages("1-2")?
///     .sequential()
///     .scan("resume.pdf")?;
/// # Ok::<(), ghostink::Error>(())
/// ```
pub struct Ghostink {
    options: ScanOptions,
}

impl Ghostink {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ScanOptions::default(),
        }
    }

    /// Set the raster resolution.
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.options = self.options.with_dpi(dpi);
        self
    }

    /// Restrict the scan to a page selection string (e.g., "1-3", "1,4").
    pub fn with_pages(mut self, pages: &str) -> Result<Self> {
        self.options = self.options.with_pages(PageSelection::parse(pages)?);
        Ok(self)
    }

    /// Restrict the scan to an already-built page selection.
    pub fn with_page_selection(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Disable parallel run classification.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Scan a file with the configured options.
    pub fn scan<P: AsRef<Path>>(self, path: P) -> Result<ScanReport> {
        Scanner::open_with_options(path, self.options)?.scan()
    }

    /// Scan bytes with the configured options.
    pub fn scan_bytes(self, data: &[u8]) -> Result<ScanReport> {
        Scanner::from_bytes_with_options(data.to_vec(), self.options)?.scan()
    }

    /// Collect hidden texts from a file with the configured options.
    pub fn hidden_text<P: AsRef<Path>>(self, path: P) -> Result<Vec<String>> {
        Scanner::open_with_options(path, self.options)?.hidden_text()
    }
}

impl Default for Ghostink {
    fn default() -> Self {
        Self::new()
    }
}
