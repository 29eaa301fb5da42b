//! PDF header sniffing.
//!
//! A scan rejects non-PDF input before the render engine is ever bound, so
//! the caller gets a clean "not a PDF" failure instead of an engine error.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Version string length, e.g. "1.7"
const VERSION_LEN: usize = 3;

/// Header information sniffed from the start of a PDF byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSignature {
    /// PDF version declared in the header (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Sniff the PDF header from the leading bytes of a byte stream.
///
/// Returns `Err(Error::UnknownFormat)` if the data does not start with the
/// PDF magic, and `Err(Error::UnsupportedVersion)` if the declared version
/// is malformed.
pub fn sniff_header(data: &[u8]) -> Result<PdfSignature> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    if !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfSignature { version })
}

/// Sniff the PDF header of a file.
pub fn sniff_file<P: AsRef<Path>>(path: P) -> Result<PdfSignature> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    reader.read_exact(&mut header)?;
    sniff_header(&header)
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf(data: &[u8]) -> bool {
    sniff_header(data).is_ok()
}

/// A version string is a single digit, a dot, and a single digit.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}
