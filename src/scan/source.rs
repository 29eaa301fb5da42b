//! Page source abstraction.
//!
//! Isolates the concrete render engine from sampling and classification,
//! so the pipeline can be driven by synthetic pages in tests exactly as it
//! is driven by rendered PDF pages in production.

use crate::error::Result;
use crate::model::TextRun;
use crate::raster::PageRaster;

/// One page as delivered by a source: its raster, its text runs, and its
/// page-space dimensions.
#[derive(Debug, Clone)]
pub struct SourcePage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Rendered surface at the scan resolution
    pub raster: PageRaster,

    /// Non-blank text runs in document order
    pub runs: Vec<TextRun>,
}

/// Abstract supplier of rendered pages.
///
/// Implementations enumerate pages and produce, for each index, the
/// rendered raster together with that page's text runs. Blank runs must
/// already be filtered out. A page that cannot be rendered or walked is a
/// document-level failure, surfaced as an error from [`load_page`].
///
/// [`load_page`]: PageSource::load_page
pub trait PageSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> u32;

    /// Render one page (0-indexed) at the given resolution and extract
    /// its text runs.
    fn load_page(&self, index: u32, dpi: f32) -> Result<SourcePage>;
}
