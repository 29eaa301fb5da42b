//! Page rasterization.
//!
//! [`PageRaster`] is the fixed-resolution pixel grid a page renders into;
//! the `engine` submodule wires the Pdfium render engine up as a
//! [`PageSource`](crate::scan::PageSource).

mod engine;
mod page;

pub use engine::{bind_engine, load_document, PdfiumSource, POINTS_PER_INCH};
pub use page::PageRaster;
