//! Pdfium-backed page source.
//!
//! Binds the Pdfium library, loads documents from bytes, and produces
//! [`SourcePage`]s: a rendered raster plus the page's text runs with their
//! declared fill colors, font sizes, and bounds.

use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Rect, Rgb, TextRun};
use crate::raster::PageRaster;
use crate::scan::{PageSource, SourcePage};

/// Page-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Bind the Pdfium library: a copy alongside the executable wins, then the
/// system library paths are searched.
pub fn bind_engine() -> Result<Pdfium> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| Error::Engine(format!("{e:?}")))
}

/// Load a document from an in-memory byte stream.
pub fn load_document<'a>(engine: &'a Pdfium, data: &'a [u8]) -> Result<PdfDocument<'a>> {
    engine
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| Error::DocumentDecode(format!("{e:?}")))
}

/// [`PageSource`] over a loaded Pdfium document.
pub struct PdfiumSource<'a, 'b> {
    document: &'a PdfDocument<'b>,
}

impl<'a, 'b> PdfiumSource<'a, 'b> {
    /// Wrap a loaded document.
    pub fn new(document: &'a PdfDocument<'b>) -> Self {
        Self { document }
    }
}

impl PageSource for PdfiumSource<'_, '_> {
    fn page_count(&self) -> u32 {
        u32::from(self.document.pages().len())
    }

    fn load_page(&self, index: u32, dpi: f32) -> Result<SourcePage> {
        let number = index + 1;
        let page_err =
            |reason: String| Error::PageDecode { page: number, reason };

        let page_index = u16::try_from(index)
            .map_err(|_| Error::PageOutOfRange(number, self.page_count()))?;
        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| page_err(format!("{e:?}")))?;

        let width = page.width().value;
        let height = page.height().value;

        let scale = dpi / POINTS_PER_INCH;
        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| page_err(format!("render: {e:?}")))?;
        let raster = PageRaster::from_image(bitmap.as_image().into_rgb8());

        let mut runs = Vec::new();
        for object in page.objects().iter() {
            let Some(text_object) = object.as_text_object() else {
                continue;
            };

            let text = text_object.text();
            if text.trim().is_empty() {
                continue;
            }

            let fill = text_object
                .fill_color()
                .map_err(|e| page_err(format!("fill color: {e:?}")))?;
            let bounds = text_object
                .bounds()
                .map_err(|e| page_err(format!("bounds: {e:?}")))?;

            let fg = Rgb::new(fill.red(), fill.green(), fill.blue());
            let bbox = flip_bbox(
                height,
                bounds.left().value,
                bounds.top().value,
                bounds.right().value,
                bounds.bottom().value,
            );
            let font_size = text_object.scaled_font_size().value;

            runs.push(TextRun::new(text, font_size, fg, bbox));
        }

        log::debug!(
            "page {}: {}x{} pt, {} runs, raster {}x{} px",
            number,
            width,
            height,
            runs.len(),
            raster.width(),
            raster.height()
        );

        Ok(SourcePage {
            number,
            width,
            height,
            raster,
            runs,
        })
    }
}

/// Convert bottom-up page coordinates (origin at the lower-left corner, as
/// the engine reports them) into the top-down convention the raster uses.
fn flip_bbox(page_height: f32, left: f32, top: f32, right: f32, bottom: f32) -> Rect {
    Rect::new(left, page_height - top, right, page_height - bottom)
}
