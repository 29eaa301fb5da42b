//! Background color sampling.
//!
//! For each text run we need the color actually painted behind its glyphs.
//! Sampling the whole bounding box would mix glyph ink into the estimate
//! and drag contrast down for perfectly legible text, so the sampler
//! restricts itself to the vertical middle band of the box and drops any
//! pixel close to the run's own fill color.

use std::collections::HashMap;

use crate::model::{PixelRect, Rgb};
use crate::raster::PageRaster;

/// A pixel within this channel-wise distance of the foreground (in all
/// three channels) is presumed glyph stroke and excluded from sampling.
pub const GLYPH_EXCLUSION_DELTA: u8 = 20;

/// The sampled band starts this far down the bounding box, skipping
/// ascender pixels.
const BAND_START: f32 = 0.35;

/// The sampled band ends this far down the bounding box, skipping
/// descender pixels.
const BAND_END: f32 = 0.65;

/// Sample the dominant background color behind a run.
///
/// `bbox` is the run's bounding box already converted to raster pixels.
/// Returns the most frequently occurring surviving pixel color; ties go to
/// the color that reached the winning count first. When nothing survives
/// (degenerate box, or every pixel matched the foreground), the background
/// defaults to white: ambiguous runs read as printed on white paper.
pub fn sample_background(raster: &PageRaster, bbox: PixelRect, fg: Rgb) -> Rgb {
    if bbox.is_degenerate() {
        return Rgb::WHITE;
    }

    let box_height = bbox.y1 - bbox.y0;
    let band_y0 = bbox.y0 + (box_height as f32 * BAND_START) as u32;
    let band_y1 = bbox.y0 + (box_height as f32 * BAND_END) as u32;

    let mut counts: HashMap<Rgb, u32> = HashMap::new();
    let mut dominant: Option<(Rgb, u32)> = None;

    for y in band_y0..band_y1.min(raster.height()) {
        for x in bbox.x0..bbox.x1.min(raster.width()) {
            let pixel = raster.pixel(x, y);
            if pixel.within_delta(fg, GLYPH_EXCLUSION_DELTA) {
                continue;
            }

            let count = counts.entry(pixel).or_insert(0);
            *count += 1;
            match dominant {
                Some((_, best)) if *count <= best => {}
                _ => dominant = Some((pixel, *count)),
            }
        }
    }

    dominant.map_or(Rgb::WHITE, |(color, _)| color)
}
