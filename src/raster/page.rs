//! Fixed-resolution page rasters.

use image::RgbImage;

use crate::model::Rgb;

/// An immutable rendered surface for one page.
///
/// Pixels are stored as packed RGB8 rows. The buffer is written once when
/// the page is rendered and is read-only afterwards, so it can be shared
/// freely across classification workers.
#[derive(Debug, Clone)]
pub struct PageRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PageRaster {
    /// Wrap a rendered RGB image.
    pub fn from_image(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }

    /// Create a raster filled with a single color. Synthetic pages for
    /// tests and benchmarks start here.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Look up the pixel at `(x, y)`. Callers must stay within bounds;
    /// the sampler clamps its scan window before iterating.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        let idx = ((y * self.width + x) * 3) as usize;
        Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Bounds-checked pixel lookup.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    /// Intended for building synthetic rasters in tests.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 3) as usize;
            self.data[idx] = color.r;
            self.data[idx + 1] = color.g;
            self.data[idx + 2] = color.b;
        }
    }

    /// Fill an axis-aligned region with a color, clamped to the raster.
    /// Intended for building synthetic rasters in tests.
    pub fn fill_region(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set_pixel(x, y, color);
            }
        }
    }
}
