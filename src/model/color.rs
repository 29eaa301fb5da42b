//! RGB color type used throughout the scan pipeline.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
///
/// Colors are compared only in this space; alpha is never carried. This is
/// the declared fill color of a text run, the color of a raster pixel, and
/// the sampled background behind a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Pure white, the fallback background for degenerate sample regions.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Pure black.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Create a color from individual channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a packed 24-bit integer (`0xRRGGBB`) into channels.
    ///
    /// Layout engines commonly report span colors in this packed form.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Channel-wise closeness test: true when every channel of `other`
    /// differs from this color by strictly less than `delta`.
    ///
    /// The background sampler uses this to drop pixels that are presumed
    /// glyph strokes rather than paint behind the glyphs.
    pub fn within_delta(self, other: Rgb, delta: u8) -> bool {
        self.r.abs_diff(other.r) < delta
            && self.g.abs_diff(other.g) < delta
            && self.b.abs_diff(other.b) < delta
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}
