//! Text runs: the unit of classification.

use serde::{Deserialize, Serialize};

use super::{Rect, Rgb};

/// A maximal stretch of text sharing one font, size, and fill color, as
/// reported by the page's text layout.
///
/// Runs are immutable once produced. A run whose text is empty or
/// all-whitespace is discarded by the extractor and never classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    /// The literal text of the run
    pub text: String,

    /// Font size in points, as reported by the layout
    pub font_size: f32,

    /// Declared fill (foreground) color
    pub fg: Rgb,

    /// Bounding rectangle in page points, top-down
    pub bbox: Rect,
}

impl TextRun {
    /// Create a new run.
    pub fn new(text: impl Into<String>, font_size: f32, fg: Rgb, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            font_size,
            fg,
            bbox,
        }
    }

    /// True when the run carries no visible characters at all.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
