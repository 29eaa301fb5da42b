//! Per-run analysis: background sampling and contrast classification.

mod classify;
mod sample;

pub use classify::{
    classify, contrast_ratio, relative_luminance, verdict, HIDDEN_CONTRAST_LIMIT,
    MARGINAL_CONTRAST_LIMIT, TINY_FONT_LIMIT,
};
pub use sample::{sample_background, GLYPH_EXCLUSION_DELTA};
