//! Perceptual contrast and the visibility policy.
//!
//! Contrast uses the standard relative-luminance model over gamma-corrected
//! sRGB channels. The classification thresholds sit deliberately below
//! accessibility minimums: the goal is catching deliberate concealment, not
//! grading legibility.

use crate::model::{Rgb, Visibility};

/// Type at or below this size is treated as unreadable regardless of
/// contrast.
pub const TINY_FONT_LIMIT: f32 = 5.0;

/// Below this contrast ratio a run is effectively invisible.
pub const HIDDEN_CONTRAST_LIMIT: f64 = 1.5;

/// Below this contrast ratio (but at or above the hidden limit) a run is
/// legible only with effort.
pub const MARGINAL_CONTRAST_LIMIT: f64 = 3.0;

/// Relative luminance of a color in [0, 1].
///
/// Each channel is linearized with the sRGB transfer function and the
/// results are combined with the standard perceptual weights.
pub fn relative_luminance(color: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors: `(L_light + 0.05) / (L_dark + 0.05)`,
/// always >= 1.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);

    let lighter = la.max(lb);
    let darker = la.min(lb);

    (lighter + 0.05) / (darker + 0.05)
}

/// Apply the visibility policy to an already-computed contrast ratio.
///
/// Rules fire in fixed priority order: tiny type is hidden no matter how
/// strong its contrast; then the two contrast bounds apply with strict
/// comparisons (a ratio of exactly 1.5 is not hidden, exactly 3.0 is
/// visible).
pub fn verdict(ratio: f64, font_size: f32) -> Visibility {
    if font_size <= TINY_FONT_LIMIT {
        return Visibility::Hidden;
    }

    if ratio < HIDDEN_CONTRAST_LIMIT {
        return Visibility::Hidden;
    }

    if ratio < MARGINAL_CONTRAST_LIMIT {
        return Visibility::HardToSee;
    }

    Visibility::Visible
}

/// Classify a run's foreground against its sampled background.
///
/// A pure function of its arguments: the verdict never depends on any
/// other run or on accumulated state, which is what lets the scanner fan
/// runs out across workers freely.
pub fn classify(fg: Rgb, bg: Rgb, font_size: f32) -> (Visibility, f64) {
    let ratio = contrast_ratio(fg, bg);
    (verdict(ratio, font_size), ratio)
}
