//! Classification verdicts and per-document scan results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Rgb, TextRun};

/// How legible a run is to a human reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Comfortably legible
    Visible,
    /// Effectively invisible: concealment is presumed
    Hidden,
    /// Legible with effort; reported but not treated as concealment
    HardToSee,
}

impl Visibility {
    /// True for the `Hidden` verdict only.
    pub fn is_hidden(self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
            Visibility::HardToSee => "hard to see",
        };
        f.write_str(s)
    }
}

/// The terminal record of one run's processing: the run, its sampled
/// background, and the verdict the classifier produced for it.
///
/// Every field is derived from the run itself and the page raster; the
/// verdict is reproducible from `(fg, bg, font_size)` alone and never
/// depends on any other run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRun {
    /// The literal text of the run
    pub text: String,

    /// Font size in points
    pub font_size: f32,

    /// Declared foreground color
    #[serde(rename = "fg_color")]
    pub fg: Rgb,

    /// Sampled background color behind the run
    #[serde(rename = "bg_color")]
    pub bg: Rgb,

    /// Perceptual contrast between foreground and background,
    /// rounded to two decimals
    #[serde(rename = "contrast_ratio")]
    pub contrast: f64,

    /// Classification outcome
    pub verdict: Visibility,
}

impl ClassifiedRun {
    /// Build the record from a run, its sampled background, and the raw
    /// contrast ratio. The ratio is rounded to two decimals here, once.
    pub fn new(run: &TextRun, bg: Rgb, contrast: f64, verdict: Visibility) -> Self {
        Self {
            text: run.text.clone(),
            font_size: run.font_size,
            fg: run.fg,
            bg,
            contrast: (contrast * 100.0).round() / 100.0,
            verdict,
        }
    }

    /// True when the run was classified as concealed.
    pub fn is_hidden(&self) -> bool {
        self.verdict.is_hidden()
    }
}

/// All classified runs of one page, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Classified runs in document order
    pub runs: Vec<ClassifiedRun>,
}

impl PageReport {
    /// Texts of this page's hidden runs, in document order.
    pub fn hidden_text(&self) -> Vec<&str> {
        self.runs
            .iter()
            .filter(|r| r.is_hidden())
            .map(|r| r.text.as_str())
            .collect()
    }

    /// Number of hidden runs on this page.
    pub fn hidden_count(&self) -> usize {
        self.runs.iter().filter(|r| r.is_hidden()).count()
    }
}

/// Context recorded alongside a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMetadata {
    /// Source file name, when the document came from a file
    pub source: Option<String>,

    /// PDF version sniffed from the header
    pub pdf_version: String,

    /// Total pages in the document (before page selection)
    pub page_count: u32,

    /// Raster resolution used for background sampling
    pub dpi: f32,

    /// When the scan ran
    pub scanned_at: DateTime<Utc>,
}

/// The full result of scanning one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Scan context
    pub metadata: ScanMetadata,

    /// Per-page results, ordered by page number
    pub pages: Vec<PageReport>,
}

impl ScanReport {
    /// Total number of classified runs across all pages.
    pub fn run_count(&self) -> usize {
        self.pages.iter().map(|p| p.runs.len()).sum()
    }

    /// Total number of hidden runs across all pages.
    pub fn hidden_count(&self) -> usize {
        self.pages.iter().map(|p| p.hidden_count()).sum()
    }

    /// Texts of every hidden run, in document encounter order, not
    /// deduplicated. This is the lightweight output handed to the
    /// sanitizer.
    pub fn hidden_text(&self) -> Vec<String> {
        self.pages
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter(|r| r.is_hidden())
            .map(|r| r.text.clone())
            .collect()
    }

    /// Iterate over every classified run with its page number.
    pub fn iter_runs(&self) -> impl Iterator<Item = (u32, &ClassifiedRun)> {
        self.pages
            .iter()
            .flat_map(|p| p.runs.iter().map(move |r| (p.number, r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    fn run(text: &str, verdict: Visibility) -> ClassifiedRun {
        let tr = TextRun::new(
            text,
            11.0,
            Rgb::BLACK,
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        ClassifiedRun::new(&tr, Rgb::WHITE, 21.0, verdict)
    }

    fn report(pages: Vec<PageReport>) -> ScanReport {
        ScanReport {
            metadata: ScanMetadata {
                source: None,
                pdf_version: "1.7".to_string(),
                page_count: pages.len() as u32,
                dpi: 200.0,
                scanned_at: Utc::now(),
            },
            pages,
        }
    }

    #[test]
    fn test_contrast_rounding() {
        let tr = TextRun::new("x", 11.0, Rgb::BLACK, Rect::new(0.0, 0.0, 1.0, 1.0));
        let rec = ClassifiedRun::new(&tr, Rgb::WHITE, 1.66666, Visibility::HardToSee);
        assert_eq!(rec.contrast, 1.67);
    }

    #[test]
    fn test_hidden_text_order_and_duplicates() {
        let page1 = PageReport {
            number: 1,
            width: 612.0,
            height: 792.0,
            runs: vec![
                run("visible", Visibility::Visible),
                run("ghost", Visibility::Hidden),
                run("faint", Visibility::HardToSee),
            ],
        };
        let page2 = PageReport {
            number: 2,
            width: 612.0,
            height: 792.0,
            runs: vec![run("ghost", Visibility::Hidden)],
        };
        let report = report(vec![page1, page2]);

        // HardToSee is reported but never collected as hidden
        assert_eq!(report.hidden_text(), vec!["ghost", "ghost"]);
        assert_eq!(report.hidden_count(), 2);
        assert_eq!(report.run_count(), 4);
    }

    #[test]
    fn test_visibility_display() {
        assert_eq!(Visibility::Visible.to_string(), "visible");
        assert_eq!(Visibility::Hidden.to_string(), "hidden");
        assert_eq!(Visibility::HardToSee.to_string(), "hard to see");
    }

    #[test]
    fn test_report_json_field_names() {
        let page = PageReport {
            number: 1,
            width: 612.0,
            height: 792.0,
            runs: vec![run("x", Visibility::Visible)],
        };
        let json = serde_json::to_string(&report(vec![page])).unwrap();
        assert!(json.contains("\"fg_color\""));
        assert!(json.contains("\"bg_color\""));
        assert!(json.contains("\"contrast_ratio\""));
        assert!(json.contains("\"verdict\":\"visible\""));
    }
}
