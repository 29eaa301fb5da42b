//! The scan driver: page loop, per-run fan-out, result aggregation.

use std::path::Path;

use chrono::Utc;
use rayon::prelude::*;

use crate::analyze::{classify, sample_background};
use crate::detect;
use crate::error::{Error, Result};
use crate::model::{ClassifiedRun, PageReport, ScanMetadata, ScanReport, TextRun};
use crate::raster::{bind_engine, load_document, PdfiumSource, POINTS_PER_INCH};

use super::{PageSource, ScanOptions, SourcePage};

/// Classify every run of one page against its raster.
///
/// Classification is a pure function of each run's own fields plus the
/// shared read-only raster, so runs fan out across the Rayon pool when
/// `options.parallel` is set. Results keep document order either way.
fn classify_page(page: SourcePage, options: &ScanOptions) -> PageReport {
    let scale = options.dpi / POINTS_PER_INCH;
    let raster = &page.raster;

    let classify_run = |run: &TextRun| -> ClassifiedRun {
        let bbox = run.bbox.to_pixels(scale);
        let bg = sample_background(raster, bbox, run.fg);
        let (verdict, ratio) = classify(run.fg, bg, run.font_size);
        log::trace!(
            "run {:?}: fg {} bg {} size {} -> {} ({:.2})",
            run.text,
            run.fg,
            bg,
            run.font_size,
            verdict,
            ratio
        );
        ClassifiedRun::new(run, bg, ratio, verdict)
    };

    let runs: Vec<ClassifiedRun> = if options.parallel {
        page.runs
            .par_iter()
            .filter(|r| !r.is_blank())
            .map(classify_run)
            .collect()
    } else {
        page.runs
            .iter()
            .filter(|r| !r.is_blank())
            .map(classify_run)
            .collect()
    };

    PageReport {
        number: page.number,
        width: page.width,
        height: page.height,
        runs,
    }
}

/// Drive a scan over any page source, feeding each page's report to `sink`
/// in page order. Returns the document's total page count.
///
/// This is the single aggregation loop behind both output modes: the
/// full-report and hidden-list callers differ only in what their sinks
/// keep. A selection that names a page past the end of the document fails
/// before any page is loaded.
pub fn scan_pages<S, F>(source: &S, options: &ScanOptions, mut sink: F) -> Result<u32>
where
    S: PageSource + ?Sized,
    F: FnMut(PageReport) -> Result<()>,
{
    let page_count = source.page_count();

    if let Some(max) = options.pages.max_page() {
        if max > page_count {
            return Err(Error::PageOutOfRange(max, page_count));
        }
    }

    for index in 0..page_count {
        let number = index + 1;
        if !options.pages.includes(number) {
            continue;
        }

        let page = source.load_page(index, options.dpi)?;
        let report = classify_page(page, options);
        log::debug!(
            "page {}: {} runs classified, {} hidden",
            number,
            report.runs.len(),
            report.hidden_count()
        );
        sink(report)?;
    }

    Ok(page_count)
}

/// Scans a document for invisible text.
///
/// A `Scanner` owns the raw document bytes; the render engine is bound and
/// the document decoded fresh for each scan, and every intermediate
/// surface is released when the scan returns.
pub struct Scanner {
    pub(crate) data: Vec<u8>,
    pub(crate) source_name: Option<String>,
    pub(crate) pdf_version: String,
    pub(crate) options: ScanOptions,
}

impl Scanner {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ScanOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ScanOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let signature = detect::sniff_header(&data)?;
        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Ok(Self {
            data,
            source_name,
            pdf_version: signature.version,
            options,
        })
    }

    /// Wrap an in-memory PDF byte stream.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_bytes_with_options(data, ScanOptions::default())
    }

    /// Wrap an in-memory PDF byte stream with custom options.
    pub fn from_bytes_with_options(
        data: impl Into<Vec<u8>>,
        options: ScanOptions,
    ) -> Result<Self> {
        let data = data.into();
        let signature = detect::sniff_header(&data)?;
        Ok(Self {
            data,
            source_name: None,
            pdf_version: signature.version,
            options,
        })
    }

    /// The options this scanner was configured with.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// PDF version sniffed from the document header.
    pub fn pdf_version(&self) -> &str {
        &self.pdf_version
    }

    /// Scan the document and collect the full per-run report.
    pub fn scan(&self) -> Result<ScanReport> {
        let mut pages = Vec::new();
        let page_count = self.drive(|page| {
            pages.push(page);
            Ok(())
        })?;

        Ok(ScanReport {
            metadata: self.metadata(page_count),
            pages,
        })
    }

    /// Scan the document and collect only the hidden run texts, in
    /// document encounter order. Marginally legible runs are not
    /// collected.
    pub fn hidden_text(&self) -> Result<Vec<String>> {
        let mut hidden = Vec::new();
        self.drive(|page| {
            hidden.extend(
                page.runs
                    .into_iter()
                    .filter(|r| r.is_hidden())
                    .map(|r| r.text),
            );
            Ok(())
        })?;
        Ok(hidden)
    }

    /// Bind the engine, decode the document, and run the page loop.
    fn drive<F>(&self, sink: F) -> Result<u32>
    where
        F: FnMut(PageReport) -> Result<()>,
    {
        let engine = bind_engine()?;
        let document = load_document(&engine, &self.data)?;
        let source = PdfiumSource::new(&document);
        scan_pages(&source, &self.options, sink)
    }

    pub(crate) fn metadata(&self, page_count: u32) -> ScanMetadata {
        ScanMetadata {
            source: self.source_name.clone(),
            pdf_version: self.pdf_version.clone(),
            page_count,
            dpi: self.options.dpi,
            scanned_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rect, Rgb, Visibility};
    use crate::raster::PageRaster;
    use crate::scan::PageSelection;

    /// Page source over pre-built synthetic pages; rasters are authored at
    /// 72 DPI so page points and raster pixels coincide.
    struct SyntheticSource {
        pages: Vec<SourcePage>,
    }

    impl PageSource for SyntheticSource {
        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn load_page(&self, index: u32, _dpi: f32) -> Result<SourcePage> {
            self.pages
                .get(index as usize)
                .cloned()
                .ok_or(Error::PageOutOfRange(index + 1, self.pages.len() as u32))
        }
    }

    fn options_72dpi() -> ScanOptions {
        ScanOptions::new().with_dpi(72.0)
    }

    fn page_with_runs(number: u32, raster: PageRaster, runs: Vec<TextRun>) -> SourcePage {
        SourcePage {
            number,
            width: raster.width() as f32,
            height: raster.height() as f32,
            raster,
            runs,
        }
    }

    fn collect(source: &SyntheticSource, options: &ScanOptions) -> Vec<PageReport> {
        let mut pages = Vec::new();
        scan_pages(source, options, |p| {
            pages.push(p);
            Ok(())
        })
        .unwrap();
        pages
    }

    #[test]
    fn test_black_on_white_is_visible() {
        let raster = PageRaster::filled(100, 40, Rgb::WHITE);
        let run = TextRun::new("Lorem", 11.0, Rgb::BLACK, Rect::new(10.0, 10.0, 90.0, 30.0));
        let source = SyntheticSource {
            pages: vec![page_with_runs(1, raster, vec![run])],
        };

        let pages = collect(&source, &options_72dpi());
        let rec = &pages[0].runs[0];
        assert_eq!(rec.verdict, Visibility::Visible);
        assert_eq!(rec.bg, Rgb::WHITE);
        assert!((rec.contrast - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_white_on_white_is_hidden() {
        // Every band pixel matches the foreground, so the sample falls
        // back to white and contrast bottoms out at 1.0.
        let raster = PageRaster::filled(100, 40, Rgb::WHITE);
        let run = TextRun::new(
            "stuffed keywords",
            12.0,
            Rgb::WHITE,
            Rect::new(5.0, 5.0, 95.0, 35.0),
        );
        let source = SyntheticSource {
            pages: vec![page_with_runs(1, raster, vec![run])],
        };

        let pages = collect(&source, &options_72dpi());
        let rec = &pages[0].runs[0];
        assert_eq!(rec.verdict, Visibility::Hidden);
        assert_eq!(rec.contrast, 1.0);
    }

    #[test]
    fn test_light_gray_on_white_is_marginal() {
        let raster = PageRaster::filled(100, 40, Rgb::WHITE);
        let run = TextRun::new(
            "faint print",
            11.0,
            Rgb::new(200, 200, 200),
            Rect::new(10.0, 10.0, 90.0, 30.0),
        );
        let source = SyntheticSource {
            pages: vec![page_with_runs(1, raster, vec![run])],
        };

        let pages = collect(&source, &options_72dpi());
        let rec = &pages[0].runs[0];
        assert_eq!(rec.verdict, Visibility::HardToSee);
        assert!(rec.contrast > 1.5 && rec.contrast < 3.0);
    }

    #[test]
    fn test_white_on_dark_highlight_is_visible() {
        let raster = PageRaster::filled(100, 40, Rgb::new(30, 30, 30));
        let run = TextRun::new(
            "inverted header",
            14.0,
            Rgb::WHITE,
            Rect::new(10.0, 10.0, 90.0, 30.0),
        );
        let source = SyntheticSource {
            pages: vec![page_with_runs(1, raster, vec![run])],
        };

        let pages = collect(&source, &options_72dpi());
        let rec = &pages[0].runs[0];
        assert_eq!(rec.verdict, Visibility::Visible);
        assert_eq!(rec.bg, Rgb::new(30, 30, 30));
    }

    #[test]
    fn test_blank_runs_never_reach_classification() {
        let raster = PageRaster::filled(50, 20, Rgb::WHITE);
        let runs = vec![
            TextRun::new("  \t ", 11.0, Rgb::BLACK, Rect::new(0.0, 0.0, 10.0, 10.0)),
            TextRun::new("kept", 11.0, Rgb::BLACK, Rect::new(0.0, 0.0, 10.0, 10.0)),
        ];
        let source = SyntheticSource {
            pages: vec![page_with_runs(1, raster, runs)],
        };

        let pages = collect(&source, &options_72dpi());
        assert_eq!(pages[0].runs.len(), 1);
        assert_eq!(pages[0].runs[0].text, "kept");
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let mut raster = PageRaster::filled(200, 100, Rgb::WHITE);
        raster.fill_region(0, 50, 200, 100, Rgb::new(40, 40, 40));
        let runs: Vec<TextRun> = (0..20)
            .map(|i| {
                let y = if i % 2 == 0 { 10.0 } else { 60.0 };
                TextRun::new(
                    format!("run-{i}"),
                    10.0 + i as f32,
                    Rgb::new((i * 12) as u8, 30, 200),
                    Rect::new(5.0, y, 195.0, y + 30.0),
                )
            })
            .collect();
        let page = page_with_runs(1, raster, runs);

        let parallel = collect(
            &SyntheticSource {
                pages: vec![page.clone()],
            },
            &options_72dpi(),
        );
        let sequential = collect(
            &SyntheticSource { pages: vec![page] },
            &options_72dpi().sequential(),
        );

        let left: Vec<_> = parallel[0]
            .runs
            .iter()
            .map(|r| (r.text.clone(), r.verdict, r.contrast))
            .collect();
        let right: Vec<_> = sequential[0]
            .runs
            .iter()
            .map(|r| (r.text.clone(), r.verdict, r.contrast))
            .collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_page_selection_filters_pages() {
        let make_page = |n: u32| {
            page_with_runs(
                n,
                PageRaster::filled(50, 20, Rgb::WHITE),
                vec![TextRun::new(
                    format!("page-{n}"),
                    11.0,
                    Rgb::BLACK,
                    Rect::new(0.0, 0.0, 50.0, 20.0),
                )],
            )
        };
        let source = SyntheticSource {
            pages: vec![make_page(1), make_page(2), make_page(3)],
        };

        let options = options_72dpi().with_pages(PageSelection::Pages(vec![1, 3]));
        let pages = collect(&source, &options);
        let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_selection_past_end_fails_before_loading() {
        let source = SyntheticSource {
            pages: vec![page_with_runs(
                1,
                PageRaster::filled(10, 10, Rgb::WHITE),
                vec![],
            )],
        };
        let options = options_72dpi().with_pages(PageSelection::Range(1..=5));
        let result = scan_pages(&source, &options, |_| Ok(()));
        assert!(matches!(result, Err(Error::PageOutOfRange(5, 1))));
    }

    #[test]
    fn test_from_bytes_rejects_non_pdf() {
        let result = Scanner::from_bytes(b"not a pdf at all".to_vec());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_from_bytes_accepts_pdf_header() {
        let scanner = Scanner::from_bytes(b"%PDF-1.7\nrest of document".to_vec()).unwrap();
        assert_eq!(scanner.pdf_version(), "1.7");
        assert!(scanner.options().parallel);
    }
}
