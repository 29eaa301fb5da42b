//! Human-readable line-delimited report rendering.
//!
//! One block per classified run, intended for eyeballing why a particular
//! resume tripped the detector.

use std::fmt::Write as _;

use crate::model::ScanReport;

const SEPARATOR: &str = "--------------------------------";

/// Render a scan report as a line-delimited log.
pub fn to_log(report: &ScanReport) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "document : {}",
        report.metadata.source.as_deref().unwrap_or("<bytes>")
    )
    .ok();
    writeln!(out, "version  : PDF {}", report.metadata.pdf_version).ok();
    writeln!(out, "pages    : {}", report.metadata.page_count).ok();
    writeln!(out, "dpi      : {}", report.metadata.dpi).ok();

    for (page, run) in report.iter_runs() {
        writeln!(out, "{SEPARATOR}").ok();
        writeln!(out, "page      : {}", page).ok();
        writeln!(out, "text      : {}", run.text).ok();
        writeln!(out, "font size : {}", run.font_size).ok();
        writeln!(out, "fg        : {}", run.fg).ok();
        writeln!(out, "bg        : {}", run.bg).ok();
        writeln!(out, "contrast  : {:.2}", run.contrast).ok();
        writeln!(out, "verdict   : {}", run.verdict).ok();
    }

    writeln!(out, "{SEPARATOR}").ok();
    writeln!(
        out,
        "{} runs, {} hidden",
        report.run_count(),
        report.hidden_count()
    )
    .ok();

    out
}
