//! Row-oriented (CSV) report rendering.

use std::fmt::Write as _;

use crate::model::ScanReport;

const HEADER: &str = "page,text,font_size,fg_r,fg_g,fg_b,bg_r,bg_g,bg_b,contrast_ratio,verdict";

/// Render a scan report as CSV, one row per classified run.
pub fn to_csv(report: &ScanReport) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for (page, run) in report.iter_runs() {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{:.2},{}",
            page,
            escape(&run.text),
            run.font_size,
            run.fg.r,
            run.fg.g,
            run.fg.b,
            run.bg.r,
            run.bg.g,
            run.bg.b,
            run.contrast,
            run.verdict
        )
        .ok();
    }

    out
}

/// Quote a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
