//! Integration tests for report artifacts.

use chrono::Utc;

use ghostink::{
    ClassifiedRun, JsonFormat, PageReport, Rect, Rgb, ScanMetadata, ScanReport, TextRun,
    Visibility,
};

fn fixture_report() -> ScanReport {
    let make = |text: &str, size: f32, fg: Rgb, bg: Rgb, ratio: f64, verdict: Visibility| {
        ClassifiedRun::new(
            &TextRun::new(text, size, fg, Rect::new(10.0, 10.0, 200.0, 24.0)),
            bg,
            ratio,
            verdict,
        )
    };

    ScanReport {
        metadata: ScanMetadata {
            source: Some("candidate.pdf".to_string()),
            pdf_version: "1.4".to_string(),
            page_count: 2,
            dpi: 200.0,
            scanned_at: Utc::now(),
        },
        pages: vec![
            PageReport {
                number: 1,
                width: 612.0,
                height: 792.0,
                runs: vec![
                    make(
                        "Senior Engineer",
                        14.0,
                        Rgb::BLACK,
                        Rgb::WHITE,
                        21.0,
                        Visibility::Visible,
                    ),
                    make(
                        "sql, nosql, graphql",
                        10.0,
                        Rgb::WHITE,
                        Rgb::WHITE,
                        1.0,
                        Visibility::Hidden,
                    ),
                ],
            },
            PageReport {
                number: 2,
                width: 612.0,
                height: 792.0,
                runs: vec![make(
                    "light, gray, footnote",
                    9.0,
                    Rgb::new(200, 200, 200),
                    Rgb::WHITE,
                    1.6733,
                    Visibility::HardToSee,
                )],
            },
        ],
    }
}

#[test]
fn test_json_round_trip() {
    let report = fixture_report();
    let json = report.to_json(JsonFormat::Compact).unwrap();

    let parsed: ScanReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.pages.len(), 2);
    assert_eq!(parsed.hidden_text(), vec!["sql, nosql, graphql"]);
    assert_eq!(parsed.pages[1].runs[0].contrast, 1.67);
    assert_eq!(parsed.metadata.pdf_version, "1.4");
}

#[test]
fn test_json_artifact_written_to_disk() {
    let report = fixture_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.json");

    std::fs::write(&path, report.to_json(JsonFormat::Pretty).unwrap()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: ScanReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.hidden_count(), 1);
}

#[test]
fn test_csv_rows_quote_embedded_commas() {
    let csv = fixture_report().to_csv();
    let lines: Vec<&str> = csv.lines().collect();

    // Header plus three runs
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("page,text,font_size"));
    // Run texts containing commas come out quoted
    assert!(lines[2].contains("\"sql, nosql, graphql\""));
    assert!(lines[3].contains("\"light, gray, footnote\""));
    assert!(lines[3].ends_with("hard to see"));
}

#[test]
fn test_log_lists_runs_with_page_numbers() {
    let log = fixture_report().to_log();

    assert!(log.contains("document : candidate.pdf"));
    assert!(log.contains("page      : 1"));
    assert!(log.contains("page      : 2"));
    assert!(log.contains("verdict   : hard to see"));
    assert!(log.contains("3 runs, 1 hidden"));
}

#[test]
fn test_hidden_text_encounter_order_across_pages() {
    let mut report = fixture_report();
    // Add a second hidden run on page 2
    report.pages[1].runs.push(ClassifiedRun::new(
        &TextRun::new(
            "devops sre",
            10.0,
            Rgb::WHITE,
            Rect::new(0.0, 0.0, 50.0, 10.0),
        ),
        Rgb::WHITE,
        1.0,
        Visibility::Hidden,
    ));

    assert_eq!(
        report.hidden_text(),
        vec!["sql, nosql, graphql", "devops sre"]
    );
}
