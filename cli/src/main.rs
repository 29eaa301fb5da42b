//! ghostink CLI - invisible-text detection for PDF resumes

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ghostink::{
    JsonFormat, PageSelection, SanitizeOptions, ScanEvent, ScanOptions, ScanReport, Scanner,
};

#[derive(Parser)]
#[command(name = "ghostink")]
#[command(version)]
#[command(about = "Detect and redact invisible text in PDF documents", long_about = None)]
struct Cli {
    /// Input PDF file (shorthand for the scan command)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a PDF and emit the full per-run report
    Scan {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Raster resolution in DPI
        #[arg(long, default_value = "200")]
        dpi: f32,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Disable parallel run classification
        #[arg(long)]
        sequential: bool,
    },

    /// List hidden run texts, one per line
    Hidden {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Emit a JSON array instead of plain lines
        #[arg(long)]
        json: bool,

        /// Raster resolution in DPI
        #[arg(long, default_value = "200")]
        dpi: f32,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Remove a PDF's hidden text from its separately extracted plain text
    Sanitize {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Plain-text file to redact ("-" or omitted reads stdin)
        #[arg(short, long, value_name = "FILE")]
        text: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Collapse whitespace left behind by removals
        #[arg(long)]
        collapse_whitespace: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Structured JSON report
    Json,
    /// Row-per-run CSV table
    Csv,
    /// Human-readable log
    Log,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Scan {
            input,
            output,
            format,
            compact,
            dpi,
            pages,
            sequential,
        }) => cmd_scan(
            &input,
            output.as_deref(),
            format,
            compact,
            dpi,
            pages.as_deref(),
            sequential,
        ),
        Some(Commands::Hidden {
            input,
            json,
            dpi,
            pages,
        }) => cmd_hidden(&input, json, dpi, pages.as_deref()),
        Some(Commands::Sanitize {
            input,
            text,
            output,
            collapse_whitespace,
        }) => cmd_sanitize(&input, text.as_deref(), output.as_deref(), collapse_whitespace),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_scan(&input, None, ReportFormat::Json, false, 200.0, None, false)
            } else {
                println!("{}", "Usage: ghostink <FILE>".yellow());
                println!("       ghostink --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(dpi: f32, pages: Option<&str>, sequential: bool) -> Result<ScanOptions, Box<dyn std::error::Error>> {
    let mut options = ScanOptions::new().with_dpi(dpi);
    if let Some(spec) = pages {
        options = options.with_pages(PageSelection::parse(spec)?);
    }
    if sequential {
        options = options.sequential();
    }
    Ok(options)
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_or_print(output: Option<&Path>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

fn summarize(report: &ScanReport) {
    let hidden = report.hidden_count();
    let line = format!(
        "{} runs on {} pages, {} hidden",
        report.run_count(),
        report.pages.len(),
        hidden
    );
    if hidden > 0 {
        eprintln!("{}", line.red());
    } else {
        eprintln!("{}", line.green());
    }
}

fn cmd_scan(
    input: &Path,
    output: Option<&Path>,
    format: ReportFormat,
    compact: bool,
    dpi: f32,
    pages: Option<&str>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(dpi, pages, sequential)?;

    let pb = spinner("Scanning pages...");
    let report = Scanner::open_with_options(input, options)?.scan()?;
    pb.finish_and_clear();
    log::debug!(
        "scanned {} pages at {} dpi",
        report.pages.len(),
        report.metadata.dpi
    );

    let rendered = match format {
        ReportFormat::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            report.to_json(json_format)?
        }
        ReportFormat::Csv => report.to_csv(),
        ReportFormat::Log => report.to_log(),
    };

    write_or_print(output, &rendered)?;
    summarize(&report);
    Ok(())
}

fn cmd_hidden(
    input: &Path,
    json: bool,
    dpi: f32,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(dpi, pages, false)?;
    let scanner = Scanner::open_with_options(input, options)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut hidden: Vec<String> = Vec::new();
    for event in scanner.stream() {
        match event {
            ScanEvent::Started { page_count } => pb.set_length(u64::from(page_count)),
            ScanEvent::Page(page) => {
                hidden.extend(page.hidden_text().iter().map(|s| s.to_string()));
                pb.inc(1);
            }
            ScanEvent::Finished { .. } => {}
            ScanEvent::Failed(e) => {
                pb.finish_and_clear();
                return Err(e.into());
            }
        }
    }
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&hidden)?);
    } else {
        for text in &hidden {
            println!("{text}");
        }
    }

    if hidden.is_empty() {
        eprintln!("{}", "no hidden text found".green());
    } else {
        eprintln!("{}", format!("{} hidden runs found", hidden.len()).red());
    }
    Ok(())
}

fn cmd_sanitize(
    input: &Path,
    text: Option<&Path>,
    output: Option<&Path>,
    collapse_whitespace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let plain = match text {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let pb = spinner("Scanning for hidden text...");
    let hidden = ghostink::hidden_text_in_file(input)?;
    pb.finish_and_clear();

    let mut sanitize_options = SanitizeOptions::new();
    if collapse_whitespace {
        sanitize_options = sanitize_options.with_collapsed_whitespace();
    }
    let clean = ghostink::strip_hidden_with_options(&plain, &hidden, &sanitize_options);

    write_or_print(output, &clean)?;
    if hidden.is_empty() {
        eprintln!("{}", "no hidden text to remove".green());
    } else {
        eprintln!(
            "{}",
            format!("removed {} hidden runs", hidden.len()).yellow()
        );
    }
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // An empty page selection decodes the document without rasterizing
    // anything, which is all the page count needs.
    let options = ScanOptions::new().with_pages(PageSelection::Pages(Vec::new()));
    let scanner = Scanner::open_with_options(input, options)?;
    let report = scanner.scan()?;

    let size = fs::metadata(input)?.len();
    println!("{}: {}", "file".bold(), input.display());
    println!("{}: PDF {}", "format".bold(), report.metadata.pdf_version);
    println!("{}: {}", "pages".bold(), report.metadata.page_count);
    println!("{}: {} bytes", "size".bold(), size);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_scan_defaults() {
        let cli = Cli::parse_from(["ghostink", "scan", "resume.pdf"]);
        match cli.command {
            Some(Commands::Scan {
                format,
                compact,
                dpi,
                sequential,
                ..
            }) => {
                assert_eq!(format, ReportFormat::Json);
                assert!(!compact);
                assert_eq!(dpi, 200.0);
                assert!(!sequential);
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_cli_bare_input() {
        let cli = Cli::parse_from(["ghostink", "resume.pdf"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("resume.pdf")));
    }

    #[test]
    fn test_build_options_with_pages() {
        let options = build_options(144.0, Some("1-3"), true).unwrap();
        assert_eq!(options.dpi, 144.0);
        assert!(!options.parallel);
        assert!(options.pages.includes(2));
        assert!(!options.pages.includes(4));
    }

    #[test]
    fn test_build_options_rejects_bad_pages() {
        assert!(build_options(200.0, Some("9-1"), false).is_err());
    }
}
