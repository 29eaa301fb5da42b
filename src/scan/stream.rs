//! Streaming scans: per-page events over a channel.
//!
//! For multi-page documents a caller may want results as pages finish
//! instead of one report at the end. The scan runs on a worker thread and
//! pushes [`ScanEvent`]s through a bounded channel; dropping the receiver
//! cancels the scan at the next page boundary.

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::error::{Error, Result};
use crate::model::PageReport;
use crate::raster::{bind_engine, load_document, PdfiumSource};

use super::{scan_pages, PageSource, ScanOptions, Scanner};

/// Channel capacity: keeps a slow consumer from buffering a whole
/// document's reports.
const EVENT_BUFFER: usize = 4;

/// Events emitted during a streaming scan.
#[derive(Debug)]
pub enum ScanEvent {
    /// The document decoded successfully; scanning is about to begin.
    Started {
        /// Total pages in the document
        page_count: u32,
    },

    /// One page finished classification.
    Page(PageReport),

    /// The scan completed.
    Finished {
        /// Total hidden runs seen across all scanned pages
        hidden_runs: usize,
    },

    /// The scan failed; no further events follow.
    Failed(Error),
}

/// Send `Started`, then one `Page` per scanned page. Returns the number of
/// hidden runs seen. A dropped receiver surfaces as an error, which aborts
/// the page loop.
fn pump<S: PageSource>(
    source: &S,
    options: &ScanOptions,
    tx: &Sender<ScanEvent>,
) -> Result<usize> {
    let started = ScanEvent::Started {
        page_count: source.page_count(),
    };
    tx.send(started)
        .map_err(|_| Error::Other("scan event receiver dropped".to_string()))?;

    let mut hidden = 0usize;
    scan_pages(source, options, |page| {
        hidden += page.hidden_count();
        tx.send(ScanEvent::Page(page))
            .map_err(|_| Error::Other("scan event receiver dropped".to_string()))
    })?;

    Ok(hidden)
}

/// Stream a scan over an owned page source on a worker thread.
pub fn stream_source<S>(source: S, options: ScanOptions) -> Receiver<ScanEvent>
where
    S: PageSource + Send + 'static,
{
    let (tx, rx) = bounded(EVENT_BUFFER);
    std::thread::spawn(move || match pump(&source, &options, &tx) {
        Ok(hidden) => {
            let _ = tx.send(ScanEvent::Finished {
                hidden_runs: hidden,
            });
        }
        Err(e) => {
            let _ = tx.send(ScanEvent::Failed(e));
        }
    });
    rx
}

impl Scanner {
    /// Consume the scanner and stream scan events from a worker thread.
    ///
    /// The render engine is bound on the worker, so the calling thread is
    /// free as soon as this returns.
    pub fn stream(self) -> Receiver<ScanEvent> {
        let (tx, rx) = bounded(EVENT_BUFFER);
        std::thread::spawn(move || {
            let result = (|| -> Result<usize> {
                let engine = bind_engine()?;
                let document = load_document(&engine, &self.data)?;
                let source = PdfiumSource::new(&document);
                pump(&source, &self.options, &tx)
            })();

            match result {
                Ok(hidden) => {
                    let _ = tx.send(ScanEvent::Finished {
                        hidden_runs: hidden,
                    });
                }
                Err(e) => {
                    let _ = tx.send(ScanEvent::Failed(e));
                }
            }
        });
        rx
    }
}
