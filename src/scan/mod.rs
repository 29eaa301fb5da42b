//! Document scanning: options, page sources, the scan driver, and
//! streaming events.

mod options;
mod scanner;
mod source;
mod stream;

pub use options::{PageSelection, ScanOptions, DEFAULT_DPI};
pub use scanner::{scan_pages, Scanner};
pub use source::{PageSource, SourcePage};
pub use stream::{stream_source, ScanEvent};
