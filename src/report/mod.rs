//! Report rendering: the diagnostic artifacts of a scan.
//!
//! None of these outputs participate in the scoring contract; they exist
//! for debugging and audit. The JSON form round-trips the full report, the
//! CSV form is a row-per-run table, and the log form is for reading.

mod json;
mod log;
mod table;

pub use json::{to_json, JsonFormat};
pub use log::to_log;
pub use table::to_csv;

use crate::error::Result;
use crate::model::ScanReport;

impl ScanReport {
    /// Serialize this report as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(self, format)
    }

    /// Render this report as a human-readable log.
    pub fn to_log(&self) -> String {
        to_log(self)
    }

    /// Render this report as a CSV table.
    pub fn to_csv(&self) -> String {
        to_csv(self)
    }
}
