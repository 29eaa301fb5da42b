//! Data model for the scan pipeline.
//!
//! The types here flow through the pipeline in lifecycle order: a rendered
//! page yields [`TextRun`]s, each run gets a sampled background color and a
//! [`Visibility`] verdict, and the per-run [`ClassifiedRun`] records fold
//! into a [`ScanReport`].

mod color;
mod geometry;
mod report;
mod run;

pub use color::Rgb;
pub use geometry::{PixelRect, Rect};
pub use report::{ClassifiedRun, PageReport, ScanMetadata, ScanReport, Visibility};
pub use run::TextRun;
