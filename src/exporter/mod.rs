// file: src/exporter/mod.rs
// description: report writers for scan results
// reference: internal module structure

pub mod json;
pub mod report;

pub use json::{JsonExporter, ScanExport};
pub use report::{NO_MATCH_SENTINEL, ReportWriter};
