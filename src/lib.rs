// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod matcher;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use config::{Config, InputConfig, ReportConfig, WordListConfig};
pub use error::{Result, ScanError};
pub use exporter::{JsonExporter, NO_MATCH_SENTINEL, ReportWriter, ScanExport};
pub use extractor::{EmailExtractor, MessageContent, TextExtractor};
pub use matcher::{CombinationMatcher, StringMatcher};
pub use models::{FailureStage, FileFailure, MatchRecord, StringHit, WordGroup};
pub use parser::{TermNormalizer, WordListLoader};
pub use pipeline::{
    FileProcessor, LogObserver, ProcessingResult, ProgressTracker, ScanObserver, ScanOrchestrator,
    ScanOutcome, ScanStats,
};
pub use repository::{FileScanner, ScannedFile};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _orchestrator = ScanOrchestrator::new(config);
        let _normalizer = TermNormalizer::new();
    }
}
