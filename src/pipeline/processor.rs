// file: src/pipeline/processor.rs
// description: runs both searches over one message file and isolates its failures
// reference: reads the file once, runs the matchers, and records per-file errors

use crate::extractor::{EmailExtractor, MessageContent, TextExtractor};
use crate::matcher::{CombinationMatcher, StringMatcher};
use crate::models::{FailureStage, FileFailure, MatchRecord, StringHit, WordGroup};
use crate::repository::ScannedFile;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub file_path: PathBuf,
    pub bytes: u64,
    pub matches: Vec<MatchRecord>,
    pub string_hits: Vec<StringHit>,
    pub failure: Option<FileFailure>,
}

impl ProcessingResult {
    fn failed(file_path: &Path, failure: FileFailure) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            bytes: 0,
            matches: Vec::new(),
            string_hits: Vec::new(),
            failure: Some(failure),
        }
    }
}

pub struct FileProcessor<'a, E = EmailExtractor> {
    combinations: CombinationMatcher<'a, E>,
    strings: StringMatcher<'a>,
}

impl<'a> FileProcessor<'a> {
    pub fn new(groups: &'a [WordGroup]) -> Self {
        Self::with_extractor(groups, EmailExtractor::new())
    }
}

impl<'a, E: TextExtractor> FileProcessor<'a, E> {
    pub fn with_extractor(groups: &'a [WordGroup], extractor: E) -> Self {
        Self {
            combinations: CombinationMatcher::with_extractor(groups, extractor),
            strings: StringMatcher::new(groups),
        }
    }

    /// Never fails: read errors, extraction errors and panics all end up
    /// in [`ProcessingResult::failure`].
    pub fn process(&self, file: &ScannedFile) -> ProcessingResult {
        match panic::catch_unwind(AssertUnwindSafe(|| self.process_file(&file.path))) {
            Ok(result) => result,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!("Processing panicked for {}: {}", file.relative_path, reason);
                ProcessingResult::failed(
                    &file.path,
                    FileFailure::new(&file.path, FailureStage::Panic, reason),
                )
            }
        }
    }

    fn process_file(&self, path: &Path) -> ProcessingResult {
        let content = match MessageContent::load(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return ProcessingResult::failed(path, FileFailure::new(path, FailureStage::Read, e));
            }
        };

        let string_hits = self.strings.search_content(&content);

        // A message whose text cannot be extracted still gets its raw string hits.
        let (matches, failure) = match self.combinations.search_content(&content) {
            Ok(matches) => (matches, None),
            Err(e) => {
                warn!("Failed to extract text from {}: {}", path.display(), e);
                (
                    Vec::new(),
                    Some(FileFailure::new(path, FailureStage::Extraction, e)),
                )
            }
        };

        debug!(
            "{}: {} combination(s), {} string hit(s)",
            path.display(),
            matches.len(),
            string_hits.len()
        );

        ProcessingResult {
            file_path: path.to_path_buf(),
            bytes: content.len() as u64,
            matches,
            string_hits,
            failure,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ScanError};
    use std::fs;
    use tempfile::TempDir;

    struct RejectingExtractor;

    impl TextExtractor for RejectingExtractor {
        fn extract(&self, _raw: &[u8]) -> Result<String> {
            Err(ScanError::Extraction("unsupported message layout".to_string()))
        }
    }

    struct PanickingExtractor;

    impl TextExtractor for PanickingExtractor {
        fn extract(&self, _raw: &[u8]) -> Result<String> {
            panic!("decoder blew up")
        }
    }

    fn groups() -> Vec<WordGroup> {
        vec![WordGroup::new(
            vec!["virement".to_string()],
            vec!["urgent".to_string()],
        )]
    }

    fn scanned(dir: &TempDir, name: &str, content: &[u8]) -> ScannedFile {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        ScannedFile {
            path,
            relative_path: name.to_string(),
            size: content.len() as u64,
        }
    }

    #[test]
    fn test_process_matching_message() {
        let temp = TempDir::new().unwrap();
        let file = scanned(
            &temp,
            "a.eml",
            "Subject: Virement\r\nContent-Type: text/plain; charset=utf-8\r\n\r\nVirement URGENT à valider\r\n"
                .as_bytes(),
        );

        let groups = groups();
        let result = FileProcessor::new(&groups).process(&file);

        assert!(result.failure.is_none());
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.string_hits.len(), 2);
        assert_eq!(result.bytes, file.size);
    }

    #[test]
    fn test_process_missing_file_records_read_failure() {
        let temp = TempDir::new().unwrap();
        let file = ScannedFile {
            path: temp.path().join("gone.eml"),
            relative_path: "gone.eml".to_string(),
            size: 0,
        };

        let groups = groups();
        let result = FileProcessor::new(&groups).process(&file);

        let failure = result.failure.unwrap();
        assert_eq!(failure.stage, FailureStage::Read);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_extraction_failure_keeps_string_hits() {
        let temp = TempDir::new().unwrap();
        let file = scanned(&temp, "odd.eml", b"Subject: virement urgent\r\n\r\nbody\r\n");

        let groups = groups();
        let result = FileProcessor::with_extractor(&groups, RejectingExtractor).process(&file);

        let failure = result.failure.unwrap();
        assert_eq!(failure.stage, FailureStage::Extraction);
        assert!(failure.reason.contains("unsupported message layout"));
        assert!(result.matches.is_empty());
        assert_eq!(result.string_hits.len(), 2);
        assert_eq!(result.bytes, file.size);
    }

    #[test]
    fn test_panic_becomes_panic_failure() {
        let temp = TempDir::new().unwrap();
        let file = scanned(&temp, "boom.eml", b"Subject: x\r\n\r\nvirement urgent\r\n");

        let groups = groups();
        let result = FileProcessor::with_extractor(&groups, PanickingExtractor).process(&file);

        let failure = result.failure.unwrap();
        assert_eq!(failure.stage, FailureStage::Panic);
        assert_eq!(failure.reason, "decoder blew up");
        assert_eq!(failure.file_path, file.path);
        assert!(result.matches.is_empty());
        assert!(result.string_hits.is_empty());
    }

    #[test]
    fn test_headerless_file_is_searched_as_body() {
        let temp = TempDir::new().unwrap();
        let file = scanned(&temp, "body.eml", b"virement urgent\n");

        let groups = groups();
        let result = FileProcessor::new(&groups).process(&file);

        assert!(result.failure.is_none());
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.string_hits.len(), 2);
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }
}
