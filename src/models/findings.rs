// file: src/models/findings.rs
// description: per-file results produced by the matchers and the pipeline
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One word group whose A and B sides both matched in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub found_a: Vec<String>,
    pub found_b: Vec<String>,
    pub file_path: PathBuf,
}

impl MatchRecord {
    pub fn new(found_a: Vec<String>, found_b: Vec<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            found_a,
            found_b,
            file_path: file_path.into(),
        }
    }
}

/// A configured term seen in the raw text of a file.
///
/// Equality and ordering use the configured term and the full path, so a
/// term found twice in the same file collapses to one hit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StringHit {
    pub term: String,
    pub file_path: PathBuf,
}

impl StringHit {
    pub fn new(term: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            term: term.into(),
            file_path: file_path.into(),
        }
    }

    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Read,
    Extraction,
    Panic,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureStage::Read => "read",
            FailureStage::Extraction => "extraction",
            FailureStage::Panic => "panic",
        };
        f.write_str(label)
    }
}

/// A file that could not be fully processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub file_path: PathBuf,
    pub stage: FailureStage,
    pub reason: String,
}

impl FileFailure {
    pub fn new(file_path: &Path, stage: FailureStage, reason: impl fmt::Display) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            stage,
            reason: reason.to_string(),
        }
    }
}
