// file: src/extractor/content.rs
// description: one read of a message file exposing its rendered and raw text views
// reference: internal data structures

use crate::error::{Result, ScanError};
use crate::extractor::email::TextExtractor;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The bytes of one message file, read once and shared by both searches.
#[derive(Debug, Clone)]
pub struct MessageContent {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl MessageContent {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| ScanError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(Self::from_bytes(path, bytes))
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whole file as UTF-8 with invalid sequences replaced: headers, MIME
    /// boundaries and still-encoded attachment bodies included.
    pub fn raw_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Decoded text of the message's text/plain and text/html parts.
    pub fn rendered_text<E: TextExtractor + ?Sized>(&self, extractor: &E) -> Result<String> {
        debug!("Extracting text from email: {}", self.path.display());
        extractor.extract(&self.bytes)
    }
}
