// file: src/parser/wordlist.rs
// description: parses the `A=...|B=...` word list into normalized word groups
// reference: line-oriented text parsing

use crate::config::WordListConfig;
use crate::error::{Result, ScanError};
use crate::models::WordGroup;
use crate::parser::normalizer::TermNormalizer;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

pub struct WordListLoader {
    normalizer: TermNormalizer,
    skip_malformed: bool,
}

impl WordListLoader {
    pub fn new(config: &WordListConfig) -> Self {
        Self {
            normalizer: TermNormalizer::new(),
            skip_malformed: config.skip_malformed,
        }
    }

    /// Loads every group, failing on the first malformed line unless
    /// malformed lines are configured to be skipped.
    pub fn load(&self, path: &Path) -> Result<Vec<WordGroup>> {
        let mut groups = Vec::new();
        self.load_into(path, &mut groups)?;
        Ok(groups)
    }

    /// Like [`load`](Self::load), but logs the error and returns the groups
    /// parsed before it.
    pub fn load_lenient(&self, path: &Path) -> Vec<WordGroup> {
        let mut groups = Vec::new();
        if let Err(e) = self.load_into(path, &mut groups) {
            error!("Error reading word list: {}", e);
            warn!("Continuing with {} word group(s)", groups.len());
        }
        groups
    }

    pub fn parse_str(&self, content: &str, source: &Path) -> Result<Vec<WordGroup>> {
        let mut groups = Vec::new();
        self.parse_into(content, source, &mut groups)?;
        Ok(groups)
    }

    fn load_into(&self, path: &Path, groups: &mut Vec<WordGroup>) -> Result<()> {
        info!("Reading word list from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ScanError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_into(&content, path, groups)?;
        info!("Loaded {} word group(s)", groups.len());
        Ok(())
    }

    fn parse_into(&self, content: &str, source: &Path, groups: &mut Vec<WordGroup>) -> Result<()> {
        let content = content.trim_start_matches('\u{feff}');

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Ok(group) => {
                    if !group.can_match() {
                        warn!(
                            "Word group on line {} has an empty side and will never match",
                            index + 1
                        );
                    }
                    groups.push(group);
                }
                Err(message) if self.skip_malformed => {
                    warn!("Skipping line {} of {}: {}", index + 1, source.display(), message);
                }
                Err(message) => {
                    return Err(ScanError::WordList {
                        path: source.to_path_buf(),
                        line: index + 1,
                        message,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn parse_line(&self, line: &str) -> std::result::Result<WordGroup, String> {
        let fields: Vec<&str> = line.split('|').collect();
        let [a_part, b_part] = fields.as_slice() else {
            return Err(format!(
                "expected exactly one '|' separator, found {}",
                fields.len() - 1
            ));
        };

        let a = self.parse_terms(a_part, "A=");
        let b = self.parse_terms(b_part, "B=");
        debug!("Parsed word group A={:?} B={:?}", a, b);

        Ok(WordGroup::new(a, b))
    }

    fn parse_terms(&self, part: &str, prefix: &str) -> Vec<String> {
        let part = part.trim();
        let part = part.strip_prefix(prefix).unwrap_or(part);

        part.split(',')
            .map(|term| self.normalizer.normalize(term.trim()))
            .filter(|term| !term.is_empty())
            .collect()
    }
}
