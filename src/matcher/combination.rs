// file: src/matcher/combination.rs
// description: flags word groups whose A and B terms co-occur in a message's decoded text
// reference: substring search over normalized text

use crate::error::Result;
use crate::extractor::{EmailExtractor, MessageContent, TextExtractor};
use crate::models::{MatchRecord, WordGroup};
use crate::parser::TermNormalizer;
use std::path::Path;
use tracing::debug;

pub struct CombinationMatcher<'a, E = EmailExtractor> {
    groups: &'a [WordGroup],
    extractor: E,
    normalizer: TermNormalizer,
}

impl<'a> CombinationMatcher<'a> {
    pub fn new(groups: &'a [WordGroup]) -> Self {
        Self::with_extractor(groups, EmailExtractor::new())
    }
}

impl<'a, E: TextExtractor> CombinationMatcher<'a, E> {
    pub fn with_extractor(groups: &'a [WordGroup], extractor: E) -> Self {
        Self {
            groups,
            extractor,
            normalizer: TermNormalizer::new(),
        }
    }

    /// Searches the rendered view of `content`. Fails only when the
    /// extractor does.
    pub fn search_content(&self, content: &MessageContent) -> Result<Vec<MatchRecord>> {
        let rendered = content.rendered_text(&self.extractor)?;
        let normalized = self.normalizer.normalize(&rendered);
        Ok(self.search_text(&normalized, content.path()))
    }

    /// `text` must already be normalized. Matching is plain substring
    /// search, so `cat` matches inside `concatenate`.
    pub fn search_text(&self, text: &str, file_path: &Path) -> Vec<MatchRecord> {
        let mut records = Vec::new();

        for group in self.groups {
            let found_a = find_terms(&group.a, text);
            if found_a.is_empty() {
                continue;
            }

            let found_b = find_terms(&group.b, text);
            if found_b.is_empty() {
                continue;
            }

            debug!(
                "Combination match in {}: A={:?} B={:?}",
                file_path.display(),
                found_a,
                found_b
            );
            records.push(MatchRecord::new(found_a, found_b, file_path));
        }

        records
    }
}

fn find_terms(terms: &[String], text: &str) -> Vec<String> {
    terms
        .iter()
        .filter(|term| text.contains(term.as_str()))
        .cloned()
        .collect()
}
