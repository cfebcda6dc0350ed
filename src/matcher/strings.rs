// file: src/matcher/strings.rs
// description: case-insensitive term search over the raw, unparsed file text
// reference: substring search over raw bytes

use crate::extractor::MessageContent;
use crate::models::{StringHit, WordGroup};
use std::collections::HashSet;
use std::path::Path;

/// Terms are compared lowercased against the lowercased raw text. The raw
/// text is not diacritic-folded, and headers, boundaries and encoded bodies
/// are all searched.
pub struct StringMatcher<'a> {
    groups: &'a [WordGroup],
}

impl<'a> StringMatcher<'a> {
    pub fn new(groups: &'a [WordGroup]) -> Self {
        Self { groups }
    }

    pub fn search_content(&self, content: &MessageContent) -> Vec<StringHit> {
        self.search_text(&content.raw_text(), content.path())
    }

    /// One hit per distinct configured term found, in first-seen order.
    pub fn search_text(&self, raw: &str, file_path: &Path) -> Vec<StringHit> {
        let haystack = raw.to_lowercase();
        let mut seen = HashSet::new();
        let mut hits = Vec::new();

        for term in self.groups.iter().flat_map(WordGroup::terms) {
            if seen.contains(term) {
                continue;
            }
            if haystack.contains(&term.to_lowercase()) {
                seen.insert(term);
                hits.push(StringHit::new(term, file_path));
            }
        }

        hits
    }
}
