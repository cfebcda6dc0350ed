// file: src/models/word_group.rs
// description: paired A/B term lists loaded from the word list
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Terms are stored already normalized; a group never changes after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    #[serde(rename = "A")]
    pub a: Vec<String>,
    #[serde(rename = "B")]
    pub b: Vec<String>,
}

impl WordGroup {
    pub fn new(a: Vec<String>, b: Vec<String>) -> Self {
        Self { a, b }
    }

    /// A terms followed by B terms.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.a.iter().chain(self.b.iter()).map(String::as_str)
    }

    pub fn can_match(&self) -> bool {
        !self.a.is_empty() && !self.b.is_empty()
    }
}
