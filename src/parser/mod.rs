// file: src/parser/mod.rs
// description: word list parsing and term normalization exports
// reference: internal module structure

pub mod normalizer;
pub mod wordlist;

pub use normalizer::TermNormalizer;
pub use wordlist::WordListLoader;
