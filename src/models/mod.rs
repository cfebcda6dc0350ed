// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod findings;
pub mod word_group;

pub use findings::{FailureStage, FileFailure, MatchRecord, StringHit};
pub use word_group::WordGroup;
