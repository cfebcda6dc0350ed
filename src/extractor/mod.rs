// file: src/extractor/mod.rs
// description: message content loading and text extraction exports
// reference: internal module structure

pub mod content;
pub mod email;

pub use content::MessageContent;
pub use email::{EmailExtractor, TextExtractor};
