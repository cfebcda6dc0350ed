// file: src/matcher/mod.rs
// description: word group search policies over message content
// reference: internal module structure

pub mod combination;
pub mod strings;

pub use combination::CombinationMatcher;
pub use strings::StringMatcher;
