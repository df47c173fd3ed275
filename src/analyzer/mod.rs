// Analyzer module: the matching engine, leaf-first.

pub mod tokenizer;
pub mod pattern;
pub mod index;
pub mod gates;
pub mod matcher;
pub mod aggregator;

// Re-export the main entry points for ease of use.
pub use index::ProductIndex;
pub use matcher::{Matcher, MatcherImpl, MatchResult};
pub use tokenizer::Tokenizer;
