pub mod jsonl_parser;

pub use jsonl_parser::{JsonLinesParser, Parser};
