//! Groups free-text marketplace listings under the catalog products they
//! describe, using token coverage, manufacturer containment and a
//! spacing-tolerant model pattern.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod source;
pub mod storage;
pub mod utils;
