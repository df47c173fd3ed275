// Core structs: Product, Listing, ListingView, ProductMatches
use serde::Serialize;
use serde_json::value::RawValue;
use std::path::PathBuf;
use thiserror::Error;

/// Canonical catalog entry, as read from the products file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_name: String,
    pub manufacturer: String,
    pub model: String,
}

/// Stable identifier of a listing: its position in the listings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(pub usize);

/// Marketplace listing as read from the listings file.
///
/// `raw` is the exact JSON text of the input line and is what gets written
/// back out; `title` and `manufacturer` are copies used for matching only.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub manufacturer: String,
    pub raw: Box<RawValue>,
}

/// Matching-only view of a listing. Never serialized.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub id: ListingId,
    pub title_lower: String,
    pub manufacturer_lower: String,
    pub matched: bool,
}

impl ListingView {
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            id: listing.id,
            title_lower: listing.title.to_lowercase(),
            manufacturer_lower: listing.manufacturer.to_lowercase(),
            matched: false,
        }
    }
}

/// One output line: a product and the original listings matched to it.
#[derive(Debug, Serialize)]
pub struct ProductMatches<'a> {
    pub product_name: &'a str,
    pub listings: Vec<&'a RawValue>,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub products: usize,
    pub listings: usize,
    pub matched_listings: usize,
    pub unmatched_listings: usize,
    pub empty_products: usize,
    pub assignments: usize,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file {} could not be read: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: not a JSON object: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("{}:{line}: missing or non-string field `{field}`", .path.display())]
    MissingField {
        path: PathBuf,
        line: usize,
        field: &'static str,
    },
    #[error("{}:{line}: duplicate product_name {name:?}", .path.display())]
    DuplicateProduct {
        path: PathBuf,
        line: usize,
        name: String,
    },
}

#[derive(Debug, Error)]
#[error("model {model:?} could not be compiled into a pattern: {source}")]
pub struct PatternError {
    pub model: String,
    #[source]
    pub source: regex::Error,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output file {} could not be written: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("result serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} could not be read: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {} is not valid: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("matching worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Any fatal error of a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
