use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PRODUCTS_FILE: &str = "data/products.txt";
pub const DEFAULT_LISTINGS_FILE: &str = "data/listings.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "results.txt";

/// How many of a product's tokens a listing title may be missing.
pub const DEFAULT_TOKEN_SLACK: usize = 2;
/// Characters that separate tokens in product names and models.
pub const DEFAULT_DELIMITERS: &str = "-_ ";

/// What to do when one listing passes the gates for several products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Keep the listing under every product it matches.
    #[default]
    All,
    /// Keep it only under the earliest matching product in catalog order.
    First,
    /// Keep it only under the latest matching product in catalog order.
    Last,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub token_slack: usize,
    pub delimiters: String,
    pub policy: MatchPolicy,
    pub workers: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            token_slack: DEFAULT_TOKEN_SLACK,
            delimiters: DEFAULT_DELIMITERS.to_string(),
            policy: MatchPolicy::default(),
            workers: 1,
        }
    }
}

impl MatchingConfig {
    pub fn delimiter_chars(&self) -> Vec<char> {
        self.delimiters.chars().collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub products_file: PathBuf,
    pub listings_file: PathBuf,
    pub output_file: PathBuf,
    pub unmatched_file: Option<PathBuf>,
    pub matching: MatchingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            products_file: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            listings_file: PathBuf::from(DEFAULT_LISTINGS_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            unmatched_file: None,
            matching: MatchingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matching.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        if self.matching.delimiters.is_empty() {
            return Err(ConfigError::Invalid("delimiters must not be empty".into()));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
