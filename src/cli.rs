//! Command-line arguments.

use crate::config::{AppConfig, MatchPolicy};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "listing-matcher",
    version,
    about = "Group marketplace listings under the catalog products they describe"
)]
pub struct Cli {
    /// Products input file, one JSON object per line.
    #[arg(short = 'p', long = "products", value_name = "FILE")]
    pub products_file: Option<PathBuf>,

    /// Listings input file, one JSON object per line.
    #[arg(short = 'l', long = "listings", value_name = "FILE")]
    pub listings_file: Option<PathBuf>,

    /// Results output file.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Also write listings that matched no product to this file.
    #[arg(long = "unmatched", value_name = "FILE")]
    pub unmatched_file: Option<PathBuf>,

    /// JSON config file; flags given here override its values.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How many product tokens a listing title may be missing.
    #[arg(long = "slack", value_name = "N")]
    pub token_slack: Option<usize>,

    /// Which products keep a listing that matches several of them.
    #[arg(long = "policy", value_enum)]
    pub policy: Option<MatchPolicy>,

    /// Number of matching workers.
    #[arg(long = "workers", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: Option<u16>,

    /// More log output (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Applies every flag that was given on top of `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.products_file {
            config.products_file = path.clone();
        }
        if let Some(path) = &self.listings_file {
            config.listings_file = path.clone();
        }
        if let Some(path) = &self.output_file {
            config.output_file = path.clone();
        }
        if let Some(path) = &self.unmatched_file {
            config.unmatched_file = Some(path.clone());
        }
        if let Some(slack) = self.token_slack {
            config.matching.token_slack = slack;
        }
        if let Some(policy) = self.policy {
            config.matching.policy = policy;
        }
        if let Some(workers) = self.workers {
            config.matching.workers = usize::from(workers);
        }
        config
    }
}
