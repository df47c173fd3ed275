use crate::analyzer::aggregator::{aggregate, summarize};
use crate::analyzer::{Matcher, MatcherImpl, ProductIndex, Tokenizer};
use crate::config::AppConfig;
use crate::model::{AppError, ListingView, MatchSummary};
use crate::parser::{JsonLinesParser, Parser};
use crate::source::{FileSource, Source};
use crate::storage::ResultsWriter;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs one matching pass over the files named in `config`.
pub async fn run(config: &AppConfig) -> Result<MatchSummary, AppError> {
    run_with_source(config, &FileSource::new()).await
}

/// Reads both inputs, matches every listing against the catalog and writes
/// the results. Nothing is written unless both inputs parse.
pub async fn run_with_source<S: Source>(
    config: &AppConfig,
    source: &S,
) -> Result<MatchSummary, AppError> {
    config.validate()?;

    info!("Opening input files:");
    info!("Products: {}", config.products_file.display());
    info!("Listings: {}", config.listings_file.display());

    let (products_text, listings_text) = tokio::try_join!(
        source.fetch(&config.products_file),
        source.fetch(&config.listings_file),
    )?;

    let products = JsonLinesParser::new(&config.products_file).parse_products(&products_text)?;
    let listings = JsonLinesParser::new(&config.listings_file).parse_listings(&listings_text)?;

    info!(
        "Mapping {} listings to {} unique products...",
        listings.len(),
        products.len()
    );

    let tokenizer = Tokenizer::new(config.matching.delimiter_chars());
    let index = ProductIndex::build(products, &tokenizer)?;
    let views: Vec<ListingView> = listings.iter().map(ListingView::from_listing).collect();

    let matcher = MatcherImpl::from_config(&config.matching);
    let (index, views, result) = if config.matching.workers > 1 {
        let index = Arc::new(index);
        let (views, result) = matcher
            .match_all_parallel(Arc::clone(&index), views, config.matching.workers)
            .await?;
        (index, views, result)
    } else {
        let mut views = views;
        let result = matcher.match_all(&index, &mut views);
        (Arc::new(index), views, result)
    };

    // Serialize everything first; the results file is written last so it
    // only appears once every other output succeeded.
    let groups = aggregate(&index, &result, &listings);
    let results = ResultsWriter::new(&config.output_file).prepare_matches(&groups)?;
    let unmatched = match &config.unmatched_file {
        Some(path) => Some(ResultsWriter::new(path).prepare_unmatched(&views, &listings)?),
        None => None,
    };

    if let Some(unmatched) = unmatched {
        unmatched.write().await?;
    }
    results.write().await?;

    let summary = summarize(&result, &views);
    info!(
        "Matched {} of {} listings ({} assignments); {} products without listings",
        summary.matched_listings, summary.listings, summary.assignments, summary.empty_products
    );
    if summary.unmatched_listings > 0 {
        warn!("{} listings matched no product", summary.unmatched_listings);
    }
    Ok(summary)
}
