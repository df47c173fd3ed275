use crate::analyzer::index::ProductIndex;
use crate::analyzer::matcher::MatchResult;
use crate::model::{Listing, ListingView, MatchSummary, ProductMatches};

/// One record per catalog product, in catalog order, carrying the original
/// listing records matched to it. Products without matches get an empty list.
///
/// `listings` must be in id order, i.e. as loaded.
pub fn aggregate<'a>(
    index: &'a ProductIndex,
    result: &MatchResult,
    listings: &'a [Listing],
) -> Vec<ProductMatches<'a>> {
    index
        .products()
        .iter()
        .enumerate()
        .map(|(position, product)| ProductMatches {
            product_name: &product.product.product_name,
            listings: result
                .group(position)
                .iter()
                .filter_map(|id| listings.get(id.0))
                .map(|listing| &*listing.raw)
                .collect(),
        })
        .collect()
}

pub fn summarize(result: &MatchResult, views: &[ListingView]) -> MatchSummary {
    let matched_listings = views.iter().filter(|v| v.matched).count();
    MatchSummary {
        products: result.groups().len(),
        listings: views.len(),
        matched_listings,
        unmatched_listings: views.len() - matched_listings,
        empty_products: result.groups().iter().filter(|g| g.is_empty()).count(),
        assignments: result.assignments(),
    }
}
