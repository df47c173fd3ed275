// The three pass/fail criteria a (listing, product) pair must satisfy.
use crate::analyzer::index::IndexedProduct;
use crate::model::ListingView;
use crate::utils::contains_either_way;

/// Number of product tokens found as substrings of the lowercased title.
pub fn matching_tokens(tokens: &[String], title_lower: &str) -> usize {
    tokens.iter().filter(|t| title_lower.contains(t.as_str())).count()
}

/// Gate 1: the title may be missing at most `slack` of the product's tokens.
pub fn token_coverage(product: &IndexedProduct, title_lower: &str, slack: usize) -> bool {
    matching_tokens(&product.tokens, title_lower) + slack >= product.tokens_count
}

/// Gate 2: one manufacturer name contains the other. Both are lowercase.
pub fn manufacturer_compatible(product_manufacturer_lower: &str, listing_manufacturer_lower: &str) -> bool {
    contains_either_way(product_manufacturer_lower, listing_manufacturer_lower)
}

/// Gate 3: the product's model pattern occurs in the title.
pub fn model_matches(product: &IndexedProduct, title_lower: &str) -> bool {
    product.model_pattern.is_match(title_lower)
}

/// All three gates, cheapest first.
pub fn passes_all(product: &IndexedProduct, listing: &ListingView, slack: usize) -> bool {
    token_coverage(product, &listing.title_lower, slack)
        && manufacturer_compatible(&product.manufacturer_lower, &listing.manufacturer_lower)
        && model_matches(product, &listing.title_lower)
}
