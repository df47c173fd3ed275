use crate::analyzer::pattern::build_model_pattern;
use crate::analyzer::tokenizer::Tokenizer;
use crate::model::{PatternError, Product};
use regex::Regex;
use tracing::debug;

/// A catalog product together with everything precomputed for matching.
#[derive(Debug, Clone)]
pub struct IndexedProduct {
    pub product: Product,
    pub tokens: Vec<String>,
    pub tokens_count: usize,
    pub manufacturer_lower: String,
    pub model_pattern: Regex,
}

impl IndexedProduct {
    pub fn new(product: Product, tokenizer: &Tokenizer) -> Result<Self, PatternError> {
        let model_pattern = build_model_pattern(&product.model)?;
        let tokens = tokenizer.tokenize(&[
            product.product_name.as_str(),
            product.model.as_str(),
            product.manufacturer.as_str(),
        ]);
        Ok(Self {
            tokens_count: tokens.len(),
            manufacturer_lower: product.manufacturer.to_lowercase(),
            tokens,
            model_pattern,
            product,
        })
    }
}

/// Catalog products in catalog order, built once before matching.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    products: Vec<IndexedProduct>,
}

impl ProductIndex {
    pub fn build(products: Vec<Product>, tokenizer: &Tokenizer) -> Result<Self, PatternError> {
        let products = products
            .into_iter()
            .map(|product| {
                let indexed = IndexedProduct::new(product, tokenizer)?;
                debug!(
                    product = %indexed.product.product_name,
                    tokens = ?indexed.tokens,
                    pattern = %indexed.model_pattern,
                    "Indexed product"
                );
                Ok(indexed)
            })
            .collect::<Result<Vec<_>, PatternError>>()?;
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[IndexedProduct] {
        &self.products
    }

    pub fn get(&self, position: usize) -> Option<&IndexedProduct> {
        self.products.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, manufacturer: &str, model: &str) -> Product {
        Product {
            product_name: name.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }

    #[test]
    fn derives_tokens_from_name_model_and_manufacturer() {
        let indexed =
            IndexedProduct::new(product("Acme_PL170", "Acme", "PL 170"), &Tokenizer::default()).unwrap();
        assert_eq!(indexed.tokens, vec!["acme", "pl170", "pl", "170"]);
        assert_eq!(indexed.tokens_count, 4);
        assert_eq!(indexed.manufacturer_lower, "acme");
        assert!(indexed.model_pattern.is_match("acme pl-170"));
    }

    #[test]
    fn keeps_catalog_order() {
        let index = ProductIndex::build(
            vec![product("B", "x", "2"), product("A", "x", "1")],
            &Tokenizer::default(),
        )
        .unwrap();
        let names: Vec<_> = index.products().iter().map(|p| p.product.product_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(index.len(), 2);
    }
}
