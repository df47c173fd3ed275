// JSON-lines parsing of product and listing records
use crate::model::{InputError, Listing, ListingId, Product};
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::PathBuf;

pub trait Parser {
    fn parse_products(&self, text: &str) -> Result<Vec<Product>, InputError>;
    fn parse_listings(&self, text: &str) -> Result<Vec<Listing>, InputError>;
}

/// Parses one JSON object per line. Blank lines are skipped; anything else
/// that is not an object carrying the required string fields is fatal.
pub struct JsonLinesParser {
    path: PathBuf,
}

impl JsonLinesParser {
    /// `path` is only used to name the file in errors.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Yields (1-based line number, trimmed line, parsed object).
    fn objects<'t>(
        &'t self,
        text: &'t str,
    ) -> impl Iterator<Item = Result<(usize, &'t str, Map<String, Value>), InputError>> + 't {
        text.lines()
            .enumerate()
            .map(|(n, line)| (n + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(move |(line_no, line)| match serde_json::from_str::<Value>(line) {
                Ok(Value::Object(object)) => Ok((line_no, line, object)),
                Ok(other) => Err(self.malformed(line_no, format!("expected an object, found {}", kind(&other)))),
                Err(e) => Err(self.malformed(line_no, e.to_string())),
            })
    }

    fn malformed(&self, line: usize, reason: String) -> InputError {
        InputError::Malformed {
            path: self.path.clone(),
            line,
            reason,
        }
    }

    fn string_field(
        &self,
        object: &Map<String, Value>,
        line: usize,
        field: &'static str,
    ) -> Result<String, InputError> {
        object
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| InputError::MissingField {
                path: self.path.clone(),
                line,
                field,
            })
    }
}

impl Parser for JsonLinesParser {
    fn parse_products(&self, text: &str) -> Result<Vec<Product>, InputError> {
        let mut seen = HashSet::new();
        let mut products = Vec::new();

        for entry in self.objects(text) {
            let (line, _, object) = entry?;
            let product = Product {
                product_name: self.string_field(&object, line, "product_name")?,
                manufacturer: self.string_field(&object, line, "manufacturer")?,
                model: self.string_field(&object, line, "model")?,
            };
            if !seen.insert(product.product_name.clone()) {
                return Err(InputError::DuplicateProduct {
                    path: self.path.clone(),
                    line,
                    name: product.product_name,
                });
            }
            products.push(product);
        }

        Ok(products)
    }

    fn parse_listings(&self, text: &str) -> Result<Vec<Listing>, InputError> {
        let mut listings = Vec::new();

        for entry in self.objects(text) {
            let (line_no, line, object) = entry?;
            let title = self.string_field(&object, line_no, "title")?;
            let manufacturer = self.string_field(&object, line_no, "manufacturer")?;
            let raw = RawValue::from_string(line.to_string())
                .map_err(|e| self.malformed(line_no, e.to_string()))?;
            listings.push(Listing {
                id: ListingId(listings.len()),
                title,
                manufacturer,
                raw,
            });
        }

        Ok(listings)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
