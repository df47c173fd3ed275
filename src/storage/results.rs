use crate::analyzer::matcher::unmatched_listings;
use crate::model::{Listing, ListingView, OutputError, ProductMatches};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Writes line-delimited JSON results to a single file.
pub struct ResultsWriter {
    path: PathBuf,
}

impl ResultsWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serializes one `{"product_name", "listings"}` object per product.
    pub fn prepare_matches(self, groups: &[ProductMatches<'_>]) -> Result<PreparedFile, OutputError> {
        Ok(PreparedFile {
            body: to_json_lines(groups)?,
            records: groups.len(),
            kind: "product groups",
            path: self.path,
        })
    }

    /// Serializes the original record of every listing never marked matched.
    pub fn prepare_unmatched(
        self,
        views: &[ListingView],
        listings: &[Listing],
    ) -> Result<PreparedFile, OutputError> {
        let unmatched: Vec<_> = unmatched_listings(views)
            .into_iter()
            .filter_map(|v| listings.get(v.id.0))
            .map(|l| &*l.raw)
            .collect();
        Ok(PreparedFile {
            body: to_json_lines(&unmatched)?,
            records: unmatched.len(),
            kind: "unmatched listings",
            path: self.path,
        })
    }
}

/// Fully serialized output, written in a single call.
#[derive(Debug)]
pub struct PreparedFile {
    path: PathBuf,
    body: String,
    records: usize,
    kind: &'static str,
}

impl PreparedFile {
    pub fn records(&self) -> usize {
        self.records
    }

    pub async fn write(self) -> Result<usize, OutputError> {
        tokio::fs::write(&self.path, self.body)
            .await
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })?;
        info!("Saved {} {} to {}", self.records, self.kind, self.path.display());
        Ok(self.records)
    }
}

/// Serializes each record on its own line. Non-ASCII text is kept as is.
pub fn to_json_lines<T: Serialize>(records: &[T]) -> Result<String, OutputError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
