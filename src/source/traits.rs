use crate::model::InputError;
use std::path::Path;

#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Returns the full text behind `path`.
    async fn fetch(&self, path: &Path) -> Result<String, InputError>;
}
