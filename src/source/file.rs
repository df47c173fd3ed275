use crate::model::InputError;
use crate::source::traits::Source;
use std::path::Path;
use tracing::debug;

/// Reads input files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Source for FileSource {
    async fn fetch(&self, path: &Path) -> Result<String, InputError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| InputError::Unavailable {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), bytes = text.len(), "Read input file");
        Ok(text)
    }
}
