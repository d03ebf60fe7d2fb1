use std::path::PathBuf;

use super::{CatalogError, CatalogSource};
use crate::models::CourseRecord;

/// Reads the catalog from a JSON file holding an array of course records
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<CourseRecord>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let records: Vec<CourseRecord> = serde_json::from_str(&content)?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = content.len(),
            records = records.len(),
            "Read course catalog file"
        );

        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
