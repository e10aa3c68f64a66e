use std::{future::Future, path::PathBuf};

use crate::error::Error;

/// Source of the raw upstream payload produced by the scraping collaborator.
pub trait RawFeed {
    /// Loads every raw series record. Records stay untyped so a single malformed record can
    /// be skipped by the normalizer instead of failing the load.
    fn load(&self) -> impl Future<Output = Result<Vec<serde_json::Value>, Error>> + Send;
}

/// Reads the payload from a JSON array on disk.
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RawFeed for JsonFileFeed {
    async fn load(&self) -> Result<Vec<serde_json::Value>, Error> {
        let contents = tokio::fs::read(&self.path).await?;
        let records: Vec<serde_json::Value> = serde_json::from_slice(&contents)?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded raw feed"
        );

        Ok(records)
    }
}
