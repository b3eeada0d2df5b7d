//! Intent dataset loading

use crate::error::{ResolverError, Result};
use crate::types::Dataset;
use std::path::Path;
use tracing::info;

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)
            .map_err(|e| ResolverError::DatasetUnavailable(format!("Failed to parse dataset: {}", e)))?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ResolverError::DatasetUnavailable(format!("{}: {}", path.display(), e)))?;
        let dataset = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            intents = dataset.intents.len(),
            patterns = dataset.pattern_count(),
            "Loaded intent dataset"
        );
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<()> {
        if self.intents.is_empty() {
            return Err(ResolverError::InvalidDataset("dataset has no intents".to_string()));
        }
        if let Some(pos) = self.intents.iter().position(|i| i.tag.trim().is_empty()) {
            return Err(ResolverError::InvalidDataset(format!("intent #{} has an empty tag", pos)));
        }
        Ok(())
    }

    /// Intent tags in dataset order
    pub fn tags(&self) -> Vec<&str> {
        self.intents.iter().map(|i| i.tag.as_str()).collect()
    }
}
