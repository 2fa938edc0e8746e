use crate::core::{CalculatorEntry, CalculatorListing};
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Calculator listing stored as a JSON array, e.g. `data/calculators.json`.
#[derive(Debug, Clone)]
pub struct JsonListingFile {
    path: PathBuf,
}

impl JsonListingFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(content: &str) -> Result<Vec<CalculatorEntry>> {
        Ok(serde_json::from_str(content)?)
    }
}

impl CalculatorListing for JsonListingFile {
    fn entries(&self) -> Result<Vec<CalculatorEntry>> {
        tracing::debug!("Reading calculator listing from {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}
