//! Disease label registry.
//!
//! Ordered disease names, index-aligned with the classifier's output
//! distribution. Like the vocabulary, the order is fixed at training time
//! and loaded read-only.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use itertools::Itertools;

use crate::error::{AnalyzerError, Result};

/// Ordered disease labels the classifier can output
#[derive(Debug, Clone)]
pub struct LabelRegistry {
    names: Vec<String>,
}

impl LabelRegistry {
    /// Build a registry from an ordered label list
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(AnalyzerError::artifact("label registry is empty"));
        }
        if !names.iter().all_unique() {
            return Err(AnalyzerError::artifact(
                "label registry contains duplicate names",
            ));
        }
        Ok(Self { names })
    }

    /// Load the labels from the JSON artifact written at training time
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| AnalyzerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let names: Vec<String> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| AnalyzerError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(names)
    }

    /// Label at a given output index
    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All labels in output order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of labels, equal to the classifier's output length
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty (never true once loaded)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
