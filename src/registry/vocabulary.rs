//! Symptom vocabulary registry.
//!
//! The vocabulary fixes the feature-vector layout: the token at position
//! `i` owns feature slot `i`, so the order produced at training time must
//! survive unchanged into serving. The artifact is an ordered JSON array of
//! normalized (trimmed, lower-cased) tokens.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{AnalyzerError, Result};

/// Ordered, de-duplicated symptom vocabulary with constant-time lookup
#[derive(Debug, Clone)]
pub struct SymptomVocabulary {
    tokens: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl SymptomVocabulary {
    /// Build a vocabulary from an ordered token list.
    ///
    /// An empty list or duplicate tokens mean the artifact is malformed;
    /// serving cannot proceed with an ambiguous feature layout.
    pub fn new(tokens: Vec<String>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(AnalyzerError::artifact("symptom vocabulary is empty"));
        }
        if !tokens.iter().all_unique() {
            return Err(AnalyzerError::artifact(
                "symptom vocabulary contains duplicate tokens",
            ));
        }
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.clone(), i))
            .collect();
        Ok(Self { tokens, index })
    }

    /// Load the vocabulary from the JSON artifact written at training time
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| AnalyzerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens: Vec<String> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| AnalyzerError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(tokens)
    }

    /// Feature slot owned by a normalized token, if it is in the vocabulary
    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Token at a given feature slot
    #[must_use]
    pub fn token_at(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Number of tokens, equal to the symptom portion of the feature vector
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the vocabulary is empty (never true for a loaded vocabulary)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
