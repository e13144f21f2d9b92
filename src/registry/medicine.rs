//! Medicine reference table.
//!
//! A flat CSV with named columns: a `disease` key column, language-suffixed
//! columns (`name_english`, `name_french`, `dosage_english`, ...) and
//! language-free columns (`image_url`, `calories`, `protein_g`, `price`).
//! Rows are kept as open field maps so new language columns need no code
//! change. Lookups go through an index keyed on the lower-cased disease
//! name, built once at load.

use std::path::Path;

use log::warn;
use rustc_hash::FxHashMap;

use crate::error::{AnalyzerError, Result};

/// Column holding the disease key in the reference table
const DISEASE_COLUMN: &str = "disease";

/// Language every localized field falls back to
const FALLBACK_LANGUAGE: &str = "english";

/// One row of the medicine reference table
#[derive(Debug, Clone)]
pub struct MedicineRecord {
    disease: String,
    fields: FxHashMap<String, String>,
}

impl MedicineRecord {
    /// Build a record from a disease key and its named fields
    #[must_use]
    pub fn new(
        disease: impl Into<String>,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            disease: disease.into(),
            fields: fields.into_iter().collect(),
        }
    }

    /// Disease key as it appears in the table
    #[must_use]
    pub fn disease(&self) -> &str {
        &self.disease
    }

    /// Raw field by exact column name; empty cells count as absent
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Language-variant field: `<name>_<language>`, falling back to the
    /// english column when the variant is absent or empty. An unrecognized
    /// language simply matches no column and lands on the fallback.
    #[must_use]
    pub fn localized(&self, name: &str, language: &str) -> Option<&str> {
        self.field(&format!("{name}_{language}"))
            .or_else(|| self.field(&format!("{name}_{FALLBACK_LANGUAGE}")))
    }
}

/// Medicine reference table with a disease-name index
#[derive(Debug, Clone, Default)]
pub struct MedicineRegistry {
    records: Vec<MedicineRecord>,
    by_disease: FxHashMap<String, Vec<usize>>,
}

impl MedicineRegistry {
    /// Build a registry from records, indexing by lower-cased disease name
    #[must_use]
    pub fn new(records: Vec<MedicineRecord>) -> Self {
        let mut by_disease: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, record) in records.iter().enumerate() {
            by_disease
                .entry(record.disease.to_lowercase())
                .or_default()
                .push(i);
        }
        Self {
            records,
            by_disease,
        }
    }

    /// Load the reference table from a CSV file with a header row.
    ///
    /// A missing file, unreadable CSV or a header without the `disease`
    /// column is fatal. Rows with an empty disease key are skipped with a
    /// warning; they could never be matched.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|source| AnalyzerError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        let headers = reader
            .headers()
            .map_err(|source| AnalyzerError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .clone();
        if !headers.iter().any(|h| h == DISEASE_COLUMN) {
            return Err(AnalyzerError::artifact(format!(
                "medicine table {} has no `{DISEASE_COLUMN}` column",
                path.display()
            )));
        }

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|source| AnalyzerError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            let mut disease = String::new();
            let mut fields = FxHashMap::default();
            for (header, value) in headers.iter().zip(record.iter()) {
                if header == DISEASE_COLUMN {
                    disease = value.trim().to_string();
                } else {
                    fields.insert(header.to_string(), value.trim().to_string());
                }
            }
            if disease.is_empty() {
                warn!("medicine table row {} has no disease key, skipping", row + 2);
                continue;
            }
            records.push(MedicineRecord { disease, fields });
        }
        Ok(Self::new(records))
    }

    /// All records for a disease, matched case-insensitively, in table order
    #[must_use]
    pub fn for_disease(&self, disease: &str) -> Vec<&MedicineRecord> {
        self.by_disease
            .get(&disease.to_lowercase())
            .map(|indexes| indexes.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Number of rows in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
