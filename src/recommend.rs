//! Localized medicine recommendations for predicted diseases.

use serde::Serialize;

use crate::interpret::DiseaseCandidate;
use crate::registry::{MedicineRecord, MedicineRegistry};

/// Name reported when a record has no resolvable name variant at all
const UNKNOWN_NAME: &str = "Unknown";

/// Nutrition facts carried with a recommendation, language-independent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Nutrition {
    /// Calories per dose, as listed in the table
    pub calories: String,
    /// Protein per dose in grams, as listed in the table
    pub protein_g: String,
}

/// One medicine resolved for a requested language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Localized medicine name
    pub name: String,
    /// Product image, language-independent
    pub image_url: String,
    /// Localized description
    pub description: String,
    /// Localized dosage instructions
    pub dosage: String,
    /// Localized food routine (before/after meals)
    pub food_routine: String,
    /// Nutrition facts, language-independent
    pub nutrition: Nutrition,
    /// Price, language-independent
    pub price: String,
    /// The language the fields were resolved for
    pub language: String,
}

/// Join candidates against the medicine registry.
///
/// Results keep candidate order, and table order within one candidate; a
/// candidate with no matching rows contributes nothing. No de-duplication
/// or cross-candidate sorting.
#[must_use]
pub fn recommend(
    candidates: &[DiseaseCandidate],
    language: &str,
    registry: &MedicineRegistry,
) -> Vec<Recommendation> {
    let language = language.trim().to_lowercase();
    candidates
        .iter()
        .flat_map(|candidate| registry.for_disease(&candidate.name))
        .map(|record| resolve(record, &language))
        .collect()
}

/// Resolve one record for a language, falling back to the english fields
fn resolve(record: &MedicineRecord, language: &str) -> Recommendation {
    Recommendation {
        name: record
            .localized("name", language)
            .unwrap_or(UNKNOWN_NAME)
            .to_string(),
        image_url: record.field("image_url").unwrap_or_default().to_string(),
        description: record
            .localized("description", language)
            .unwrap_or_default()
            .to_string(),
        dosage: record
            .localized("dosage", language)
            .unwrap_or_default()
            .to_string(),
        food_routine: record
            .localized("food_routine", language)
            .unwrap_or_default()
            .to_string(),
        nutrition: Nutrition {
            calories: record.field("calories").unwrap_or_default().to_string(),
            protein_g: record.field("protein_g").unwrap_or_default().to_string(),
        },
        price: record.field("price").unwrap_or_default().to_string(),
        language: language.to_string(),
    }
}
