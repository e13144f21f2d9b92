//! Feature encoding of a symptom report.
//!
//! The layout must match training exactly: `|vocabulary|` binary presence
//! flags in vocabulary order, then the gender category, normalized age,
//! normalized temperature and normalized duration. The scaling divisors are
//! training-time constants, never re-derived from data here.

use serde::Deserialize;

use crate::registry::SymptomVocabulary;

/// Feature slots appended after the symptom presence flags
pub const EXTRA_FEATURES: usize = 4;

// Training-time normalization divisors.
const AGE_SCALE: f32 = 100.0;
const TEMPERATURE_SCALE: f32 = 45.0;
const DURATION_SCALE: f32 = 30.0;

/// Gender category used in the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Encoded as 0
    Male,
    /// Encoded as 1
    Female,
    /// Encoded as 2; also the bucket for unrecognized input
    Other,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl Gender {
    /// Numeric category matching the training encoding
    #[must_use]
    pub fn encoded(self) -> f32 {
        match self {
            Self::Male => 0.0,
            Self::Female => 1.0,
            Self::Other => 2.0,
        }
    }
}

/// One inbound symptom report; lives for a single request
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomReport {
    /// Age in years
    pub age: u32,
    /// Free-text gender, mapped case-insensitively
    pub gender: String,
    /// Body temperature in Celsius
    pub body_temperature_c: f32,
    /// Free-text symptom tokens
    pub symptoms: Vec<String>,
    /// How long the symptoms have lasted, in days
    pub duration_days: u32,
    /// Requested language for medicine recommendations
    pub language: String,
}

/// Encode a report into the fixed-length feature vector.
///
/// Symptom tokens are trimmed and lower-cased before lookup; tokens outside
/// the vocabulary are ignored. Encoding never fails and the result always
/// has length `vocabulary.len() + 4`, whatever the input.
#[must_use]
pub fn encode(report: &SymptomReport, vocabulary: &SymptomVocabulary) -> Vec<f32> {
    let mut features = vec![0.0; vocabulary.len() + EXTRA_FEATURES];
    for symptom in &report.symptoms {
        let token = symptom.trim().to_lowercase();
        if let Some(slot) = vocabulary.index_of(&token) {
            features[slot] = 1.0;
        }
    }
    let tail = vocabulary.len();
    features[tail] = Gender::from(report.gender.as_str()).encoded();
    features[tail + 1] = report.age as f32 / AGE_SCALE;
    features[tail + 2] = report.body_temperature_c / TEMPERATURE_SCALE;
    features[tail + 3] = report.duration_days as f32 / DURATION_SCALE;
    features
}
