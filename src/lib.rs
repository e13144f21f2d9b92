//! Symptom-to-disease inference service.
//!
//! Accepts a structured symptom report, encodes it into the fixed-length
//! feature vector the classifier was trained on, thresholds the predicted
//! distribution into disease candidates and joins each candidate against a
//! localized medicine reference table.

pub mod config;
pub mod context;
pub mod encode;
pub mod error;
pub mod http;
pub mod interpret;
pub mod model;
pub mod recommend;
pub mod registry;

// Re-export the most common types for easier use
// Core types
pub use config::ServiceConfig;
pub use context::{Analysis, AnalyzerContext};
pub use error::{AnalyzerError, Result};

// Pipeline stages
pub use encode::{EXTRA_FEATURES, Gender, SymptomReport, encode};
pub use interpret::{DEFAULT_THRESHOLD, DiseaseCandidate, interpret};
pub use recommend::{Nutrition, Recommendation, recommend};

// Loaded registries and the classifier seam
pub use model::{Classifier, MlpClassifier};
pub use registry::{LabelRegistry, MedicineRecord, MedicineRegistry, SymptomVocabulary};
