//! The loaded, immutable analyzer context.
//!
//! All process-wide state lives here as an explicitly constructed value:
//! vocabulary, labels, classifier and medicine table, loaded once before
//! the listener binds and shared read-only across requests. Keeping it a
//! value (not module-level globals) lets tests run the full pipeline
//! against fixture registries.

use std::time::Instant;

use log::{info, warn};

use crate::config::ServiceConfig;
use crate::encode::{self, EXTRA_FEATURES, SymptomReport};
use crate::error::{AnalyzerError, Result};
use crate::interpret::{self, DiseaseCandidate};
use crate::model::{Classifier, MlpClassifier};
use crate::recommend::{self, Recommendation};
use crate::registry::{LabelRegistry, MedicineRegistry, SymptomVocabulary};

/// Everything the request pipeline needs, loaded once before serving
pub struct AnalyzerContext {
    vocabulary: SymptomVocabulary,
    labels: LabelRegistry,
    classifier: Box<dyn Classifier>,
    medicines: MedicineRegistry,
    threshold: f32,
}

/// Output of one analysis: candidates plus their joined recommendations
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Diseases whose probability cleared the threshold, in label order
    pub diseases: Vec<DiseaseCandidate>,
    /// Localized medicine recommendations, in candidate order
    pub medicines: Vec<Recommendation>,
}

impl AnalyzerContext {
    /// Assemble a context, validating that the classifier shape matches
    /// the vocabulary and label registries.
    ///
    /// This is the drift check: a vocabulary or label list that no longer
    /// matches what the classifier was trained on must fail here, at
    /// startup, not surface as wrong predictions later.
    pub fn new(
        vocabulary: SymptomVocabulary,
        labels: LabelRegistry,
        classifier: Box<dyn Classifier>,
        medicines: MedicineRegistry,
        threshold: f32,
    ) -> Result<Self> {
        let expected_inputs = vocabulary.len() + EXTRA_FEATURES;
        if classifier.input_len() != expected_inputs {
            return Err(AnalyzerError::artifact(format!(
                "classifier expects {} inputs but the vocabulary implies {expected_inputs}",
                classifier.input_len()
            )));
        }
        if classifier.output_len() != labels.len() {
            return Err(AnalyzerError::artifact(format!(
                "classifier produces {} outputs but the label registry has {}",
                classifier.output_len(),
                labels.len()
            )));
        }
        Ok(Self {
            vocabulary,
            labels,
            classifier,
            medicines,
            threshold,
        })
    }

    /// Load every artifact named by the config.
    ///
    /// Any failure here is fatal; the service must refuse to start rather
    /// than serve with partial state.
    pub fn load(config: &ServiceConfig) -> Result<Self> {
        let start = Instant::now();
        let vocabulary = SymptomVocabulary::load(&config.vocabulary_path())?;
        let labels = LabelRegistry::load(&config.labels_path())?;
        let classifier = MlpClassifier::load(&config.model_path())?;
        let medicines = MedicineRegistry::load(&config.medicine_path)?;
        if medicines.is_empty() {
            warn!(
                "medicine table {} has no rows, recommendations will be empty",
                config.medicine_path.display()
            );
        }
        info!(
            "loaded {} symptom tokens, {} labels, {} medicine rows in {:?}",
            vocabulary.len(),
            labels.len(),
            medicines.len(),
            start.elapsed()
        );
        Self::new(
            vocabulary,
            labels,
            Box::new(classifier),
            medicines,
            config.threshold,
        )
    }

    /// Run the full pipeline for one report: encode, predict, interpret,
    /// join. Pure with respect to the loaded state; safe to call from
    /// concurrent handlers.
    pub fn analyze(&self, report: &SymptomReport) -> Result<Analysis> {
        let features = encode::encode(report, &self.vocabulary);
        let probabilities = self.classifier.predict(&features)?;
        let diseases = interpret::interpret(&probabilities, &self.labels, self.threshold);
        let medicines = recommend::recommend(&diseases, &report.language, &self.medicines);
        Ok(Analysis {
            diseases,
            medicines,
        })
    }

    /// The loaded symptom vocabulary
    #[must_use]
    pub fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    /// The loaded disease labels
    #[must_use]
    pub fn labels(&self) -> &LabelRegistry {
        &self.labels
    }
}
