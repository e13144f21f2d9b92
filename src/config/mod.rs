//! Configuration for the analyzer service.

use std::net::SocketAddr;
use std::path::PathBuf;

use log::warn;

use crate::interpret::DEFAULT_THRESHOLD;

/// Configuration for the analyzer service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the trained artifacts (model, vocabulary, labels)
    pub artifact_dir: PathBuf,
    /// Path to the medicine reference table
    pub medicine_path: PathBuf,
    /// Address the HTTP listener binds to
    pub listen_addr: SocketAddr,
    /// Probability a label must strictly exceed to be reported
    pub threshold: f32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("saved_models"),
            medicine_path: PathBuf::from("data/medicines.csv"),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ServiceConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `ANALYZER_ARTIFACT_DIR`, `ANALYZER_MEDICINE_PATH`,
    /// `ANALYZER_LISTEN_ADDR`, `ANALYZER_THRESHOLD`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("ANALYZER_ARTIFACT_DIR") {
            config.artifact_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("ANALYZER_MEDICINE_PATH") {
            config.medicine_path = PathBuf::from(path);
        }
        if let Ok(addr) = std::env::var("ANALYZER_LISTEN_ADDR") {
            match addr.parse() {
                Ok(addr) => config.listen_addr = addr,
                Err(e) => warn!("ignoring ANALYZER_LISTEN_ADDR {addr:?}: {e}"),
            }
        }
        if let Ok(threshold) = std::env::var("ANALYZER_THRESHOLD") {
            match threshold.parse() {
                Ok(t) => config.threshold = t,
                Err(e) => warn!("ignoring ANALYZER_THRESHOLD {threshold:?}: {e}"),
            }
        }
        config
    }

    /// Path to the classifier weights artifact
    #[must_use]
    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join("symptom_model.json")
    }

    /// Path to the ordered symptom vocabulary artifact
    #[must_use]
    pub fn vocabulary_path(&self) -> PathBuf {
        self.artifact_dir.join("symptom_vocab.json")
    }

    /// Path to the ordered disease label artifact
    #[must_use]
    pub fn labels_path(&self) -> PathBuf {
        self.artifact_dir.join("label_classes.json")
    }
}
